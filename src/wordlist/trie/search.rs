use metrics::increment_counter;

use crate::alphabet::indices;
use crate::error::Result;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// True iff `word` itself was inserted; a stored word that merely
    /// extends `word` does not count.
    pub fn search(&self, word: &str) -> Result<bool> {
        Ok(self.get_node(word)?
            .map(|x| x.is_terminal)
            .unwrap_or(false))
    }

    /// True iff some inserted word begins with `prefix`. The empty prefix
    /// matches even an empty trie.
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        Ok(self.get_node(prefix)?.is_some())
    }

    /// Every stored word beginning with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut results = vec![];
        if let Some(node) = self.get_node(prefix)? {
            let mut path = prefix.to_string();
            node.traverse_prefix(&mut path, &mut |x, word| {
                if x.is_terminal {
                    results.push(word.to_string());
                }
            });
        }
        Ok(results)
    }

    fn get_node(&self, word: &str) -> Result<Option<&TrieNode>> {
        let path = indices(word).map_err(|e| {
            increment_counter!("trie.invalid_input");
            e
        })?;

        let mut current = &self.root;
        for idx in path {
            match current.get_child(idx) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreeset;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    use crate::error::Error;
    use crate::wordlist::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        trie
    }

    fn prefixes(word: &str) -> impl Iterator<Item=&str> {
        (0..=word.len()).map(move |i| &word[..i])
    }

    #[test]
    fn prefix_of_word_is_not_a_word() {
        let trie = trie_of(&["apple"]);
        assert!(trie.search("apple").unwrap());
        assert!(!trie.search("app").unwrap());
        assert!(trie.starts_with("app").unwrap());
        assert!(trie.starts_with("appl").unwrap());
        assert!(!trie.search("appl").unwrap());
    }

    #[test]
    fn shorter_word_shares_path() {
        let trie = trie_of(&["apple", "app"]);
        assert!(trie.search("app").unwrap());
        assert!(trie.search("apple").unwrap());
        assert!(!trie.search("appl").unwrap());
    }

    #[test]
    fn fresh_trie_matches_nothing_but_empty_prefix() {
        let trie = Trie::new();
        assert!(!trie.search("a").unwrap());
        assert!(!trie.starts_with("a").unwrap());
        assert!(!trie.search("").unwrap());
        assert!(trie.starts_with("").unwrap());
    }

    #[test]
    fn empty_string_becomes_word_once_inserted() {
        let mut trie = Trie::new();
        assert!(!trie.search("").unwrap());
        trie.insert("").unwrap();
        assert!(trie.search("").unwrap());
        assert!(trie.starts_with("").unwrap());
    }

    #[test]
    fn queries_over_shared_prefixes() {
        let trie = trie_of(&["a", "to", "tea", "ted", "ten", "i", "in", "inn"]);
        assert!(trie.starts_with("t").unwrap());
        assert!(!trie.search("t").unwrap());
        assert!(trie.search("ten").unwrap());
        assert!(trie.starts_with("te").unwrap());
        assert!(!trie.search("tex").unwrap());
        assert!(!trie.starts_with("tex").unwrap());
        assert!(trie.search("inn").unwrap());
        assert!(!trie.starts_with("inns").unwrap());
    }

    #[test]
    fn every_prefix_of_inserted_word_is_a_prefix() {
        let words = ["apple", "banana", "band", "bandana", "zebra", "z"];
        let trie = trie_of(&words);
        for word in words {
            assert!(trie.search(word).unwrap());
            for prefix in prefixes(word) {
                assert!(trie.starts_with(prefix).unwrap(), "{:?} of {:?}", prefix, word);
            }
        }
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let words = vec!["a", "to", "tea", "ted", "ten", "i", "in", "inn", "", "tent", "zz"];
        let queries = ["", "a", "b", "t", "te", "tea", "teas", "ten", "tent", "tents", "i", "inn", "z", "zz", "zzz"];
        let reference = trie_of(&words);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut shuffled = words.clone();
            shuffled.shuffle(&mut rng);
            let trie = trie_of(&shuffled);
            assert_eq!(trie, reference);
            for q in queries {
                assert_eq!(trie.search(q).unwrap(), reference.search(q).unwrap());
                assert_eq!(trie.starts_with(q).unwrap(), reference.starts_with(q).unwrap());
            }
        }
    }

    #[test]
    fn rejects_invalid_queries() {
        let trie = trie_of(&["apple"]);
        assert!(matches!(trie.search("a1"), Err(Error::InvalidCharacter { character: '1', position: 1 })));
        assert!(matches!(trie.starts_with("A"), Err(Error::InvalidCharacter { character: 'A', position: 0 })));
        assert!(trie.words_with_prefix("ap-").is_err());
    }

    #[test]
    fn lists_words_under_prefix_in_order() {
        let trie = trie_of(&["ten", "a", "tea", "to", "ted", "inn", "in", "i"]);
        assert_eq!(trie.words_with_prefix("te").unwrap(), vec!["tea", "ted", "ten"]);
        assert_eq!(trie.words_with_prefix("in").unwrap(), vec!["in", "inn"]);
        assert!(trie.words_with_prefix("x").unwrap().is_empty());

        let all = trie.words_with_prefix("").unwrap();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(
            all.iter().map(String::as_str).collect::<std::collections::BTreeSet<_>>(),
            btreeset! {"a", "i", "in", "inn", "tea", "ted", "ten", "to"}
        );
    }
}
