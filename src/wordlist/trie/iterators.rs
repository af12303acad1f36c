use derive_new::new;

use crate::alphabet::ALPHABET;
use crate::wordlist::trie::node::TrieNode;

/// Walks the present children of a node in slot order, from either end.
#[derive(Debug, new)]
pub(crate) struct TrieCursor<'a> {
    node: &'a TrieNode,
    #[new(default)]
    idx: usize,
    #[new(value = "ALPHABET.len()")]
    back: usize,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.back {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.get_child(idx) {
                return Some(child);
            }
        }
        None
    }
}

impl<'a> DoubleEndedIterator for TrieCursor<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.back > self.idx {
            self.back -= 1;
            if let Some(child) = self.node.get_child(self.back) {
                return Some(child);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor::new(self)
    }
}
