use std::fmt::{Debug, Formatter};

use metrics::increment_counter;

use crate::alphabet::indices;
use crate::error::Result;
use crate::wordlist::trie::node::TrieNode;

/// A prefix tree over words spelled with `a`..=`z`.
///
/// The root stands for the empty prefix. Nodes are created on first use by
/// [`Trie::insert`] and live until the trie is dropped.
#[derive(Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
        }
    }

    /// Adds `word` to the trie. The whole word is checked before any node
    /// is created, so a rejected word leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let path = indices(word).map_err(|e| {
            increment_counter!("trie.invalid_input");
            e
        })?;

        let mut current = &mut self.root;
        for idx in path {
            current = current.get_or_create_child(idx);
        }
        current.is_terminal = true;
        increment_counter!("trie.words_inserted");
        Ok(())
    }

    /// Inserts every word in order, stopping at the first one that is
    /// rejected. Words before it stay inserted.
    pub fn add_all<'f, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().try_for_each(|x| self.insert(x))
    }

    pub fn is_empty(&self) -> bool {
        !self.root.is_terminal && !self.root.has_children()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        self.root.traverse_prefix(&mut String::new(), &mut |node, path| {
            if node.is_terminal {
                l.entry(&path);
            }
        });
        l.finish()
    }
}
