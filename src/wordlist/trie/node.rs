use std::fmt::{Debug, Formatter};

use metrics::increment_counter;
use tracing::debug;

use crate::alphabet::{get_letter, ALPHABET};

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) letter: char,
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    fn create_child(idx: usize) -> Box<TrieNode> {
        increment_counter!("trie.nodes_created");
        debug!(letter = %get_letter(idx), "creating node");
        Box::new(TrieNode {
            children: Default::default(),
            letter: get_letter(idx),
            is_terminal: false,
        })
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(|| Self::create_child(idx))
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Visits this node and then every descendant, children in slot order.
    /// `path` holds the letters from the root to the visited node.
    pub(crate) fn traverse_prefix<F>(&self, path: &mut String, f: &mut F)
        where F: FnMut(&TrieNode, &str) {
        let base = path.len();
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            if depth > 0 {
                path.truncate(base + depth - 1);
                path.push(node.letter);
            }
            f(node, path);
            stack.extend(node.into_iter().rev().map(|child| (child, depth + 1)));
        }
        path.truncate(base);
    }
}

// Deep chains would overflow the stack with the derived recursive impls,
// so teardown and comparison walk the tree with an explicit stack.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.letter != b.letter || a.is_terminal != b.is_terminal {
                return false;
            }
            for (x, y) in a.children.iter().zip(b.children.iter()) {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.into_iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
