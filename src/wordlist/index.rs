use crate::error::Result;
use crate::wordlist::trie::Trie;

/// Membership and prefix queries over a set of words.
pub trait Index {
    fn insert(&mut self, word: &str) -> Result<()>;
    fn contains(&self, word: &str) -> Result<bool>;
    fn starts_with(&self, prefix: &str) -> Result<bool>;

    fn add_all<'a, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item=&'a str> {
        items.into_iter().try_for_each(|x| self.insert(x))
    }
}

impl Index for Trie {
    fn insert(&mut self, word: &str) -> Result<()> {
        Trie::insert(self, word)
    }

    fn contains(&self, word: &str) -> Result<bool> {
        self.search(word)
    }

    fn starts_with(&self, prefix: &str) -> Result<bool> {
        Trie::starts_with(self, prefix)
    }
}
