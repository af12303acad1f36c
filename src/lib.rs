pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use error::{Error, Result};
pub use wordlist::index::Index;
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, Wordlist};
