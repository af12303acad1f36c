//! Error types for letter-trie

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid character {character:?} at position {position}: only 'a'..='z' are supported")]
    InvalidCharacter { character: char, position: usize },

    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("line {line}: no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
