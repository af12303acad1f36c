use crate::error::{Error, Result};

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn get_letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Maps every character of `word` to its slot index, failing on the first
/// character outside the alphabet.
pub fn indices(word: &str) -> Result<Vec<usize>> {
    word.chars()
        .enumerate()
        .map(|(position, c)| get_idx(c).ok_or(Error::InvalidCharacter { character: c, position }))
        .collect()
}
