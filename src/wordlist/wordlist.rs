use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::trie::Trie;

#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

/// How words are laid out in a wordlist file: one per line, or one column
/// of a delimited line.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default = true)]
    skip_invalid: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .map(str::trim)
                    .ok_or(Error::MissingColumn { line: line_no, column })
            }
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_file<P: AsRef<Path>>(filename: P, format: &FileFormat) -> Result<Wordlist> {
        info!(path = %filename.as_ref().display(), "reading words");
        let file = File::open(filename)?;
        Self::from_reader(file, format)
    }

    /// Builds a wordlist from newline-separated input. Blank lines are
    /// ignored; rejected lines are skipped or fail the load depending on
    /// `format.skip_invalid`.
    pub fn from_reader<R: Read>(reader: R, format: &FileFormat) -> Result<Wordlist> {
        let start = Instant::now();
        let mut wordlist = Wordlist::new();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let result = format.parse_line(line, line_no)
                .and_then(|word| wordlist.trie.insert(word)
                    .map_err(|e| Error::InvalidWord { line: line_no, source: Box::new(e) }));
            match result {
                Ok(()) => {
                    count += 1;
                    if count % 100000 == 0 {
                        debug!(count, line = line_no, "loading words");
                    }
                }
                Err(e) if format.skip_invalid => {
                    warn!(error = %e, "skipping line");
                    failures += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(count, failures, elapsed_ms = start.elapsed().as_millis() as u64, "read words");
        Ok(wordlist)
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        self.trie.search(word)
    }

    delegate! {
        to self.trie {
            pub fn starts_with(&self, prefix: &str) -> Result<bool>;
            pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
            pub fn insert(&mut self, word: &str) -> Result<()>;
        }
    }
}
