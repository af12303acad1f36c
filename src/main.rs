use std::path::PathBuf;

use letter_trie::{FileFormat, Wordlist};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Load lowercase words into a trie and answer membership or prefix queries.
#[derive(StructOpt)]
struct Cli {
    /// Wordlist to load, one word per line
    #[structopt(short, long, parse(from_os_str))]
    words: Option<PathBuf>,
    /// Column delimiter for the wordlist
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word
    #[structopt(short, long, requires = "delimiter")]
    column: Option<usize>,
    /// Fail on the first invalid line instead of skipping it
    #[structopt(long)]
    strict: bool,
    /// Extra words to insert
    #[structopt(short, long)]
    add: Vec<String>,
    #[structopt(subcommand)]
    query: Option<Query>,
}

#[derive(StructOpt)]
enum Query {
    /// Is WORD a stored word?
    Search { word: String },
    /// Does some stored word start with PREFIX?
    Prefix { prefix: String },
    /// List stored words starting with PREFIX
    Complete { prefix: String },
}

impl Cli {
    fn format(&self) -> FileFormat {
        let skip_invalid = !self.strict;
        match (self.delimiter, self.column) {
            (Some(d), Some(c)) => FileFormat::builder()
                .delimiter(d)
                .word_column(c)
                .skip_invalid(skip_invalid)
                .build(),
            (Some(d), None) => FileFormat::builder()
                .delimiter(d)
                .skip_invalid(skip_invalid)
                .build(),
            // structopt rejects a column without a delimiter
            (None, _) => FileFormat::builder()
                .skip_invalid(skip_invalid)
                .build(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();

    let mut wl = match &args.words {
        Some(path) => Wordlist::from_file(path, &args.format())?,
        None => Wordlist::new(),
    };
    for word in &args.add {
        wl.insert(word)?;
    }

    match &args.query {
        None => {}
        Some(Query::Search { word }) => println!("{}", wl.contains(word)?),
        Some(Query::Prefix { prefix }) => println!("{}", wl.starts_with(prefix)?),
        Some(Query::Complete { prefix }) => {
            for word in wl.words_with_prefix(prefix)? {
                println!("{}", word);
            }
        }
    }
    Ok(())
}
