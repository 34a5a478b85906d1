use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use persistent_rb::RbSet;

use crate::config::Config;
use crate::error::Error;
use crate::tokenize::tokenize;

/// Counts reported by [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Words produced by the tokenizer, duplicates included.
    pub tokens: usize,
    /// Distinct words written to the output.
    pub unique: usize,
}

/// Raw bytes of `path`; decoding is left to the tokenizer.
pub fn read_source(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Folds every normalized word of `text` into a fresh set. Also returns the
/// number of words seen before deduplication.
pub fn collect_words(text: &[u8]) -> (RbSet<String>, usize) {
    tokenize(text).fold((RbSet::new(), 0), |(set, tokens), word| {
        (set.insert(word), tokens + 1)
    })
}

/// Writes one key per line and returns the number of lines written.
pub fn write_sorted_to<W: Write>(writer: W, words: &RbSet<String>) -> io::Result<usize> {
    let mut writer = BufWriter::new(writer);
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(words.len())
}

pub fn write_sorted(path: &Path, words: &RbSet<String>) -> Result<usize, Error> {
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    write_sorted_to(file, words).map_err(write_error)
}

pub fn run(config: &Config) -> Result<Summary, Error> {
    info!("reading {}", config.input.display());
    let text = read_source(&config.input)?;
    debug!("read {} bytes", text.len());

    let (words, tokens) = collect_words(&text);
    if tokens == 0 {
        warn!("{} contains no words", config.input.display());
    }
    debug!(
        "{} tokens, {} distinct, tree height {}",
        tokens,
        words.len(),
        words.height()
    );

    let unique = write_sorted(&config.output, &words)?;
    info!("wrote {} words to {}", unique, config.output.display());

    Ok(Summary { tokens, unique })
}
