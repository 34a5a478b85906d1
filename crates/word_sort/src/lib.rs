//! Reads a text, folds its normalized words into a persistent red-black set
//! and writes the distinct words back out in sorted order.

mod config;
mod error;
mod pipeline;
mod tokenize;

pub use config::{Config, Invocation, LOG_ENV, USAGE};
pub use error::Error;
pub use pipeline::{Summary, collect_words, read_source, run, write_sorted, write_sorted_to};
pub use tokenize::{normalize_word, tokenize};
