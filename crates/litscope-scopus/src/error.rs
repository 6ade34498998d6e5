//! Error type for loading a Scopus export
//!
//! Every variant is fatal: a load either yields the full collection or
//! fails with the first problem found.

use std::num::ParseIntError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LoadError {
    /// The export could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Structurally broken CSV (bad quoting, invalid UTF-8 in a cell, ...).
    Csv(csv::Error),
    /// A numeric column holds text that is not a base-10 integer.
    InvalidInteger {
        row: usize,
        column: &'static str,
        value: String,
        source: ParseIntError,
    },
    /// An author chunk lacks the `Last, Initials` prefix (strict mode only).
    MalformedAuthor { row: usize, chunk: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "IO: {}: {source}", path.display()),
            Self::Csv(e) => write!(f, "CSV: {e}"),
            Self::InvalidInteger {
                row, column, value, ..
            } => write!(f, "row {row}: column \"{column}\" is not an integer: {value:?}"),
            Self::MalformedAuthor { row, chunk } => {
                write!(f, "row {row}: author entry without name and initials: {chunk:?}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(e) => Some(e),
            Self::InvalidInteger { source, .. } => Some(source),
            Self::MalformedAuthor { .. } => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl LoadError {
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// 1-based data row the error was found in, when it is tied to a row.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::InvalidInteger { row, .. } | Self::MalformedAuthor { row, .. } => Some(*row),
            Self::Csv(e) => e.position().map(|p| p.record() as usize),
            Self::Io { .. } => None,
        }
    }
}
