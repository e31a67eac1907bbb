//! Error kinds for the documentation run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A source file did not parse into a usable syntax tree.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A glob pattern was malformed.
    #[error("invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// File discovery failed while walking a pattern's matches.
    #[error("failed to read a match for glob pattern '{pattern}'")]
    Glob {
        pattern: String,
        source: glob::GlobError,
    },

    /// A source or target file could not be read or written.
    #[error("failed to access {}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A requested declaration kind is not one of the five known names.
    #[error("unknown declaration kind '{0}' (expected variable, function, type, class or interface)")]
    UnknownKind(String),
}
