use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn PDF bytes into text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("pdf extraction failed: {0}")]
    Parse(String),

    #[error("pdf extraction panicked (malformed or encrypted document)")]
    Panicked,
}

/// Fatal batch errors. Any of these stops the run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot read folder {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot extract text from {path}: {source}")]
    Extract {
        path: PathBuf,
        source: SourceError,
    },

    #[error("target already exists: {to} (renaming {from})")]
    Collision { from: PathBuf, to: PathBuf },

    #[error("cannot rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
