//! Failures of the command-line driver itself.
//!
//! Problems in the submitted program are diagnostics, never these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("invalid seed `{0}`: expected a non-negative integer")]
    InvalidSeed(String),

    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("unknown error code `{0}`: codes look like E2004")]
    UnknownErrorCode(String),

    #[error("{0}")]
    Usage(&'static str),
}
