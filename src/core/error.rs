// src/core/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntGlobError {
    #[error("invalid glob {glob:?}: {reason}")]
    InvalidGlob { glob: String, reason: String },

    #[error("no include globs have been specified - nothing to find")]
    EmptyIncludes,

    #[error("internal precondition violation: {0}")]
    InvalidPrecondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
