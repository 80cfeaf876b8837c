//! Error types for the engine and its loading boundary.
//!
//! The derivation functions themselves are total and never return these; only the
//! snapshot sources, the expected-return simulator and the configuration loader do.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// One of the parallel reads backing a view failed; the view gets nothing.
    #[error("Failed to load view data: {0}")]
    Fetch(Box<Error>),

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub(crate) fn fetch(inner: Error) -> Self {
        match inner {
            // Don't nest when a composed read already failed.
            Error::Fetch(_) => inner,
            other => Error::Fetch(Box::new(other)),
        }
    }
}
