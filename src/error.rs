//! Errors raised inside embed providers.
//!
//! These never reach callers of [`EmbedRouter::resolve`](crate::embed::EmbedRouter::resolve);
//! the router logs them and moves on to the next provider.

use thiserror::Error;

/// Provider-internal faults.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("malformed percent-encoding: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("malformed percent-escape in {0:?}")]
    MalformedEscape(String),

    #[error("invalid number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        source: std::num::ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, EmbedError>;
