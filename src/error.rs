//! Errors raised while reading user-supplied sequences or benchmark config.
//!
//! The sorts themselves never fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("element {position} is not an integer: {token:?}")]
    InvalidElement { position: usize, token: String },

    #[error("unbalanced brackets in list: {0:?}")]
    UnbalancedBrackets(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to write results: {0}")]
    Output(#[source] serde_json::Error),
}
