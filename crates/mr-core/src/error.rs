//! Shared error type for `mr-core`.
//!
//! Sub-crates define their own enums and wrap `CoreError` as one variant via
//! `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
