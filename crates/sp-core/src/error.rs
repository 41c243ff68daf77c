//! Workspace base error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into one
//! of their variants where a core check fails on their behalf.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("slot width must be a positive number of seconds, got {0}")]
    InvalidSlotWidth(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
