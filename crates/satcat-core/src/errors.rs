//! Cross-cutting error types for satcat.
//!
//! Stage-specific errors (`FetchError`, `IngestError`, `MarketError`) are
//! defined in their respective crates. They converge into `anyhow::Error`
//! in `satcat-cli`.

use thiserror::Error;

/// Errors raised by shared types in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (table shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
