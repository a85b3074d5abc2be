//! Core error types

use thiserror::Error;

/// Errors raised while assembling a pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A character set given to a pipeline has no members
    #[error("character set '{name}' is empty")]
    EmptyCharSet {
        /// Name of the offending set
        name: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
