//! Error types for stowage.

use thiserror::Error;

/// Result type alias for stowage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a loading problem.
///
/// The packing core itself never fails on well-formed input: cartons that
/// cannot be placed are reported in the plan's unpacked list, not as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid carton provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container template provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
