//! Error types for reading generation.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur while casting a reading.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The stalk arithmetic produced an impossible count. Indicates a defect
    /// in the simulator, never a user error.
    #[error("stalk count invariant violated: {0}")]
    InvariantViolation(String),

    /// Catalog lookup error.
    #[error("{0}")]
    Catalog(#[from] iching_core::CatalogError),
}
