use crate::symbol::SymbolKind;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog lookups, change computation, and data loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A trigram or hexagram number outside its valid range, or not an integer.
    #[error("{kind} number must be an integer between 1 and {max}, got {value}")]
    OutOfRange {
        /// Which kind of symbol was being looked up.
        kind: SymbolKind,
        /// The highest valid number for that kind.
        max: u32,
        /// The rejected input, as given.
        value: String,
    },

    /// Malformed structured input: line vectors, sequence names, position filters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The reference data violates a catalog invariant.
    #[error("invalid reference data: {0}")]
    Data(String),

    /// The reference data is not valid JSON for the expected shape.
    #[error("failed to parse reference data: {0}")]
    Json(#[from] serde_json::Error),
}
