//! Core types for the I Ching: trigrams, hexagrams, and the changes between them.
//!
//! The [`Catalog`] is built once from bundled reference data and passed by
//! reference to everything that needs lookups. Changes between hexagrams are
//! computed on demand; the full relationship graph is built once and cached.

/// The immutable trigram and hexagram catalog.
pub mod catalog;
/// Transformations between hexagrams.
pub mod change;
/// Error types used throughout the crate.
pub mod error;
/// Relationship graph export.
pub mod graph;
/// Trigram and hexagram records, line encoding helpers.
pub mod symbol;

/// Re-export catalog types.
pub use catalog::{Catalog, TrigramSequence};
/// Re-export change type.
pub use change::Change;
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export graph types.
pub use graph::{Edge, Graph, Node};
/// Re-export symbol types.
pub use symbol::{Hexagram, Position, SymbolKind, Trigram};
