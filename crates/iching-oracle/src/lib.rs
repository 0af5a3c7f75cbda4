//! Yarrow-stalk divination for the I Ching.
//!
//! Simulates the traditional 49-stalk counting procedure over a random
//! source seeded from the question text, then resolves the six cast lines
//! into a hexagram and its change through the [`iching_core::Catalog`].

pub mod config;
pub mod error;
pub mod reading;
pub mod seed;
pub mod yarrow;

pub use config::{EntropyMode, OracleConfig};
pub use error::{OracleError, OracleResult};
pub use reading::{Oracle, Reading, cast_reading};
pub use yarrow::{LineCast, LineKind, StalkDivision};
