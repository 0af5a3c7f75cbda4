//! Deriving a random source from the question text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::config::EntropyMode;

/// The 32-byte seed for a question: SHA-256 of its text, with 32 bytes of
/// thread randomness hashed in when `mode` is [`EntropyMode::Mixed`].
pub fn seed_for(question: &str, mode: EntropyMode) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(question.as_bytes());
    if mode == EntropyMode::Mixed {
        let extra: [u8; 32] = rand::rng().random();
        hasher.update(extra);
    }
    hasher.finalize().into()
}

/// A fresh random source for one reading.
pub fn reading_rng(question: &str, mode: EntropyMode) -> StdRng {
    StdRng::from_seed(seed_for(question, mode))
}
