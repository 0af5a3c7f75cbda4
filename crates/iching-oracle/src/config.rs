//! Configuration for casting readings.

use serde::{Deserialize, Serialize};

/// Where the randomness behind a reading comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntropyMode {
    /// The question alone seeds the draw: the same question always gives
    /// the same reading.
    Seeded,
    /// The question is mixed with fresh system randomness: repeated
    /// questions give independent readings.
    #[default]
    Mixed,
}

impl std::fmt::Display for EntropyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seeded => write!(f, "seeded"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Configuration for an oracle.
#[derive(Debug, Clone, Default)]
pub struct OracleConfig {
    /// How the random source is seeded.
    pub entropy: EntropyMode,
}

impl OracleConfig {
    /// A configuration whose readings depend only on the question.
    pub fn seeded() -> Self {
        Self {
            entropy: EntropyMode::Seeded,
        }
    }

    /// Set the entropy mode.
    pub fn with_entropy(mut self, entropy: EntropyMode) -> Self {
        self.entropy = entropy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_mixes_entropy() {
        let cfg = OracleConfig::default();
        assert_eq!(cfg.entropy, EntropyMode::Mixed);
    }

    #[test]
    fn builder_methods() {
        assert_eq!(OracleConfig::seeded().entropy, EntropyMode::Seeded);
        let cfg = OracleConfig::seeded().with_entropy(EntropyMode::Mixed);
        assert_eq!(cfg.entropy, EntropyMode::Mixed);
    }

    #[test]
    fn entropy_mode_display() {
        assert_eq!(EntropyMode::Seeded.to_string(), "seeded");
        assert_eq!(EntropyMode::Mixed.to_string(), "mixed");
    }
}
