//! Casting a full reading.

use iching_core::symbol::HEXAGRAM_LINES;
use iching_core::{Catalog, Change, Hexagram};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::{EntropyMode, OracleConfig};
use crate::error::OracleResult;
use crate::seed::reading_rng;
use crate::yarrow::{LineCast, cast_line};

/// The outcome of one divination.
#[derive(Debug, Clone, Serialize)]
pub struct Reading<'c> {
    /// The question that seeded the draw.
    pub question: String,
    /// How the random source was seeded.
    pub entropy: EntropyMode,
    /// The hexagram cast.
    pub hexagram: &'c Hexagram,
    /// The change to the resulting hexagram, if any line is changing.
    pub change: Option<Change>,
    /// The six line casts, bottom first.
    pub lines: Vec<LineCast>,
}

impl Reading<'_> {
    /// Number of the hexagram the reading transforms into, if any.
    pub fn resulting_number(&self) -> Option<u32> {
        self.change.as_ref().map(|c| c.to)
    }

    /// Raw line sums (6-9), bottom first.
    pub fn sums(&self) -> Vec<u32> {
        self.lines.iter().map(|l| l.sum).collect()
    }
}

/// Casts readings against a catalog.
#[derive(Debug, Clone)]
pub struct Oracle<'c> {
    catalog: &'c Catalog,
    config: OracleConfig,
}

impl<'c> Oracle<'c> {
    /// Create an oracle over `catalog`.
    pub fn new(catalog: &'c Catalog, config: OracleConfig) -> Self {
        Self { catalog, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Cast a reading for `question`.
    pub fn ask(&self, question: &str) -> OracleResult<Reading<'c>> {
        let mut rng = reading_rng(question, self.config.entropy);
        cast_reading(self.catalog, question, self.config.entropy, &mut rng)
    }
}

/// Cast six lines from `rng` and resolve them against `catalog`.
pub fn cast_reading<'c>(
    catalog: &'c Catalog,
    question: &str,
    entropy: EntropyMode,
    rng: &mut StdRng,
) -> OracleResult<Reading<'c>> {
    let lines = (0..HEXAGRAM_LINES)
        .map(|position| {
            let line = cast_line(rng)?;
            tracing::debug!(
                position = position + 1,
                sum = line.sum,
                kind = %line.kind,
                "cast line"
            );
            Ok(line)
        })
        .collect::<OracleResult<Vec<_>>>()?;

    let values: Vec<u8> = lines.iter().map(LineCast::value).collect();
    let flips: Vec<u8> = lines.iter().map(|l| u8::from(l.is_changing())).collect();

    let hexagram = catalog.hexagram_by_lines(&values)?;
    let change = catalog.change_lines(hexagram, &flips)?;

    tracing::info!(
        hexagram = hexagram.number,
        becomes = ?change.as_ref().map(|c| c.to),
        %entropy,
        "reading cast"
    );

    Ok(Reading {
        question: question.to_string(),
        entropy,
        hexagram,
        change,
        lines,
    })
}
