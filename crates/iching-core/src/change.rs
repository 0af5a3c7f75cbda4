//! Transformations between hexagrams.
//!
//! A [`Change`] records which lines differ between two hexagrams: the XOR of
//! their bit patterns. Changing from a hexagram to itself is not a change;
//! those lookups return `None` rather than an all-zero change.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::symbol::{
    HEXAGRAM_LINES, Hexagram, SymbolKind, bits_to_binary, bits_to_lines, lines_to_bits,
    validate_lines,
};

/// The transformation from one hexagram to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// Number of the starting hexagram.
    pub from: u32,
    /// Number of the resulting hexagram.
    pub to: u32,
    /// Changed lines as a bit string, top line first.
    pub binary: String,
    /// Changed lines bottom first, 1 = this line flips.
    pub changing_lines: [u8; HEXAGRAM_LINES],
}

impl Change {
    /// The change from `from` to `to`, or `None` when they are the same hexagram.
    pub fn between(from: &Hexagram, to: &Hexagram) -> Option<Self> {
        let diff = from.bits() ^ to.bits();
        if diff == 0 {
            return None;
        }
        Some(Self {
            from: from.number,
            to: to.number,
            binary: bits_to_binary(diff, HEXAGRAM_LINES),
            changing_lines: bits_to_lines(diff),
        })
    }

    /// Number of lines that flip.
    pub fn changing_count(&self) -> usize {
        self.changing_lines.iter().filter(|&&l| l == 1).count()
    }

    /// Positions (1 = bottom) of the lines that flip.
    pub fn changing_positions(&self) -> Vec<usize> {
        self.changing_lines
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l == 1)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.binary)
    }
}

impl Catalog {
    /// The change from `hexagram` to hexagram `number`, or `None` if they
    /// are the same.
    pub fn change_to(&self, hexagram: &Hexagram, number: u32) -> CatalogResult<Option<Change>> {
        SymbolKind::Hexagram.check(number)?;
        if hexagram.number == number {
            return Ok(None);
        }
        let target = self.hexagram(number)?;
        Ok(Change::between(hexagram, target))
    }

    /// All 63 changes from `hexagram` to every other hexagram, in target order.
    ///
    /// Computed on first access and cached on the hexagram.
    pub fn changes<'a>(&'a self, hexagram: &'a Hexagram) -> &'a [Change] {
        hexagram.changes.get_or_init(|| {
            self.hexagrams
                .iter()
                .filter_map(|other| Change::between(hexagram, other))
                .collect()
        })
    }

    /// The change produced by flipping the lines marked 1 in `flips`
    /// (six entries, bottom first), or `None` if nothing flips.
    pub fn change_lines(&self, hexagram: &Hexagram, flips: &[u8]) -> CatalogResult<Option<Change>> {
        validate_lines(&hexagram.lines, HEXAGRAM_LINES, "hexagram lines")?;
        validate_lines(flips, HEXAGRAM_LINES, "lines to flip")?;

        let target_lines: Vec<u8> = hexagram
            .lines
            .iter()
            .zip(flips)
            .map(|(line, flip)| line ^ flip)
            .collect();
        if lines_to_bits(&target_lines) == hexagram.bits() {
            return Ok(None);
        }
        let target = self.hexagram_by_lines(&target_lines)?;
        Ok(Change::between(hexagram, target))
    }
}
