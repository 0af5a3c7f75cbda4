use std::sync::OnceLock;

use serde::Serialize;

use crate::change::Change;
use crate::error::{CatalogError, CatalogResult};

/// Number of lines in a trigram.
pub const TRIGRAM_LINES: usize = 3;
/// Number of lines in a hexagram.
pub const HEXAGRAM_LINES: usize = 6;

/// The two kinds of symbol held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A three-line symbol, numbered 1-8.
    Trigram,
    /// A six-line symbol, numbered 1-64.
    Hexagram,
}

impl SymbolKind {
    /// The highest valid number for this kind.
    pub fn max(self) -> u32 {
        match self {
            Self::Trigram => 8,
            Self::Hexagram => 64,
        }
    }

    /// Check that `number` lies within `1..=max`.
    pub fn check(self, number: u32) -> CatalogResult<u32> {
        if (1..=self.max()).contains(&number) {
            Ok(number)
        } else {
            Err(self.out_of_range(number.to_string()))
        }
    }

    /// Parse a textual identifier, rejecting anything that is not an integer
    /// within `1..=max` (fractions, signs, empty input) as out of range.
    pub fn parse_number(self, input: &str) -> CatalogResult<u32> {
        let trimmed = input.trim();
        let number = trimmed
            .parse::<u32>()
            .map_err(|_| self.out_of_range(trimmed.to_string()))?;
        self.check(number)
    }

    fn out_of_range(self, value: String) -> CatalogError {
        CatalogError::OutOfRange {
            kind: self,
            max: self.max(),
            value: if value.is_empty() {
                "nothing".to_string()
            } else {
                value
            },
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trigram => write!(f, "trigram"),
            Self::Hexagram => write!(f, "hexagram"),
        }
    }
}

/// Which half of a hexagram a trigram occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Lines 4-6.
    Top,
    /// Lines 1-3.
    Bottom,
}

impl std::str::FromStr for Position {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(CatalogError::InvalidArgument(format!(
                "position must be one of: top, bottom (got \"{other}\")"
            ))),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// One of the eight trigrams.
#[derive(Debug, Clone, Serialize)]
pub struct Trigram {
    /// Catalog number (1-8).
    pub number: u32,
    /// English names, most literal first.
    pub names: Vec<String>,
    /// Chinese name with pinyin.
    pub chinese_name: String,
    /// Unicode trigram glyph.
    pub character: String,
    /// Lines as a bit string, top line first.
    pub binary: String,
    /// Lines bottom first, 0 = yin, 1 = yang.
    pub lines: [u8; TRIGRAM_LINES],
    /// Traditional attribute.
    pub attribute: String,
    /// Natural images.
    pub images: Vec<String>,
    /// Chinese image with pinyin.
    pub chinese_image: String,
    /// Place in the trigram family.
    pub family_relationship: String,
}

impl Trigram {
    /// The lines packed into an integer, bottom line least significant.
    pub fn bits(&self) -> u8 {
        lines_to_bits(&self.lines)
    }

    /// The primary English name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.character,
            self.number,
            self.name(),
            self.chinese_name
        )
    }
}

/// One of the sixty-four hexagrams.
#[derive(Debug, Clone, Serialize)]
pub struct Hexagram {
    /// King Wen sequence number (1-64).
    pub number: u32,
    /// English names, most literal first.
    pub names: Vec<String>,
    /// Chinese name with pinyin.
    pub chinese_name: String,
    /// Unicode hexagram glyph.
    pub character: String,
    /// Lines as a bit string, top line first.
    pub binary: String,
    /// Lines bottom first, 0 = yin, 1 = yang.
    pub lines: [u8; HEXAGRAM_LINES],
    /// Number of the trigram formed by lines 4-6.
    pub top_trigram: u32,
    /// Number of the trigram formed by lines 1-3.
    pub bottom_trigram: u32,
    #[serde(skip)]
    pub(crate) changes: OnceLock<Vec<Change>>,
}

impl Hexagram {
    /// The lines packed into an integer, bottom line least significant.
    pub fn bits(&self) -> u8 {
        lines_to_bits(&self.lines)
    }

    /// The primary English name.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    /// The trigram number at the given position.
    pub fn trigram_at(&self, position: Position) -> u32 {
        match position {
            Position::Top => self.top_trigram,
            Position::Bottom => self.bottom_trigram,
        }
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.character,
            self.number,
            self.name(),
            self.chinese_name
        )
    }
}

/// Check that `lines` has exactly `expected` entries, each 0 or 1.
pub fn validate_lines(lines: &[u8], expected: usize, what: &str) -> CatalogResult<()> {
    if lines.len() != expected {
        return Err(CatalogError::InvalidArgument(format!(
            "{what} must have exactly {expected} entries, got {}",
            lines.len()
        )));
    }
    if let Some(bad) = lines.iter().find(|&&l| l > 1) {
        return Err(CatalogError::InvalidArgument(format!(
            "{what} entries must be 0 or 1, got {bad}"
        )));
    }
    Ok(())
}

/// Pack bottom-first lines into an integer.
pub fn lines_to_bits(lines: &[u8]) -> u8 {
    lines
        .iter()
        .enumerate()
        .fold(0, |acc, (i, &line)| acc | ((line & 1) << i))
}

/// Unpack an integer into `N` bottom-first lines.
pub fn bits_to_lines<const N: usize>(bits: u8) -> [u8; N] {
    std::array::from_fn(|i| (bits >> i) & 1)
}

/// Render bits as a zero-padded string of `width` characters, top line first.
pub fn bits_to_binary(bits: u8, width: usize) -> String {
    format!("{bits:0width$b}")
}
