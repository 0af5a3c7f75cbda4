//! The immutable catalog of trigrams and hexagrams.
//!
//! A [`Catalog`] is built once from reference data (the bundled
//! `data/iching.json` by default) and validated against the structural
//! invariants: numbering, bit strings that agree with line vectors, and
//! hexagram halves that agree with their trigrams. After construction it is
//! read-only and can be shared across threads by reference.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::graph::Graph;
use crate::symbol::{
    HEXAGRAM_LINES, Hexagram, Position, SymbolKind, TRIGRAM_LINES, Trigram, lines_to_bits,
    validate_lines,
};

const REFERENCE_DATA: &str = include_str!("../data/iching.json");

/// A named fixed arrangement of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrigramSequence {
    /// The Fu Xi arrangement.
    EarlierHeaven,
    /// The King Wen arrangement.
    LaterHeaven,
}

impl TrigramSequence {
    /// All recognized sequences.
    pub fn all() -> &'static [Self] {
        &[Self::EarlierHeaven, Self::LaterHeaven]
    }

    /// The trigram numbers in arrangement order.
    pub fn numbers(self) -> [u32; 8] {
        match self {
            Self::EarlierHeaven => [1, 6, 4, 5, 2, 3, 7, 8],
            Self::LaterHeaven => [7, 2, 8, 1, 4, 5, 3, 6],
        }
    }

    /// The name used to select this sequence.
    pub fn name(self) -> &'static str {
        match self {
            Self::EarlierHeaven => "earlierHeaven",
            Self::LaterHeaven => "laterHeaven",
        }
    }
}

impl std::str::FromStr for TrigramSequence {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|seq| seq.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(|seq| seq.name()).collect();
                CatalogError::InvalidArgument(format!(
                    "name must be a trigram sequence name: {}",
                    names.join(", ")
                ))
            })
    }
}

impl std::fmt::Display for TrigramSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// Raw shape of the reference resource.

#[derive(Deserialize)]
struct ReferenceData {
    trigrams: Vec<TrigramRecord>,
    hexagrams: Vec<HexagramRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrigramRecord {
    number: u32,
    names: Vec<String>,
    chinese_name: String,
    character: String,
    binary: String,
    lines: Vec<u8>,
    attribute: String,
    images: Vec<String>,
    chinese_image: String,
    family_relationship: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HexagramRecord {
    number: u32,
    names: Vec<String>,
    chinese_name: String,
    character: String,
    binary: String,
    lines: Vec<u8>,
    top_trigram: u32,
    bottom_trigram: u32,
}

/// The full set of trigrams and hexagrams.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) trigrams: Vec<Trigram>,
    pub(crate) hexagrams: Vec<Hexagram>,
    by_bits: HashMap<u8, usize>,
    pub(crate) graph: OnceLock<Graph>,
}

impl Catalog {
    /// Build the catalog from the bundled reference data.
    pub fn load() -> CatalogResult<Self> {
        Self::from_json(REFERENCE_DATA)
    }

    /// Build a catalog from reference data in JSON form.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let data: ReferenceData = serde_json::from_str(json)?;
        let catalog = Self::from_reference(data)?;
        tracing::debug!(
            trigrams = catalog.trigrams.len(),
            hexagrams = catalog.hexagrams.len(),
            "loaded symbol catalog"
        );
        Ok(catalog)
    }

    fn from_reference(data: ReferenceData) -> CatalogResult<Self> {
        expect_count(SymbolKind::Trigram, data.trigrams.len())?;
        expect_count(SymbolKind::Hexagram, data.hexagrams.len())?;

        let trigrams = data
            .trigrams
            .into_iter()
            .enumerate()
            .map(|(i, record)| build_trigram(i, record))
            .collect::<CatalogResult<Vec<_>>>()?;

        let hexagrams = data
            .hexagrams
            .into_iter()
            .enumerate()
            .map(|(i, record)| build_hexagram(i, record, &trigrams))
            .collect::<CatalogResult<Vec<_>>>()?;

        let mut by_bits = HashMap::with_capacity(hexagrams.len());
        for (idx, hexagram) in hexagrams.iter().enumerate() {
            if let Some(prev) = by_bits.insert(hexagram.bits(), idx) {
                return Err(CatalogError::Data(format!(
                    "hexagrams {} and {} share binary {}",
                    prev + 1,
                    hexagram.number,
                    hexagram.binary
                )));
            }
        }

        Ok(Self {
            trigrams,
            hexagrams,
            by_bits,
            graph: OnceLock::new(),
        })
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Look up a trigram by number (1-8).
    pub fn trigram(&self, number: u32) -> CatalogResult<&Trigram> {
        let number = SymbolKind::Trigram.check(number)?;
        Ok(&self.trigrams[(number - 1) as usize])
    }

    /// Look up a hexagram by number (1-64).
    pub fn hexagram(&self, number: u32) -> CatalogResult<&Hexagram> {
        let number = SymbolKind::Hexagram.check(number)?;
        Ok(&self.hexagrams[(number - 1) as usize])
    }

    /// All trigrams in numeric order.
    pub fn trigrams(&self) -> &[Trigram] {
        &self.trigrams
    }

    /// All hexagrams in numeric order.
    pub fn hexagrams(&self) -> &[Hexagram] {
        &self.hexagrams
    }

    /// The eight trigrams in the arrangement named `name`
    /// (`earlierHeaven` or `laterHeaven`).
    pub fn trigram_sequence(&self, name: &str) -> CatalogResult<Vec<&Trigram>> {
        let sequence: TrigramSequence = name.parse()?;
        Ok(self.sequence(sequence))
    }

    /// The eight trigrams in the given arrangement.
    pub fn sequence(&self, sequence: TrigramSequence) -> Vec<&Trigram> {
        sequence
            .numbers()
            .iter()
            .map(|&n| &self.trigrams[(n - 1) as usize])
            .collect()
    }

    /// Hexagrams containing `trigram`, restricted to one half when
    /// `position` is given.
    pub fn trigram_hexagrams(
        &self,
        trigram: &Trigram,
        position: Option<Position>,
    ) -> Vec<&Hexagram> {
        self.hexagrams
            .iter()
            .filter(|h| match position {
                Some(pos) => h.trigram_at(pos) == trigram.number,
                None => h.top_trigram == trigram.number || h.bottom_trigram == trigram.number,
            })
            .collect()
    }

    /// The trigram forming lines 4-6 of `hexagram`.
    pub fn top_trigram(&self, hexagram: &Hexagram) -> CatalogResult<&Trigram> {
        self.trigram(hexagram.top_trigram)
    }

    /// The trigram forming lines 1-3 of `hexagram`.
    pub fn bottom_trigram(&self, hexagram: &Hexagram) -> CatalogResult<&Trigram> {
        self.trigram(hexagram.bottom_trigram)
    }

    /// Find the hexagram with the given packed bits (bottom line least significant).
    pub fn hexagram_by_bits(&self, bits: u8) -> Option<&Hexagram> {
        self.by_bits.get(&bits).map(|&idx| &self.hexagrams[idx])
    }

    /// Find the hexagram whose lines (bottom first) match exactly.
    pub fn hexagram_by_lines(&self, lines: &[u8]) -> CatalogResult<&Hexagram> {
        validate_lines(lines, HEXAGRAM_LINES, "hexagram lines")?;
        let bits = lines_to_bits(lines);
        self.hexagram_by_bits(bits).ok_or_else(|| {
            CatalogError::Data(format!("no hexagram has lines {lines:?}"))
        })
    }
}

fn expect_count(kind: SymbolKind, found: usize) -> CatalogResult<()> {
    if found == kind.max() as usize {
        Ok(())
    } else {
        Err(CatalogError::Data(format!(
            "expected {} {kind}s, found {found}",
            kind.max()
        )))
    }
}

fn expect_number(kind: SymbolKind, index: usize, number: u32) -> CatalogResult<()> {
    if number as usize == index + 1 {
        Ok(())
    } else {
        Err(CatalogError::Data(format!(
            "{kind} at position {} has number {number}",
            index + 1
        )))
    }
}

/// Check that a bit string and a line vector describe the same symbol.
fn check_encoding<const N: usize>(
    kind: SymbolKind,
    number: u32,
    binary: &str,
    lines: &[u8],
) -> CatalogResult<[u8; N]> {
    validate_lines(lines, N, &format!("{kind} {number} lines"))
        .map_err(|e| CatalogError::Data(e.to_string()))?;
    let width = N;
    if binary.len() != width || !binary.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CatalogError::Data(format!(
            "{kind} {number} binary {binary:?} is not {width} bits"
        )));
    }
    let agrees = binary
        .bytes()
        .rev()
        .zip(lines)
        .all(|(bit, &line)| (bit - b'0') == line);
    if !agrees {
        return Err(CatalogError::Data(format!(
            "{kind} {number} binary {binary} disagrees with lines {lines:?}"
        )));
    }
    let mut out = [0u8; N];
    out.copy_from_slice(lines);
    Ok(out)
}

fn build_trigram(index: usize, record: TrigramRecord) -> CatalogResult<Trigram> {
    expect_number(SymbolKind::Trigram, index, record.number)?;
    let lines = check_encoding::<TRIGRAM_LINES>(
        SymbolKind::Trigram,
        record.number,
        &record.binary,
        &record.lines,
    )?;
    Ok(Trigram {
        number: record.number,
        names: record.names,
        chinese_name: record.chinese_name,
        character: record.character,
        binary: record.binary,
        lines,
        attribute: record.attribute,
        images: record.images,
        chinese_image: record.chinese_image,
        family_relationship: record.family_relationship,
    })
}

fn build_hexagram(
    index: usize,
    record: HexagramRecord,
    trigrams: &[Trigram],
) -> CatalogResult<Hexagram> {
    expect_number(SymbolKind::Hexagram, index, record.number)?;
    let lines = check_encoding::<HEXAGRAM_LINES>(
        SymbolKind::Hexagram,
        record.number,
        &record.binary,
        &record.lines,
    )?;

    let resolve = |n: u32, pos: Position| {
        SymbolKind::Trigram
            .check(n)
            .map(|n| &trigrams[(n - 1) as usize])
            .map_err(|_| {
                CatalogError::Data(format!(
                    "hexagram {} has {pos} trigram {n}",
                    record.number
                ))
            })
    };
    let top = resolve(record.top_trigram, Position::Top)?;
    let bottom = resolve(record.bottom_trigram, Position::Bottom)?;

    let (high, low) = record.binary.split_at(TRIGRAM_LINES);
    if high != top.binary || low != bottom.binary {
        return Err(CatalogError::Data(format!(
            "hexagram {} binary {} does not stack trigrams {} over {}",
            record.number, record.binary, top.binary, bottom.binary
        )));
    }

    Ok(Hexagram {
        number: record.number,
        names: record.names,
        chinese_name: record.chinese_name,
        character: record.character,
        binary: record.binary,
        lines,
        top_trigram: record.top_trigram,
        bottom_trigram: record.bottom_trigram,
        changes: OnceLock::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn loads_all_symbols() {
        let c = catalog();
        assert_eq!(c.trigrams().len(), 8);
        assert_eq!(c.hexagrams().len(), 64);
    }

    #[test]
    fn trigram_lookup() {
        let c = catalog();
        assert_eq!(c.trigram(1).unwrap().number, 1);
        assert_eq!(c.trigram(5).unwrap().number, 5);
    }

    #[test]
    fn trigram_out_of_range() {
        let c = catalog();
        for n in [0, 9, 100] {
            let err = c.trigram(n).unwrap_err();
            assert!(matches!(
                err,
                CatalogError::OutOfRange {
                    kind: SymbolKind::Trigram,
                    ..
                }
            ));
        }
    }

    #[test]
    fn hexagram_lookup() {
        let c = catalog();
        assert_eq!(c.hexagram(1).unwrap().number, 1);
        assert_eq!(c.hexagram(39).unwrap().number, 39);
    }

    #[test]
    fn hexagram_out_of_range() {
        let c = catalog();
        for n in [0, 65] {
            let err = c.hexagram(n).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("hexagram number must be an integer between 1 and 64, got {n}")
            );
        }
    }

    #[test]
    fn receptive_trigram_fields() {
        let c = catalog();
        let t = c.trigram(2).unwrap();
        assert!(t.names.contains(&"Field".to_string()));
        assert!(t.names.contains(&"The Receptive".to_string()));
        assert_eq!(t.chinese_name, "坤 (kūn)");
        assert_eq!(t.character, "☷");
        assert_eq!(t.binary, "000");
        assert_eq!(t.lines, [0, 0, 0]);
        assert_eq!(t.attribute, "devoted, yielding");
        assert_eq!(t.images, vec!["earth".to_string()]);
        assert_eq!(t.chinese_image, "地 (dì)");
        assert_eq!(t.family_relationship, "mother");
    }

    #[test]
    fn creative_hexagram_fields() {
        let c = catalog();
        let h = c.hexagram(1).unwrap();
        assert!(h.names.contains(&"Force".to_string()));
        assert!(h.names.contains(&"The Creative".to_string()));
        assert_eq!(h.chinese_name, "乾 (qián)");
        assert_eq!(h.character, "䷀");
        assert_eq!(h.binary, "111111");
        assert_eq!(h.lines, [1; 6]);
        assert_eq!(c.top_trigram(h).unwrap().number, 1);
        assert_eq!(c.bottom_trigram(h).unwrap().number, 1);
    }

    #[test]
    fn sequences() {
        let c = catalog();
        let earlier = c.trigram_sequence("earlierHeaven").unwrap();
        assert_eq!(earlier.len(), 8);
        assert_eq!(earlier[0].number, 1);
        let numbers: Vec<u32> = earlier.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 6, 4, 5, 2, 3, 7, 8]);

        let later: Vec<u32> = c
            .trigram_sequence("laterHeaven")
            .unwrap()
            .iter()
            .map(|t| t.number)
            .collect();
        assert_eq!(later, vec![7, 2, 8, 1, 4, 5, 3, 6]);
    }

    #[test]
    fn unknown_sequence() {
        let c = catalog();
        let err = c.trigram_sequence("unrecognized").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert!(
            err.to_string()
                .contains("name must be a trigram sequence name: earlierHeaven, laterHeaven")
        );
    }

    #[test]
    fn hexagrams_of_trigram() {
        let c = catalog();
        let t = c.trigram(2).unwrap();
        assert_eq!(c.trigram_hexagrams(t, None).len(), 15);

        let top = c.trigram_hexagrams(t, Some(Position::Top));
        assert_eq!(top.len(), 8);
        assert!(top.iter().all(|h| h.top_trigram == 2));

        let bottom = c.trigram_hexagrams(t, Some(Position::Bottom));
        assert_eq!(bottom.len(), 8);
        assert!(bottom.iter().all(|h| h.bottom_trigram == 2));
    }

    #[test]
    fn lookup_by_lines() {
        let c = catalog();
        assert_eq!(c.hexagram_by_lines(&[1; 6]).unwrap().number, 1);
        assert_eq!(c.hexagram_by_lines(&[0; 6]).unwrap().number, 2);
        assert_eq!(
            c.hexagram_by_lines(&[0, 1, 0, 1, 0, 1]).unwrap().number,
            64
        );
        assert!(matches!(
            c.hexagram_by_lines(&[1, 1]).unwrap_err(),
            CatalogError::InvalidArgument(_)
        ));
    }

    #[test]
    fn every_line_pattern_is_a_hexagram() {
        let c = catalog();
        for bits in 0u8..64 {
            let h = c.hexagram_by_bits(bits).unwrap();
            assert_eq!(h.bits(), bits);
        }
        assert!(c.hexagram_by_bits(64).is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json("{\"trigrams\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn rejects_wrong_counts() {
        let err = Catalog::from_json(r#"{"trigrams": [], "hexagrams": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Data(_)));
    }

    #[test]
    fn rejects_inconsistent_binary() {
        let corrupted = REFERENCE_DATA.replacen("\"binary\": \"111\"", "\"binary\": \"110\"", 1);
        let err = Catalog::from_json(&corrupted).unwrap_err();
        assert!(matches!(err, CatalogError::Data(_)), "{err}");
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Catalog>();
    }
}
