//! Data model for the translation pipeline.
//!
//! Each stage of the pipeline produces its own type so that the invariants
//! of a stage travel with its output:
//! - [`CleanSequence`]: only `A`, `T`, `G`, `C`
//! - [`CodingSequence`]: clean, and a whole number of codons
//! - [`ProteinSequence`] and [`CodonTrace`]: the translation, index-aligned
//! - [`FrequencyDistribution`]: amino acid counts over a protein

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Returns true for the four bases a clean sequence may contain.
#[inline]
pub fn is_base(byte: u8) -> bool {
    matches!(byte, b'A' | b'T' | b'G' | b'C')
}

/// Raised by the checked [`CleanSequence::new`] constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid base '{found}' at position {position} (expected A, T, G or C)")]
pub struct InvalidBase {
    pub found: char,
    /// Character index of `found` (0-based).
    pub position: usize,
}

/// An uppercase nucleotide sequence over `{A, T, G, C}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CleanSequence(String);

impl CleanSequence {
    /// Wraps already-clean data, rejecting any character outside the alphabet.
    ///
    /// Lowercase bases are rejected too; use [`crate::sanitize::sanitize`]
    /// to normalize arbitrary text.
    pub fn new(data: impl Into<String>) -> Result<Self, InvalidBase> {
        let data = data.into();
        let bad = data
            .chars()
            .enumerate()
            .find(|&(_, c)| !c.is_ascii() || !is_base(c as u8));
        if let Some((position, found)) = bad {
            return Err(InvalidBase { found, position });
        }
        Ok(Self(data))
    }

    pub(crate) fn from_filtered(data: String) -> Self {
        debug_assert!(data.bytes().all(is_base));
        Self(data)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CleanSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A clean sequence whose length is a multiple of 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingSequence(String);

impl CodingSequence {
    pub(crate) fn from_trimmed(data: String) -> Self {
        debug_assert!(data.len() % 3 == 0);
        Self(data)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of codons in the sequence.
    pub fn codon_count(&self) -> usize {
        self.0.len() / 3
    }

    /// Iterates over the codons in reading order, starting at offset 0.
    pub fn codons(&self) -> impl Iterator<Item = Codon> + '_ {
        self.0
            .as_bytes()
            .chunks_exact(3)
            .map(|c| Codon([c[0], c[1], c[2]]))
    }
}

impl fmt::Display for CodingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Three nucleotides read as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    pub const fn new(bases: [u8; 3]) -> Self {
        Self(bases)
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One-letter amino acid symbols, one per codon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProteinSequence(String);

impl ProteinSequence {
    pub(crate) fn from_symbols(data: String) -> Self {
        Self(data)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of residues (equal to the number of translated codons).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A codon paired with the amino acid it translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracedCodon {
    pub codon: Codon,
    pub amino_acid: char,
}

/// Per-codon breakdown of a translation, index-aligned with the protein.
pub type CodonTrace = Vec<TracedCodon>;

/// Occurrence count of each amino acid symbol in a protein.
///
/// Keys are kept sorted so that output is stable; the order carries no
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDistribution {
    counts: BTreeMap<char, usize>,
}

impl FrequencyDistribution {
    pub(crate) fn record(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Count for `symbol`, 0 when it never occurs.
    pub fn get(&self, symbol: char) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&s, &n)| (s, n))
    }

    /// Entries sorted by descending count, ties broken by symbol.
    pub fn by_count(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Largest single count, 0 for an empty distribution.
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl Serialize for FrequencyDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.counts.serialize(serializer)
    }
}
