//! The standard genetic code and amino acid names.
//!
//! This module provides:
//! - The NCBI standard code (table 1) as a static 64-entry codon table
//! - Codon to amino acid lookup
//! - Full amino acid names for one-letter symbols
//!
//! Both tables are plain static data; nothing here is built at runtime.

use crate::model::Codon;

/// Symbol emitted for the three stop codons.
pub const STOP: char = '*';

/// Symbol emitted for a codon the table does not cover.
pub const UNKNOWN: char = '-';

/// Name returned for symbols missing from the name table.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A genetic code table for translating codons to amino acids.
#[derive(Debug)]
pub struct CodonTable {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// Amino acids in NCBI codon order (TTT, TTC, TTA, TTG, TCT, ...)
    ncbieaa: &'static [u8; 64],
}

/// NCBI genetic code 1.
pub static STANDARD: CodonTable = CodonTable {
    id: 1,
    name: "Standard",
    ncbieaa: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
};

impl CodonTable {
    /// Translates a single codon, or `None` if the codon is not covered.
    ///
    /// Only uppercase `A`, `C`, `G`, `T` are covered.
    pub fn get(&self, codon: Codon) -> Option<char> {
        let mut idx = 0usize;
        for &b in codon.as_bytes() {
            // NCBI order: T, C, A, G
            let rank = match b {
                b'T' => 0,
                b'C' => 1,
                b'A' => 2,
                b'G' => 3,
                _ => return None,
            };
            idx = idx * 4 + rank;
        }
        Some(self.ncbieaa[idx] as char)
    }

    /// Translates a single codon, mapping uncovered codons to [`UNKNOWN`].
    pub fn translate_codon(&self, codon: Codon) -> char {
        self.get(codon).unwrap_or(UNKNOWN)
    }
}

/// Full names of the 20 standard amino acids plus the stop marker.
pub static AMINO_ACID_NAMES: [(char, &str); 21] = [
    ('A', "Alanine"),
    ('C', "Cysteine"),
    ('D', "Aspartic acid"),
    ('E', "Glutamic acid"),
    ('F', "Phenylalanine"),
    ('G', "Glycine"),
    ('H', "Histidine"),
    ('I', "Isoleucine"),
    ('K', "Lysine"),
    ('L', "Leucine"),
    ('M', "Methionine"),
    ('N', "Asparagine"),
    ('P', "Proline"),
    ('Q', "Glutamine"),
    ('R', "Arginine"),
    ('S', "Serine"),
    ('T', "Threonine"),
    ('V', "Valine"),
    ('W', "Tryptophan"),
    ('Y', "Tyrosine"),
    (STOP, "Stop"),
];

/// Full name for a one-letter symbol, [`UNKNOWN_NAME`] when not listed.
pub fn amino_acid_name(symbol: char) -> &'static str {
    AMINO_ACID_NAMES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_NAME)
}
