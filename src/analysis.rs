//! Derived facts about a translation.
//!
//! Two independent passes:
//! - [`classify`] tags each codon as start, stop or plain
//! - [`frequency`] counts amino acid symbols in the protein
//!
//! plus [`annotate_names`] for the full-name listing.

use std::fmt;

use serde::Serialize;

use crate::genetic_code::amino_acid_name;
use crate::model::{Codon, CodingSequence, FrequencyDistribution, ProteinSequence};

/// Role of a codon for start/stop highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodonClass {
    Start,
    Stop,
    Plain,
}

impl CodonClass {
    /// Classifies one codon: `ATG` starts, `TAA`/`TAG`/`TGA` stop.
    pub fn of(codon: Codon) -> Self {
        match codon.as_bytes() {
            b"ATG" => CodonClass::Start,
            b"TAA" | b"TAG" | b"TGA" => CodonClass::Stop,
            _ => CodonClass::Plain,
        }
    }
}

impl fmt::Display for CodonClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodonClass::Start => write!(f, "start"),
            CodonClass::Stop => write!(f, "stop"),
            CodonClass::Plain => write!(f, "plain"),
        }
    }
}

/// Tags every codon of `seq`, index-aligned with the codon trace.
///
/// The whole sequence is tagged; a stop codon does not end the scan.
pub fn classify(seq: &CodingSequence) -> Vec<CodonClass> {
    seq.codons().map(CodonClass::of).collect()
}

/// Counts each amino acid symbol in `protein`, the unknown sentinel
/// included.
pub fn frequency(protein: &ProteinSequence) -> FrequencyDistribution {
    let mut dist = FrequencyDistribution::default();
    for symbol in protein.symbols() {
        dist.record(symbol);
    }
    dist
}

/// Full name for each residue of `protein`, in order.
pub fn annotate_names(protein: &ProteinSequence) -> Vec<(char, &'static str)> {
    protein
        .symbols()
        .map(|symbol| (symbol, amino_acid_name(symbol)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::trim;
    use crate::sanitize::sanitize;
    use crate::translate::translate;

    #[test]
    fn test_classify_start_and_stop() {
        let coding = trim(&sanitize("ATGCATTAA"));
        assert_eq!(
            classify(&coding),
            vec![CodonClass::Start, CodonClass::Plain, CodonClass::Stop]
        );
    }

    #[test]
    fn test_classify_scans_past_first_stop() {
        let coding = trim(&sanitize("TGAATGTAGCCCATG"));
        assert_eq!(
            classify(&coding),
            vec![
                CodonClass::Stop,
                CodonClass::Start,
                CodonClass::Stop,
                CodonClass::Plain,
                CodonClass::Start,
            ]
        );
    }

    #[test]
    fn test_classify_empty() {
        assert!(classify(&CodingSequence::default()).is_empty());
    }

    #[test]
    fn test_frequency_counts() {
        let protein = translate(&trim(&sanitize("ATGCATATG"))).protein;
        assert_eq!(protein.as_str(), "MHM");

        let freq = frequency(&protein);
        assert_eq!(freq.get('M'), 2);
        assert_eq!(freq.get('H'), 1);
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.total(), protein.len());
    }

    #[test]
    fn test_frequency_counts_unknown_sentinel() {
        let freq = frequency(&ProteinSequence::from_symbols("M-M".to_string()));
        assert_eq!(freq.iter().collect::<Vec<_>>(), vec![('-', 1), ('M', 2)]);
        assert_eq!(freq.total(), 3);
    }

    #[test]
    fn test_frequency_of_empty_protein() {
        assert!(frequency(&ProteinSequence::default()).is_empty());
    }

    #[test]
    fn test_annotate_names() {
        let protein = translate(&trim(&sanitize("ATGTGGTAA"))).protein;
        assert_eq!(
            annotate_names(&protein),
            vec![('M', "Methionine"), ('W', "Tryptophan"), ('*', "Stop")]
        );
    }

    #[test]
    fn test_codon_class_display() {
        assert_eq!(CodonClass::Start.to_string(), "start");
        assert_eq!(CodonClass::Plain.to_string(), "plain");
    }
}
