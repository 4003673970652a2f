//! Codon to amino acid translation.

use crate::genetic_code::STANDARD;
use crate::model::{CodingSequence, CodonTrace, ProteinSequence, TracedCodon};

/// The protein and its per-codon breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub protein: ProteinSequence,
    pub trace: CodonTrace,
}

impl Translation {
    /// Concatenation of all traced codons, which equals the input sequence.
    pub fn coding_sequence(&self) -> String {
        self.trace.iter().map(|t| t.codon.to_string()).collect()
    }
}

/// Translates `seq` with the standard genetic code.
///
/// Codons the table does not cover become [`crate::genetic_code::UNKNOWN`];
/// translation never stops early, stop codons included.
///
/// # Examples
///
/// ```
/// use dnatrans::{frame::trim, sanitize::sanitize, translate::translate};
///
/// let coding = trim(&sanitize("ATGCATTAA"));
/// let translation = translate(&coding);
/// assert_eq!(translation.protein.as_str(), "MH*");
/// assert_eq!(translation.trace.len(), 3);
/// ```
pub fn translate(seq: &CodingSequence) -> Translation {
    let mut protein = String::with_capacity(seq.codon_count());
    let mut trace = Vec::with_capacity(seq.codon_count());

    for codon in seq.codons() {
        let amino_acid = STANDARD.translate_codon(codon);
        protein.push(amino_acid);
        trace.push(TracedCodon { codon, amino_acid });
    }

    Translation {
        protein: ProteinSequence::from_symbols(protein),
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::trim;
    use crate::genetic_code::UNKNOWN;
    use crate::model::CleanSequence;

    fn coding(s: &str) -> CodingSequence {
        trim(&CleanSequence::new(s).unwrap())
    }

    #[test]
    fn test_sequence_translation() {
        let t = translate(&coding("ATGTTTTAG"));
        assert_eq!(t.protein.as_str(), "MF*");

        let pairs: Vec<(String, char)> = t
            .trace
            .iter()
            .map(|tc| (tc.codon.to_string(), tc.amino_acid))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ATG".to_string(), 'M'),
                ("TTT".to_string(), 'F'),
                ("TAG".to_string(), '*'),
            ]
        );
    }

    #[test]
    fn test_translation_continues_past_stop() {
        let t = translate(&coding("TAAATGTGAGGG"));
        assert_eq!(t.protein.as_str(), "*M*G");
    }

    #[test]
    fn test_uncovered_codon_translates_to_unknown() {
        let t = translate(&CodingSequence::from_trimmed("ATGANG".to_string()));
        assert_eq!(t.protein.as_str(), "M-");
        assert_eq!(t.trace.len(), 2);
        assert_eq!(t.trace[1].codon.to_string(), "ANG");
        assert_eq!(t.trace[1].amino_acid, UNKNOWN);
        assert_eq!(t.coding_sequence(), "ATGANG");
    }

    #[test]
    fn test_empty_sequence() {
        let t = translate(&CodingSequence::default());
        assert!(t.protein.is_empty());
        assert!(t.trace.is_empty());
    }

    #[test]
    fn test_trace_reconstructs_coding_sequence() {
        let seq = coding("GCTGATCGATCGGGCTAA");
        let t = translate(&seq);
        assert_eq!(t.coding_sequence(), seq.as_str());
        assert_eq!(t.protein.len(), seq.len() / 3);
    }
}
