//! Reading frame trimming.

use crate::model::{CleanSequence, CodingSequence};

/// Truncates `seq` to a whole number of codons by dropping its last
/// `len % 3` bases.
pub fn trim(seq: &CleanSequence) -> CodingSequence {
    let keep = seq.len() - seq.len() % 3;
    CodingSequence::from_trimmed(seq.as_str()[..keep].to_string())
}

/// Number of bases [`trim`] dropped (0, 1 or 2).
pub fn dropped_bases(clean: &CleanSequence, coding: &CodingSequence) -> usize {
    clean.len().saturating_sub(coding.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(s: &str) -> CleanSequence {
        CleanSequence::new(s).unwrap()
    }

    #[test]
    fn test_trim_keeps_whole_codons() {
        let seq = clean("ATGCATTAA");
        let coding = trim(&seq);
        assert_eq!(coding.as_str(), "ATGCATTAA");
        assert_eq!(dropped_bases(&seq, &coding), 0);
    }

    #[test]
    fn test_trim_drops_leftover_bases() {
        let seq = clean("ATGC");
        let coding = trim(&seq);
        assert_eq!(coding.as_str(), "ATG");
        assert_eq!(dropped_bases(&seq, &coding), 1);

        let seq = clean("ATGCA");
        assert_eq!(trim(&seq).as_str(), "ATG");
        assert_eq!(dropped_bases(&seq, &trim(&seq)), 2);
    }

    #[test]
    fn test_trim_short_sequences() {
        assert!(trim(&clean("AT")).is_empty());
        assert!(trim(&clean("A")).is_empty());
        assert!(trim(&clean("")).is_empty());
    }
}
