//! Input sanitization.
//!
//! Turns arbitrary pasted or uploaded text into a [`CleanSequence`]:
//! FASTA header lines are dropped, letters are uppercased and every
//! character outside `A`, `T`, `G`, `C` is discarded.
//!
//! ## FASTA Input
//!
//! ```text
//! >sequence_identifier optional description
//! ATGCATTAA...
//! ```
//!
//! Header handling only kicks in when the very first line starts with `>`.
//! In that case every `>` line is dropped, so multi-record input yields the
//! concatenation of all records.

use crate::model::{is_base, CleanSequence};

/// FASTA header marker.
pub const FASTA_MARKER: char = '>';

/// Returns true when `raw` starts with a FASTA header line.
pub fn is_fasta(raw: &str) -> bool {
    raw.starts_with(FASTA_MARKER)
}

/// Returns the sequence text of `raw`, without FASTA header lines.
pub fn strip_fasta_headers(raw: &str) -> String {
    if !is_fasta(raw) {
        return raw.to_string();
    }
    raw.lines()
        .filter(|line| !line.starts_with(FASTA_MARKER))
        .collect()
}

/// Normalizes raw text into a clean nucleotide sequence.
///
/// Never fails: input with no valid base gives an empty sequence.
///
/// # Examples
///
/// ```
/// use dnatrans::sanitize::sanitize;
///
/// assert_eq!(sanitize("atg cat TAA").as_str(), "ATGCATTAA");
/// assert_eq!(sanitize(">seq1\nATGC\n").as_str(), "ATGC");
/// assert!(sanitize("XYZ123").is_empty());
/// ```
pub fn sanitize(raw: &str) -> CleanSequence {
    let body = strip_fasta_headers(raw);
    let data: String = body
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| c.is_ascii() && is_base(c as u8))
        .collect();
    CleanSequence::from_filtered(data)
}
