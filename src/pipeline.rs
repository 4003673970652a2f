//! End-to-end pipeline: sanitize, trim, translate, analyze.
//!
//! [`run`] chains the stages and stops early with a [`NothingToTranslate`]
//! status when there is no usable input. Those statuses are ordinary
//! outcomes for the caller to report, not failures of the pipeline.

use thiserror::Error;

use crate::analysis::{annotate_names, classify, frequency, CodonClass};
use crate::frame::{dropped_bases, trim};
use crate::model::{CleanSequence, CodingSequence, FrequencyDistribution};
use crate::sanitize::sanitize;
use crate::translate::{translate, Translation};

/// The two "nothing to process" outcomes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingToTranslate {
    #[error("The sequence contains invalid characters. Only A, T, G, and C are allowed.")]
    EmptyAfterSanitize,

    #[error("Only {clean_len} valid base(s) found; at least 3 are needed to form a codon.")]
    NoTranslatableCodons { clean_len: usize },
}

/// Everything derived from one input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub clean: CleanSequence,
    pub coding: CodingSequence,
    pub translation: Translation,
    /// One tag per codon, aligned with `translation.trace`
    pub classes: Vec<CodonClass>,
    pub frequency: FrequencyDistribution,
}

impl Analysis {
    /// Runs translation and analysis on an already trimmed sequence.
    pub fn from_coding(clean: CleanSequence, coding: CodingSequence) -> Self {
        let translation = translate(&coding);
        let classes = classify(&coding);
        let frequency = frequency(&translation.protein);
        Self {
            clean,
            coding,
            translation,
            classes,
            frequency,
        }
    }

    /// Bases dropped to reach a whole number of codons.
    pub fn trimmed_bases(&self) -> usize {
        dropped_bases(&self.clean, &self.coding)
    }

    pub fn was_trimmed(&self) -> bool {
        self.trimmed_bases() > 0
    }

    /// Full name of each residue of the protein.
    pub fn names(&self) -> Vec<(char, &'static str)> {
        annotate_names(&self.translation.protein)
    }
}

/// Processes raw input text.
///
/// # Examples
///
/// ```
/// use dnatrans::pipeline::{run, NothingToTranslate};
///
/// let analysis = run(">header\nATGC").unwrap();
/// assert_eq!(analysis.coding.as_str(), "ATG");
/// assert_eq!(analysis.trimmed_bases(), 1);
///
/// assert_eq!(run("XYZ123"), Err(NothingToTranslate::EmptyAfterSanitize));
/// ```
pub fn run(raw: &str) -> Result<Analysis, NothingToTranslate> {
    let clean = sanitize(raw);
    if clean.is_empty() {
        return Err(NothingToTranslate::EmptyAfterSanitize);
    }

    let coding = trim(&clean);
    if coding.is_empty() {
        return Err(NothingToTranslate::NoTranslatableCodons {
            clean_len: clean.len(),
        });
    }

    Ok(Analysis::from_coding(clean, coding))
}
