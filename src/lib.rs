//! # dnatrans - DNA to Protein Translator
//!
//! Translates a nucleotide sequence into protein with the standard genetic
//! code and derives the facts a report needs: per-codon breakdown,
//! start/stop annotation, amino acid frequencies and full names.
//!
//! ## Architecture
//!
//! A strictly linear pipeline, one module per stage:
//! - `sanitize`: raw text (plain or FASTA) to a clean `A/T/G/C` sequence
//! - `frame`: trimming to a whole number of codons
//! - `translate`: codon lookup in the static `genetic_code` table
//! - `analysis`: start/stop tagging, frequencies, full names
//! - `pipeline`: the four stages chained, with the "nothing to translate"
//!   statuses
//!
//! Around the core:
//! - `model`: the data types each stage produces
//! - `input`: reading text from the command line, a file or stdin
//! - `config` and `report`: text and JSON rendering for the CLI
//!
//! ```
//! use dnatrans::pipeline::run;
//!
//! let analysis = run("atg cat TAA").unwrap();
//! assert_eq!(analysis.translation.protein.as_str(), "MH*");
//! ```

pub mod analysis;
pub mod config;
pub mod frame;
pub mod genetic_code;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod translate;
