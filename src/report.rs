//! Report rendering.
//!
//! Turns an [`Analysis`] into either a sectioned text report or a flat JSON
//! document. Sections of the text report, in order:
//! - coding sequence and its length
//! - translated protein
//! - codon breakdown (`ATG → M`)
//! - start/stop highlight (optional)
//! - amino acid full names (optional)
//! - amino acid frequency

use std::io::{self, Write};

use crossterm::style::Stylize;
use serde::Serialize;

use crate::analysis::CodonClass;
use crate::config::{OutputFormat, ReportConfig};
use crate::genetic_code::amino_acid_name;
use crate::model::{Codon, FrequencyDistribution};
use crate::pipeline::Analysis;

/// Shown when translation produced no residue.
pub const NO_PROTEIN_WARNING: &str =
    "No valid protein sequence generated. Please check the DNA sequence.";

/// Width of the left column in the full-name listing.
const NAME_COLUMN_WIDTH: usize = 24;

/// One codon of the JSON report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodonDto {
    pub codon: Codon,
    pub amino_acid: char,
    pub class: CodonClass,
    pub name: &'static str,
}

/// Flat, JSON-friendly view of an [`Analysis`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub clean_length: usize,
    pub coding_length: usize,
    pub trimmed_bases: usize,
    pub coding_sequence: String,
    pub protein: String,
    pub codons: Vec<CodonDto>,
    pub frequency: FrequencyDistribution,
}

impl From<&Analysis> for ReportDto {
    fn from(analysis: &Analysis) -> Self {
        let codons = analysis
            .translation
            .trace
            .iter()
            .zip(&analysis.classes)
            .map(|(traced, &class)| CodonDto {
                codon: traced.codon,
                amino_acid: traced.amino_acid,
                class,
                name: amino_acid_name(traced.amino_acid),
            })
            .collect();

        ReportDto {
            clean_length: analysis.clean.len(),
            coding_length: analysis.coding.len(),
            trimmed_bases: analysis.trimmed_bases(),
            coding_sequence: analysis.coding.as_str().to_string(),
            protein: analysis.translation.protein.as_str().to_string(),
            codons,
            frequency: analysis.frequency.clone(),
        }
    }
}

/// Writes the report in the configured format.
pub fn write_report<W: Write>(
    writer: &mut W,
    analysis: &Analysis,
    config: &ReportConfig,
) -> io::Result<()> {
    match config.format {
        OutputFormat::Text => write_text(writer, analysis, config),
        OutputFormat::Json => write_json(writer, analysis),
    }
}

/// Writes the JSON report followed by a newline.
pub fn write_json<W: Write>(writer: &mut W, analysis: &Analysis) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &ReportDto::from(analysis))?;
    writeln!(writer)
}

/// Writes the text report.
pub fn write_text<W: Write>(
    writer: &mut W,
    analysis: &Analysis,
    config: &ReportConfig,
) -> io::Result<()> {
    let width = config.effective_width();

    section(writer, "Coding Sequence")?;
    writeln!(writer, "Final sequence length: {} bp", analysis.coding.len())?;
    write_wrapped(writer, analysis.coding.as_str(), width)?;

    let protein = &analysis.translation.protein;
    if protein.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{}", NO_PROTEIN_WARNING)?;
        return Ok(());
    }

    section(writer, "Translated Protein Sequence")?;
    write_wrapped(writer, protein.as_str(), width)?;

    section(writer, "Codon Breakdown")?;
    for traced in &analysis.translation.trace {
        writeln!(writer, "{} → {}", traced.codon, traced.amino_acid)?;
    }

    if config.highlight {
        section(writer, "Start and Stop Codons")?;
        write_highlighted(writer, analysis, width, config.color)?;
    }

    if config.names {
        section(writer, "Amino Acid Full Names")?;
        write_names(writer, analysis)?;
    }

    section(writer, "Amino Acid Frequency")?;
    write_frequency(writer, &analysis.frequency, width)?;

    Ok(())
}

fn section<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", "=".repeat(title.len()))
}

fn write_wrapped<W: Write>(writer: &mut W, text: &str, width: usize) -> io::Result<()> {
    for line in textwrap::wrap(text, width) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Codons separated by spaces, as many per line as fit in `width`.
fn write_highlighted<W: Write>(
    writer: &mut W,
    analysis: &Analysis,
    width: usize,
    color: bool,
) -> io::Result<()> {
    // Bracketed codons need 5 columns plus a separator
    let per_line = (width.saturating_add(1) / 6).max(1);
    let cells: Vec<String> = analysis
        .coding
        .codons()
        .zip(&analysis.classes)
        .map(|(codon, &class)| highlight_codon(codon, class, color))
        .collect();

    for line in cells.chunks(per_line) {
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Start codons green and stop codons red, or bracketed without color.
fn highlight_codon(codon: Codon, class: CodonClass, color: bool) -> String {
    let text = codon.to_string();
    match (class, color) {
        (CodonClass::Start, true) => text.as_str().green().to_string(),
        (CodonClass::Stop, true) => text.as_str().red().to_string(),
        (CodonClass::Start, false) => format!("[{}]", text),
        (CodonClass::Stop, false) => format!("{{{}}}", text),
        (CodonClass::Plain, _) => text,
    }
}

/// Two-column `M → Methionine` listing, one entry per residue.
fn write_names<W: Write>(writer: &mut W, analysis: &Analysis) -> io::Result<()> {
    let entries: Vec<String> = analysis
        .names()
        .into_iter()
        .map(|(symbol, name)| format!("{} → {}", symbol, name))
        .collect();

    for pair in entries.chunks(2) {
        match pair {
            [left, right] => writeln!(writer, "{:<w$}{}", left, right, w = NAME_COLUMN_WIDTH)?,
            [left] => writeln!(writer, "{}", left)?,
            _ => {}
        }
    }
    Ok(())
}

/// One row per symbol, most frequent first, with a bar scaled to `width`.
fn write_frequency<W: Write>(
    writer: &mut W,
    frequency: &FrequencyDistribution,
    width: usize,
) -> io::Result<()> {
    let max = frequency.max_count().max(1);
    let bar_width = width.saturating_sub(24).max(1);

    for (symbol, count) in frequency.by_count() {
        let bar = (count.saturating_mul(bar_width) / max).clamp(1, bar_width);
        writeln!(
            writer,
            "{} {:<14} {:>5} {}",
            symbol,
            amino_acid_name(symbol),
            count,
            "#".repeat(bar)
        )?;
    }
    Ok(())
}
