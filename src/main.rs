//! dnatrans - DNA to Protein Translator
//!
//! Translates a DNA sequence with the standard genetic code and prints the
//! protein, a codon breakdown, start/stop codons, full amino acid names and
//! amino acid frequencies.
//!
//! ## Usage
//!
//! ```bash
//! dnatrans gene.fasta
//! dnatrans --sequence "ATG CAT TAA"
//! cat gene.txt | dnatrans -f json -o report.json
//! ```
//!
//! ## Exit Status
//!
//! - `0`: report written
//! - `1`: input or output error
//! - `2`: no translatable sequence in the input

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dnatrans::config::{OutputFormat, ReportConfig};
use dnatrans::input::{detect_kind, read_input, InputSource};
use dnatrans::pipeline::run;
use dnatrans::report::write_report;

/// Report format for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable report
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// When to color start/stop codons
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    /// Only when writing to a terminal
    Auto,
    Always,
    Never,
}

/// dnatrans - Translate DNA sequences to protein using the standard genetic code
///
/// Input is read from FILE (.txt or .fasta), from --sequence, or from stdin.
/// FASTA header lines are ignored, and any character other than A, T, G, C is dropped.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file (.txt, .fasta, .fa, ...). Use "-" for stdin.
    #[arg(conflicts_with = "sequence")]
    file: Option<PathBuf>,

    /// DNA sequence given directly on the command line
    #[arg(short = 's', long = "sequence")]
    sequence: Option<String>,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: FormatArg,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Color start (green) and stop (red) codons
    #[arg(long = "color", value_enum, default_value = "auto")]
    color: ColorArg,

    /// Omit the start/stop codon section
    #[arg(long = "no-highlight")]
    no_highlight: bool,

    /// Omit the amino acid full-name section
    #[arg(long = "no-names")]
    no_names: bool,

    /// Wrap width for sequence blocks
    #[arg(short = 'w', long = "width", default_value = "60")]
    width: usize,

    /// Suppress status messages
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn source(&self) -> InputSource {
        match (&self.sequence, &self.file) {
            (Some(text), _) => InputSource::Text(text.clone()),
            (None, Some(path)) if path.as_os_str() != "-" => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        }
    }

    fn writes_to_stdout(&self) -> bool {
        self.output == "-"
    }

    fn report_config(&self) -> ReportConfig {
        let color = match self.color {
            ColorArg::Always => true,
            ColorArg::Never => false,
            ColorArg::Auto => self.writes_to_stdout() && io::stdout().is_terminal(),
        };
        ReportConfig {
            format: self.format.into(),
            color,
            highlight: !self.no_highlight,
            names: !self.no_names,
            width: self.width,
        }
    }
}

/// Writes a status line to stderr unless quiet.
fn status(quiet: bool, message: impl AsRef<str>) {
    if !quiet {
        eprintln!("{}", message.as_ref());
    }
}

fn run_cli(args: &Args) -> Result<ExitCode> {
    if !(ReportConfig::MIN_WIDTH..=ReportConfig::MAX_WIDTH).contains(&args.width) {
        anyhow::bail!(
            "Width must be {}-{} (got {})",
            ReportConfig::MIN_WIDTH,
            ReportConfig::MAX_WIDTH,
            args.width
        );
    }

    let source = args.source();
    if source == InputSource::Stdin && io::stdin().is_terminal() {
        status(args.quiet, "Reading sequence from stdin (end with Ctrl-D)...");
    }

    let content = read_input(&source)?;
    status(args.quiet, format!("Input detected as {}", detect_kind(&content)));

    let analysis = match run(&content) {
        Ok(analysis) => analysis,
        Err(nothing) => {
            eprintln!("{}", nothing);
            return Ok(ExitCode::from(2));
        }
    };

    if analysis.was_trimmed() {
        status(
            args.quiet,
            format!(
                "Sequence trimmed from {} bp to {} bp to make it divisible by 3.",
                analysis.clean.len(),
                analysis.coding.len()
            ),
        );
    }
    status(
        args.quiet,
        format!(
            "DNA sequence loaded: {} bp, {} codons.",
            analysis.coding.len(),
            analysis.coding.codon_count()
        ),
    );

    let config = args.report_config();
    if args.writes_to_stdout() {
        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());
        write_report(&mut handle, &analysis, &config)?;
        handle.flush()?;
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Cannot create output file {}", args.output))?;
        let mut writer = BufWriter::new(file);
        write_report(&mut writer, &analysis, &config)?;
        writer.flush()?;
        status(args.quiet, format!("Wrote report to {}", args.output));
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    run_cli(&args)
}
