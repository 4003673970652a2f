//! Reading sequence text from the command line, a file or stdin.
//!
//! Accepted file extensions:
//! - plain text (.txt, .seq)
//! - FASTA (.fasta, .fa, .fas, .fna, .ffn)
//!
//! The pipeline itself never touches the filesystem; this module only
//! produces the text it consumes.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sanitize::is_fasta;

/// Where the sequence text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Sequence given directly on the command line
    Text(String),
    /// Sequence file
    File(PathBuf),
    /// Standard input
    Stdin,
}

/// Shape of the input text, for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Fasta,
    Plain,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Fasta => write!(f, "FASTA"),
            InputKind::Plain => write!(f, "plain text"),
        }
    }
}

/// Errors that can occur while reading input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("{path} is not valid UTF-8 text")]
    NotUtf8 { path: String },

    #[error("Unsupported file extension '.{ext}'.\n\
             Hint: use a .txt or .fasta file, or pass the sequence directly:\n  \
             dnatrans --sequence ATGCATTAA\n  \
             cat file | dnatrans -")]
    UnsupportedExtension { ext: String },

    #[error("Empty input")]
    EmptyInput,
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;

/// Detects the input kind from a file extension.
///
/// Files without an extension are treated as plain text.
pub fn detect_kind_from_extension<P: AsRef<Path>>(path: P) -> InputResult<InputKind> {
    let Some(ext) = path.as_ref().extension().and_then(OsStr::to_str) else {
        return Ok(InputKind::Plain);
    };
    match ext.to_lowercase().as_str() {
        "fa" | "fas" | "fasta" | "fna" | "ffn" => Ok(InputKind::Fasta),
        "txt" | "seq" => Ok(InputKind::Plain),
        _ => Err(InputError::UnsupportedExtension {
            ext: ext.to_string(),
        }),
    }
}

/// Detects the input kind from content: FASTA when the first line is a
/// header.
pub fn detect_kind(content: &str) -> InputKind {
    if is_fasta(content) {
        InputKind::Fasta
    } else {
        InputKind::Plain
    }
}

/// Reads the whole input as text.
pub fn read_input(source: &InputSource) -> InputResult<String> {
    let content = match source {
        InputSource::Text(text) => text.clone(),
        InputSource::File(path) => read_file(path)?,
        InputSource::Stdin => {
            let mut content = String::new();
            io::stdin().lock().read_to_string(&mut content)?;
            content
        }
    };

    if content.is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(content)
}

/// Rejects files whose extension is not a sequence or text extension.
pub fn check_extension<P: AsRef<Path>>(path: P) -> InputResult<()> {
    detect_kind_from_extension(path).map(|_| ())
}

fn read_file(path: &Path) -> InputResult<String> {
    check_extension(path)?;

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_detect_from_extension() {
        assert_eq!(detect_kind_from_extension("gene.fasta").unwrap(), InputKind::Fasta);
        assert_eq!(detect_kind_from_extension("gene.FA").unwrap(), InputKind::Fasta);
        assert_eq!(detect_kind_from_extension("gene.fna").unwrap(), InputKind::Fasta);
        assert_eq!(detect_kind_from_extension("gene.txt").unwrap(), InputKind::Plain);
        assert_eq!(detect_kind_from_extension("gene").unwrap(), InputKind::Plain);
        assert!(matches!(
            detect_kind_from_extension("gene.pdf"),
            Err(InputError::UnsupportedExtension { ext }) if ext == "pdf"
        ));
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension("gene.fasta").is_ok());
        assert!(check_extension("notes.txt").is_ok());
        assert!(matches!(
            check_extension("gene.docx"),
            Err(InputError::UnsupportedExtension { .. })
        ));

        let file = temp_file(".csv", b"ATG\n");
        let result = read_input(&InputSource::File(file.path().to_path_buf()));
        assert!(matches!(result, Err(InputError::UnsupportedExtension { ext }) if ext == "csv"));
    }

    #[test]
    fn test_detect_from_content() {
        assert_eq!(detect_kind(">seq1\nACGT\n"), InputKind::Fasta);
        assert_eq!(detect_kind("ACGT\n"), InputKind::Plain);
    }

    #[test]
    fn test_read_text_source() {
        let source = InputSource::Text("atg cat".to_string());
        assert_eq!(read_input(&source).unwrap(), "atg cat");
        assert!(matches!(
            read_input(&InputSource::Text(String::new())),
            Err(InputError::EmptyInput)
        ));
    }

    #[test]
    fn test_read_fasta_file() {
        let file = temp_file(".fasta", b">seq1\nATGC\n");
        let content = read_input(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(content, ">seq1\nATGC\n");
    }

    #[test]
    fn test_read_empty_file() {
        let file = temp_file(".txt", b"");
        let result = read_input(&InputSource::File(file.path().to_path_buf()));
        assert!(matches!(result, Err(InputError::EmptyInput)));
    }

    #[test]
    fn test_read_non_utf8_file() {
        let file = temp_file(".txt", &[b'A', 0xff, 0xfe, b'T']);
        let result = read_input(&InputSource::File(file.path().to_path_buf()));
        assert!(matches!(result, Err(InputError::NotUtf8 { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_input(&InputSource::File(PathBuf::from("no/such/file.fasta")));
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
