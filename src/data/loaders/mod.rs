// mod.rs - Alignment record loaders

pub mod fasta;
pub mod phylip;

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::data::Alignment;

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Fasta,
    Phylip,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" => Ok(InputFormat::Fasta),
            "phylip" | "phy" => Ok(InputFormat::Phylip),
            _ => Err(format!("Invalid input format: {}. Use: fasta, phylip", s)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Fasta => write!(f, "fasta"),
            InputFormat::Phylip => write!(f, "phylip"),
        }
    }
}

/// Errors raised while reading alignment records.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("empty input: no alignment records found")]
    Empty,

    #[error("malformed {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

/// Read every alignment record from a stream in the given format.
///
/// A multi-FASTA stream is a single record; a PHYLIP stream may carry several
/// concatenated records, each with its own row count.
pub fn read_alignments<R: io::Read>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<Alignment>, LoadError> {
    match format {
        InputFormat::Fasta => fasta::read_alignments(reader),
        InputFormat::Phylip => phylip::read_alignments(reader),
    }
}

/// Read every alignment record from a file.
pub fn load_file(path: &Path, format: InputFormat) -> Result<Vec<Alignment>, LoadError> {
    let file = File::open(path)?;
    read_alignments(file, format)
}
