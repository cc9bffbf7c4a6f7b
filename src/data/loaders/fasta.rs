// fasta.rs - FASTA alignment loader

use std::io;

use bio::io::fasta;

use crate::data::loaders::LoadError;
use crate::data::{Alignment, Row};

/// Read a FASTA stream as one alignment record. Every sequence in the stream
/// belongs to the same alignment; uniform row length is checked later by the
/// column extractor, not here.
pub fn read_alignments<R: io::Read>(reader: R) -> Result<Vec<Alignment>, LoadError> {
    let reader = fasta::Reader::new(reader);
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| LoadError::Parse {
            format: "FASTA",
            message: e.to_string(),
        })?;

        rows.push(Row::new(
            record.id(),
            record.desc().map(|d| d.to_string()),
            record.seq().to_vec(),
        ));
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(vec![Alignment::new(rows)])
}
