// alignment.rs - Alignment and row data structures

use thiserror::Error;

/// Errors raised by the alignment data model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("alignment contains no rows")]
    Empty,

    #[error("alignment rows have unequal lengths: row '{id}' has {found} columns, expected {expected}")]
    LengthMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
}

/// A single aligned sequence: identifier, optional description, residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl Row {
    pub fn new(id: impl Into<String>, desc: Option<String>, seq: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            desc,
            seq,
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// An ordered set of equal-length rows. Row order is preserved everywhere;
/// the uniform-length invariant is checked by `ncols`, not at construction,
/// so loaders can build a record first and report the offending row after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub rows: Vec<Row>,
}

impl Alignment {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows (N).
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (L), after verifying every row has the same length.
    pub fn ncols(&self) -> Result<usize, AlignmentError> {
        let first = self.rows.first().ok_or(AlignmentError::Empty)?;
        let expected = first.len();
        for row in &self.rows[1..] {
            if row.len() != expected {
                return Err(AlignmentError::LengthMismatch {
                    id: row.id.clone(),
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(expected)
    }
}
