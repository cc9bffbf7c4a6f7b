// columns.rs - Alignment column extraction

use crate::data::{Alignment, AlignmentError};

/// Transpose an alignment into its columns: L vectors of N characters each,
/// index-aligned to row order. Fails on ragged rows.
pub fn columns(aln: &Alignment) -> Result<Vec<Vec<u8>>, AlignmentError> {
    let ncols = aln.ncols()?;
    let mut cols = vec![Vec::with_capacity(aln.nrows()); ncols];

    for row in &aln.rows {
        for (col, &c) in cols.iter_mut().zip(row.seq.iter()) {
            col.push(c);
        }
    }

    Ok(cols)
}
