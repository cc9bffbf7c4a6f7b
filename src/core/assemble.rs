// assemble.rs - Output alignment assembly

use crate::data::{Alignment, Row};

/// Build the output alignment from the selection mask: same rows, same ids
/// and descriptions, same order, keeping only the mask-true columns.
pub fn apply_mask(aln: &Alignment, mask: &[bool]) -> Alignment {
    let rows = aln
        .rows
        .iter()
        .map(|row| {
            let seq = row
                .seq
                .iter()
                .zip(mask.iter())
                .filter(|(_, &keep)| keep)
                .map(|(&c, _)| c)
                .collect();
            Row::new(row.id.clone(), row.desc.clone(), seq)
        })
        .collect();

    Alignment::new(rows)
}
