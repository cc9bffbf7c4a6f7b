// report.rs - Verbose selection report

use std::io::{self, Write};

use crate::core::classify::Criterion;

/// Write the per-record selection block to the diagnostic stream: matched
/// count, criterion label (with a `non-` prefix under negation), the cutoff
/// when one was consulted, and the selected column indices as an ascending,
/// zero-based, comma-separated list.
pub fn write_report<W: Write>(
    out: &mut W,
    mask: &[bool],
    criterion: Criterion,
    negate: bool,
    cutoff: f64,
    frequency: f64,
) -> io::Result<()> {
    let count = mask.iter().filter(|&&b| b).count();
    let prefix = if negate { "non-" } else { "" };

    writeln!(
        out,
        "# {} matched {} {}{} sites.",
        env!("CARGO_PKG_NAME"),
        count,
        prefix,
        criterion.label()
    )?;

    if criterion.uses_cutoff() && frequency > 0.0 {
        writeln!(
            out,
            "# A relative frequency cutoff of {:.4} gaps or variants was allowed.",
            cutoff
        )?;
    }

    writeln!(out, "# Matching indices (zero-based):")?;
    let indices: Vec<String> = mask
        .iter()
        .enumerate()
        .filter(|(_, &selected)| selected)
        .map(|(i, _)| i.to_string())
        .collect();
    writeln!(out, "{}", indices.join(","))?;

    Ok(())
}
