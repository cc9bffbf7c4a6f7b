// classify.rs - Per-column site classification

use crate::core::columns::columns;
use crate::data::{Alignment, AlignmentError};

/// The gap symbol. Every other byte in a column counts as a state.
pub const GAP: u8 = b'-';

/// Run-level selection criterion, chosen once from the CLI mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Invariant,
    GapFree,
    AllGap,
    ParsimonyInformative,
}

impl Criterion {
    /// Resolve the mode flags by precedence: parsinf > allgap > gapfree >
    /// invariant. Multiple flags are not an error.
    pub fn from_flags(parsinf: bool, allgap: bool, gapfree: bool) -> Self {
        if parsinf {
            Criterion::ParsimonyInformative
        } else if allgap {
            Criterion::AllGap
        } else if gapfree {
            Criterion::GapFree
        } else {
            Criterion::Invariant
        }
    }

    /// Human-readable criterion label used in the verbose report.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Invariant => "invariant",
            Criterion::GapFree => "gap-free",
            Criterion::AllGap => "all-gap",
            Criterion::ParsimonyInformative => "parsimoniously informative",
        }
    }

    /// Whether this criterion consults the frequency cutoff.
    pub fn uses_cutoff(&self) -> bool {
        matches!(self, Criterion::Invariant | Criterion::GapFree)
    }

    /// Bind the per-alignment cutoff, yielding the classification mode.
    pub fn with_cutoff(&self, cutoff: f64) -> SiteMode {
        match self {
            Criterion::Invariant => SiteMode::Invariant { cutoff },
            Criterion::GapFree => SiteMode::GapFree { cutoff },
            Criterion::AllGap => SiteMode::AllGap,
            Criterion::ParsimonyInformative => SiteMode::ParsimonyInformative,
        }
    }
}

/// Classification mode with the resolved cutoff baked in. Built once per
/// alignment record; the cutoff depends on the record's row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiteMode {
    Invariant { cutoff: f64 },
    GapFree { cutoff: f64 },
    AllGap,
    ParsimonyInformative,
}

/// Decide whether a single column is selected. Pure function of the column,
/// the mode, and the negation flag.
pub fn classify_column(column: &[u8], mode: SiteMode, negate: bool) -> bool {
    let mut counts = [0usize; 256];
    for &c in column {
        counts[c as usize] += 1;
    }
    let nrows = column.len() as f64;

    let base = match mode {
        SiteMode::Invariant { cutoff } => {
            let majority = counts.iter().copied().max().unwrap_or(0);
            1.0 - majority as f64 / nrows <= cutoff
        }
        SiteMode::GapFree { cutoff } => counts[GAP as usize] as f64 / nrows <= cutoff,
        SiteMode::AllGap => counts[GAP as usize] == column.len(),
        SiteMode::ParsimonyInformative => {
            // Informative iff at least two states are each shared by >= 2 rows
            counts.iter().filter(|&&c| c >= 2).count() >= 2
        }
    };

    if negate {
        !base
    } else {
        base
    }
}

/// Classify every column of an alignment into a selection mask.
pub fn selection_mask(
    aln: &Alignment,
    mode: SiteMode,
    negate: bool,
) -> Result<Vec<bool>, AlignmentError> {
    Ok(columns(aln)?
        .iter()
        .map(|col| classify_column(col, mode, negate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn aln(seqs: &[&str]) -> Alignment {
        Alignment::new(
            seqs.iter()
                .enumerate()
                .map(|(i, s)| Row::new(format!("s{}", i), None, s.as_bytes().to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_flag_precedence() {
        assert_eq!(
            Criterion::from_flags(true, true, true),
            Criterion::ParsimonyInformative
        );
        assert_eq!(Criterion::from_flags(false, true, true), Criterion::AllGap);
        assert_eq!(Criterion::from_flags(false, false, true), Criterion::GapFree);
        assert_eq!(
            Criterion::from_flags(false, false, false),
            Criterion::Invariant
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Criterion::Invariant.label(), "invariant");
        assert_eq!(Criterion::GapFree.label(), "gap-free");
        assert_eq!(Criterion::AllGap.label(), "all-gap");
        assert_eq!(
            Criterion::ParsimonyInformative.label(),
            "parsimoniously informative"
        );
    }

    #[test]
    fn test_uses_cutoff() {
        assert!(Criterion::Invariant.uses_cutoff());
        assert!(Criterion::GapFree.uses_cutoff());
        assert!(!Criterion::AllGap.uses_cutoff());
        assert!(!Criterion::ParsimonyInformative.uses_cutoff());
    }

    #[test]
    fn test_invariant_uniform_column() {
        // [A,A,A,A]: majority frequency 1.0, complement 0
        let mode = SiteMode::Invariant { cutoff: 0.0 };
        assert!(classify_column(b"AAAA", mode, false));
    }

    #[test]
    fn test_invariant_cutoff_boundary() {
        // [A,A,C,A]: complement 0.25, selected only when cutoff >= 0.25
        assert!(!classify_column(b"AACA", SiteMode::Invariant { cutoff: 0.0 }, false));
        assert!(!classify_column(b"AACA", SiteMode::Invariant { cutoff: 0.2 }, false));
        assert!(classify_column(b"AACA", SiteMode::Invariant { cutoff: 0.25 }, false));
        assert!(classify_column(b"AACA", SiteMode::Invariant { cutoff: 0.5 }, false));
    }

    #[test]
    fn test_invariant_counts_gaps_as_states() {
        // Gap is the majority state here, so the column is invariant up to
        // the one deviating row
        assert!(classify_column(b"---A", SiteMode::Invariant { cutoff: 0.25 }, false));
        assert!(!classify_column(b"---A", SiteMode::Invariant { cutoff: 0.0 }, false));
    }

    #[test]
    fn test_gapfree_boundary_at_zero() {
        let mode = SiteMode::GapFree { cutoff: 0.0 };
        assert!(classify_column(b"ACGT", mode, false));
        assert!(!classify_column(b"AC-T", mode, false));
    }

    #[test]
    fn test_gapfree_with_cutoff() {
        // One gap in four rows: frequency 0.25
        assert!(classify_column(b"AC-T", SiteMode::GapFree { cutoff: 0.25 }, false));
        assert!(!classify_column(b"A--T", SiteMode::GapFree { cutoff: 0.25 }, false));
    }

    #[test]
    fn test_allgap() {
        assert!(classify_column(b"----", SiteMode::AllGap, false));
        assert!(!classify_column(b"---A", SiteMode::AllGap, false));
        assert!(!classify_column(b"ACGT", SiteMode::AllGap, false));
    }

    #[test]
    fn test_parsinf_examples() {
        // [A,A,C,C,G]: A and C both shared by two rows
        assert!(classify_column(b"AACCG", SiteMode::ParsimonyInformative, false));
        // [A,A,A,C,G]: only A reaches count 2
        assert!(!classify_column(b"AAACG", SiteMode::ParsimonyInformative, false));
    }

    #[test]
    fn test_parsinf_gap_interaction() {
        // [-,A,A,A]: counts -:1, A:3; a single state with count >= 2
        assert!(!classify_column(b"-AAA", SiteMode::ParsimonyInformative, false));
        // Negation flips the final decision, not the base computation
        assert!(classify_column(b"-AAA", SiteMode::ParsimonyInformative, true));
    }

    #[test]
    fn test_parsinf_single_row_never_informative() {
        assert!(!classify_column(b"A", SiteMode::ParsimonyInformative, false));
    }

    #[test]
    fn test_single_row_trivially_invariant_and_gapfree() {
        assert!(classify_column(b"A", SiteMode::Invariant { cutoff: 0.0 }, false));
        assert!(classify_column(b"A", SiteMode::GapFree { cutoff: 0.0 }, false));
    }

    #[test]
    fn test_double_negation_identity() {
        let modes = [
            SiteMode::Invariant { cutoff: 0.2 },
            SiteMode::GapFree { cutoff: 0.2 },
            SiteMode::AllGap,
            SiteMode::ParsimonyInformative,
        ];
        for mode in modes {
            for col in [&b"AACCG"[..], b"----", b"AC-T", b"AAAA"] {
                assert_eq!(
                    classify_column(col, mode, true),
                    !classify_column(col, mode, false)
                );
            }
        }
    }

    #[test]
    fn test_cutoff_monotonicity() {
        let cols: [&[u8]; 5] = [b"AAAA", b"AACA", b"ACGT", b"A--A", b"----"];
        let cutoffs = [0.0, 0.25, 0.5, 0.75];
        for pair in cutoffs.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            for col in cols {
                // Invariant and GapFree selections grow with the cutoff
                if classify_column(col, SiteMode::Invariant { cutoff: lo }, false) {
                    assert!(classify_column(col, SiteMode::Invariant { cutoff: hi }, false));
                }
                if classify_column(col, SiteMode::GapFree { cutoff: lo }, false) {
                    assert!(classify_column(col, SiteMode::GapFree { cutoff: hi }, false));
                }
            }
        }
    }

    #[test]
    fn test_selection_mask() {
        let aln = aln(&["AC-A", "AC-C", "AG-A", "AG-C"]);
        let mask = selection_mask(&aln, SiteMode::ParsimonyInformative, false).unwrap();
        // Column 0 uniform, column 1 C/C/G/G, column 2 all gaps, column 3 A/C/A/C
        assert_eq!(mask, vec![false, true, false, true]);
    }

    #[test]
    fn test_selection_mask_ragged_fails() {
        let aln = aln(&["ACGT", "AC"]);
        assert!(selection_mask(&aln, SiteMode::AllGap, false).is_err());
    }
}
