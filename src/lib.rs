// lib.rs - sitesieve library root

//! # sitesieve - Column-wise site filter for multiple-sequence alignments
//!
//! This library classifies the columns ("sites") of a multiple-sequence
//! alignment and keeps or discards each one under a selection criterion:
//! invariant, gap-free, all-gap, or parsimony-informative sites, with an
//! optional frequency cutoff and result negation.
//!
//! ## Features
//!
//! - **Four selection criteria**: invariant (default), gap-free, all-gap,
//!   parsimony-informative
//! - **Frequency cutoff**: absolute sequence counts or relative fractions,
//!   resolved per alignment record
//! - **Negation**: invert any selection uniformly
//! - **Multiple formats**: FASTA and PHYLIP input, FASTA/PHYLIP/NEXUS output
//! - **Verbose reporting**: matched site counts and zero-based indices on
//!   the diagnostic stream
//!
//! ## Basic Usage
//!
//! ```rust
//! use sitesieve::prelude::*;
//!
//! let aln = Alignment::new(vec![
//!     Row::new("s1", None, b"AACA".to_vec()),
//!     Row::new("s2", None, b"AAC-".to_vec()),
//! ]);
//!
//! // Keep only columns without gaps
//! let result = filter_alignment(&aln, Criterion::GapFree, 0.0, false)?;
//! assert_eq!(result.mask, vec![true, true, true, false]);
//! assert_eq!(result.filtered.rows[0].seq, b"AAC");
//! # Ok::<(), sitesieve::data::AlignmentError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod logging;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{
        apply_mask, classify_column, filter_alignment, resolve_cutoff, selection_mask,
        write_report, Criterion, FilterResult, SiteMode,
    };
    pub use crate::data::{
        infer_moltype, load_file, read_alignments, Alignment, AlignmentError, InputFormat,
        LoadError, Moltype, Row,
    };
    pub use crate::output::{write_alignment, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{filter_alignment, Criterion, FilterResult, SiteMode};
pub use data::{Alignment, AlignmentError, InputFormat, Moltype, Row};
pub use output::OutputFormat;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
