// mod.rs - Data structures module

pub mod alignment;
pub mod loaders;
pub mod moltype;

// Re-export main types for convenience
pub use alignment::{Alignment, AlignmentError, Row};
pub use loaders::{load_file, read_alignments, InputFormat, LoadError};
pub use moltype::{infer_moltype, Moltype};
