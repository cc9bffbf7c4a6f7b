// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::{cutoff, Criterion};
use crate::data::{InputFormat, Moltype};
use crate::output::OutputFormat;

/// Immutable run configuration, resolved once from the validated arguments
/// and threaded explicitly through the processing loop.
#[derive(Debug)]
pub struct ValidationResult {
    pub criterion: Criterion,
    pub frequency: f64,
    pub negate: bool,
    pub verbose: bool,
    pub informat: InputFormat,
    pub outformat: OutputFormat,
    pub moltype: Option<Moltype>,
}

/// Validate all command line arguments. Fails before any alignment is read.
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    cutoff::validate_frequency(args.frequency)?;

    let criterion = Criterion::from_flags(args.parsinf, args.allgap, args.gapfree);

    let informat: InputFormat = args.format.parse()?;

    let outformat = match &args.outformat {
        Some(s) => s.parse()?,
        None => OutputFormat::from(informat),
    };

    let moltype = match &args.moltype {
        Some(s) => Some(s.parse::<Moltype>()?),
        None => None,
    };

    Ok(ValidationResult {
        criterion,
        frequency: args.frequency,
        negate: args.negate,
        verbose: args.verbose,
        informat,
        outformat,
        moltype,
    })
}
