// main.rs - CLI entry point

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use sitesieve::cli::{validate_args, Args, Config, ValidationResult};
use sitesieve::core::{filter_alignment, write_report};
use sitesieve::data::{infer_moltype, load_file, read_alignments, Alignment};
use sitesieve::logging::RunLog;
use sitesieve::output::write_alignment;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate all arguments before reading any input
    let validation = validate_args(&args)?;

    let mut log = RunLog::open(args.log.as_deref(), &command_line)?;

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create output file '{}': {}", path, e))?;
            BufWriter::new(Box::new(file))
        }
        None => BufWriter::new(Box::new(io::stdout())),
    };

    if args.inputs.is_empty() {
        let records = read_alignments(io::stdin(), validation.informat)
            .map_err(|e| format!("Failed to read alignment from stdin: {}", e))?;
        process_records("stdin", records, &validation, &mut writer, &mut log)?;
    } else {
        // Files are processed strictly in argument order; a failing file
        // never affects the ones after it
        for path in &args.inputs {
            if !Path::new(path).exists() {
                eprintln!("⚠️  WARNING: input file not found, skipping: {}", path);
                log.record(&format!("skipped missing input file: {}", path))?;
                continue;
            }

            match load_file(Path::new(path), validation.informat) {
                Ok(records) => {
                    process_records(path, records, &validation, &mut writer, &mut log)?
                }
                Err(e) => {
                    eprintln!("❌ ERROR reading {}: {}", path, e);
                    log.record(&format!("failed to read {}: {}", path, e))?;
                }
            }
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Flush error: {}", e))?;
    log.flush()?;

    Ok(())
}

/// Classify, report, assemble and write every record of one input stream.
fn process_records(
    source: &str,
    records: Vec<Alignment>,
    validation: &ValidationResult,
    writer: &mut impl Write,
    log: &mut RunLog,
) -> Result<(), String> {
    for aln in records {
        let result = match filter_alignment(
            &aln,
            validation.criterion,
            validation.frequency,
            validation.negate,
        ) {
            Ok(result) => result,
            Err(e) => {
                // Ragged record: fatal for this record only
                eprintln!("❌ ERROR in {}: {}", source, e);
                log.record(&format!("skipped record in {}: {}", source, e))?;
                continue;
            }
        };

        if validation.verbose {
            let mut stderr = io::stderr().lock();
            write_report(
                &mut stderr,
                &result.mask,
                validation.criterion,
                validation.negate,
                result.cutoff,
                validation.frequency,
            )
            .map_err(|e| format!("Report write error: {}", e))?;
        }

        let moltype = validation
            .moltype
            .unwrap_or_else(|| infer_moltype(&aln));
        write_alignment(writer, validation.outformat, &result.filtered, moltype)?;

        log.record(&format!(
            "{}: kept {} of {} sites ({} rows)",
            source,
            result.mask.iter().filter(|&&b| b).count(),
            result.mask.len(),
            aln.nrows()
        ))?;
    }

    Ok(())
}
