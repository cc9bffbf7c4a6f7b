// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Site selection
    pub gapfree: Option<bool>,
    pub allgap: Option<bool>,
    pub parsinf: Option<bool>,
    pub negate: Option<bool>,
    pub frequency: Option<f64>,

    // Input/Output
    pub format: Option<String>,
    pub outformat: Option<String>,
    pub moltype: Option<String>,
    pub output: Option<String>,

    // Diagnostics
    pub verbose: Option<bool>,
    pub log: Option<String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        eprintln!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# sitesieve.toml - Configuration file for sitesieve
# Command line arguments will override these settings

# =============================================================================
# SITE SELECTION
# =============================================================================

# Selection criterion flags; precedence: parsinf > allgap > gapfree.
# With none set, invariant sites are selected.
# gapfree = true
# allgap = true
# parsinf = true

# Invert the selection
negate = false

# Frequency cutoff: a whole number means "at most this many deviating
# sequences"; a fraction between 0 and 1 is used directly. 0 disables it.
frequency = 0.0

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Input format: fasta, phylip
format = "fasta"

# Output format: fasta, phylip, nexus (defaults to the input format)
# outformat = "fasta"

# Molecule type: dna, rna, protein (inferred from content when omitted)
# moltype = "dna"

# Output file (standard output when omitted)
# output = "filtered.fasta"

# =============================================================================
# DIAGNOSTICS
# =============================================================================

# Report matched site counts and indices on standard error
verbose = false

# Append a run log to this file
# log = "sitesieve.log"
"#
        .to_string()
    }
}
