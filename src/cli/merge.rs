// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.gapfree && config.gapfree.unwrap_or(false) {
            self.gapfree = true;
        }
        if !self.allgap && config.allgap.unwrap_or(false) {
            self.allgap = true;
        }
        if !self.parsinf && config.parsinf.unwrap_or(false) {
            self.parsinf = true;
        }
        if !self.negate && config.negate.unwrap_or(false) {
            self.negate = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        // Core settings (only override defaults, not explicit CLI values)
        if self.frequency == 0.0 && config.frequency.is_some() {
            self.frequency = config.frequency.unwrap();
        }
        if self.format == "fasta" && config.format.is_some() {
            self.format = config.format.unwrap();
        }

        // Input/Output
        if self.outformat.is_none() {
            self.outformat = config.outformat;
        }
        if self.moltype.is_none() {
            self.moltype = config.moltype;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.log.is_none() {
            self.log = config.log;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
