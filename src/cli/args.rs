// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// sitesieve - Column-wise site filter for multiple-sequence alignments
pub struct Args {
    /// input alignment files (reads standard input when omitted)
    #[argh(positional)]
    pub inputs: Vec<String>,

    /// select gap-free sites
    #[argh(switch, short = 'g')]
    pub gapfree: bool,

    /// select all-gap sites
    #[argh(switch, short = 'a')]
    pub allgap: bool,

    /// select parsimony-informative sites
    #[argh(switch, short = 'p')]
    pub parsinf: bool,

    /// invert the site selection
    #[argh(switch, short = 'v')]
    pub negate: bool,

    /// frequency cutoff: whole number of deviating sequences, or a fraction between 0 and 1 (default: 0)
    #[argh(option, short = 'f', default = "0.0")]
    pub frequency: f64,

    /// report matched site counts and indices on standard error
    #[argh(switch, short = 'V')]
    pub verbose: bool,

    /// input format: fasta, phylip (default: fasta)
    #[argh(option, default = "String::from(\"fasta\")")]
    pub format: String,

    /// output format: fasta, phylip, nexus (default: same as input format)
    #[argh(option)]
    pub outformat: Option<String>,

    /// molecule type: dna, rna, protein (default: inferred from content)
    #[argh(option)]
    pub moltype: Option<String>,

    /// output file (default: standard output)
    #[argh(option, short = 'o')]
    pub output: Option<String>,

    /// append a run log to this file
    #[argh(option)]
    pub log: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
