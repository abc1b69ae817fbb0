//! Command-line interface for contig-finder.
//!
//! ## Usage
//!
//! ```text
//! # Extract the contig carrying blaKPC from every assembly
//! contig-finder -d assemblies/ -s blaKPC.fasta -o kpc_contigs/
//!
//! # Machine-readable run summary
//! contig-finder -d assemblies/ -s blaKPC.fasta -o kpc_contigs/ --format json
//! ```

use clap::Parser;

pub mod search;

#[derive(Parser)]
#[command(name = "contig-finder")]
#[command(version)]
#[command(
    about = "Search for a DNA sequence in bacterial assembly files and extract the contig containing it"
)]
#[command(
    long_about = "contig-finder searches every FASTA assembly in a directory for a target sequence and its reverse complement.\n\nFor each assembly containing the target, the first contig carrying it is written to <output>/<assembly>_contig.<ext>."
)]
pub struct Cli {
    #[command(flatten)]
    pub search: search::SearchArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the run summary printed when the scan finishes
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
