use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::sequence::TargetSequence;
use crate::parsing::fasta::read_target_sequence;
use crate::scanning::summary::{FileOutcome, ScanSummary};
use crate::scanning::AssemblyScanner;

#[derive(Args)]
pub struct SearchArgs {
    /// Directory containing FASTA assembly files
    #[arg(short, long, required = true)]
    pub directory: PathBuf,

    /// FASTA file of the sequence to search for (exactly one record)
    #[arg(short, long, required = true)]
    pub sequence: PathBuf,

    /// Output directory for extracted contigs (created if missing)
    #[arg(short, long, required = true)]
    pub output: PathBuf,
}

/// Execute the search
///
/// # Errors
///
/// Returns an error if the target sequence cannot be loaded, the output
/// directory cannot be created, or the assemblies directory cannot be read.
/// Failures in individual assembly files are reported in the summary instead.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    info!("Reading target sequence and its reverse complement.");
    let target = read_target_sequence(&args.sequence).with_context(|| {
        format!(
            "Failed to read sequence from {}",
            args.sequence.display()
        )
    })?;

    if verbose {
        eprintln!(
            "Target {}: {} bp{}",
            target.name(),
            target.len(),
            if target.is_palindromic() {
                " (palindromic)"
            } else {
                ""
            }
        );
    }

    info!("Starting sequence search in assembly files.");
    let scanner = AssemblyScanner::new(&target, &args.output);
    let summary = scanner.scan_directory(&args.directory)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary, verbose),
        OutputFormat::Json => print_json_summary(&target, &summary)?,
    }

    Ok(())
}

fn print_text_summary(summary: &ScanSummary, verbose: bool) {
    println!("Search Results");
    println!("{}", "=".repeat(60));

    for report in &summary.files {
        let name = report
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match &report.outcome {
            FileOutcome::Extracted {
                contig,
                strand,
                output,
            } => println!("{name}\t{contig}\t{strand}\t{}", output.display()),
            FileOutcome::NoMatch if verbose => println!("{name}\t-\tno match"),
            FileOutcome::NoMatch => {}
            FileOutcome::Failed { error } => println!("{name}\t-\tfailed: {error}"),
        }
    }

    println!(
        "\nScanned {} assemblies: {} extracted, {} without match, {} failed",
        summary.len(),
        summary.extracted_count(),
        summary.unmatched_count(),
        summary.failed_count(),
    );
}

fn print_json_summary(target: &TargetSequence, summary: &ScanSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "target": {
            "name": target.name(),
            "length": target.len(),
            "palindromic": target.is_palindromic(),
        },
        "assemblies_scanned": summary.len(),
        "extracted": summary.extracted_count(),
        "unmatched": summary.unmatched_count(),
        "failed": summary.failed_count(),
        "files": summary.files,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
