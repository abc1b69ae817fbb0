//! Scanning assembly directories for a target sequence.
//!
//! The scanner walks every FASTA file in a directory in name order, looks for
//! the first contig carrying the target on either strand, and writes that
//! contig to `<output>/<base>_contig<ext>`.
//!
//! Errors come in two kinds:
//!
//! - [`ScanError`]: setup failures that abort the run (output directory cannot
//!   be created, assemblies directory cannot be listed)
//! - [`FileError`]: problems with one assembly file; logged, recorded in the
//!   [`ScanSummary`], and skipped

use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::fasta::ParseError;

pub mod scanner;
pub mod summary;

pub use scanner::{output_file_name, search_sequence, AssemblyScanner};
pub use summary::{FileOutcome, FileReport, ScanSummary};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read assemblies directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output {} was already written by another assembly in this run", path.display())]
    OutputCollision { path: PathBuf },
}
