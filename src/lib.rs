//! # contig-finder
//!
//! A library for locating a DNA sequence in bacterial genome assemblies.
//!
//! Given a target sequence (for example a resistance gene) and a directory of
//! FASTA assemblies, `contig-finder` finds which assemblies carry the target
//! on either strand and extracts the contig that contains it, so the genetic
//! context of the target can be studied on its own.
//!
//! ## Features
//!
//! - **Both strands**: Searches the target and its reverse complement
//! - **IUPAC aware**: Ambiguity codes are complemented per the standard convention
//! - **Case-insensitive**: Soft-masked (lowercase) assemblies match uppercase targets
//! - **Compressed input**: Reads gzip/bgzip compressed FASTA transparently
//! - **Fault isolated**: A malformed assembly is logged and skipped, never fatal
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_finder::parsing::fasta::read_target_sequence;
//! use contig_finder::scanning::search_sequence;
//! use std::path::Path;
//!
//! let target = read_target_sequence(Path::new("blaKPC.fasta")).unwrap();
//! let summary = search_sequence(Path::new("assemblies"), &target, Path::new("out")).unwrap();
//!
//! println!(
//!     "{} of {} assemblies carry {}",
//!     summary.extracted_count(),
//!     summary.len(),
//!     target.name()
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Target sequence, reverse complement, and contig types
//! - [`parsing`]: FASTA reading for targets and assemblies
//! - [`scanning`]: Directory scanning and contig extraction
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod scanning;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::contig::Contig;
pub use crate::core::sequence::{reverse_complement, Strand, TargetSequence};
pub use scanning::{search_sequence, AssemblyScanner, FileOutcome, ScanSummary};
