//! FASTA parsing for target sequences and assemblies.
//!
//! ## Example
//!
//! ```rust,no_run
//! use contig_finder::parsing::fasta::{find_contig, read_target_sequence};
//! use std::path::Path;
//!
//! let target = read_target_sequence(Path::new("blaKPC.fasta")).unwrap();
//!
//! // First contig carrying the target on either strand
//! let hit = find_contig(Path::new("assemblies/sample1.fasta"), |contig| {
//!     contig.find(&target)
//! })
//! .unwrap();
//! ```

pub mod fasta;

pub use fasta::ParseError;
