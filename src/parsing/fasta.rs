//! FASTA reading using noodles.
//!
//! Loads the single-record target sequence and streams contigs out of
//! assembly files. Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::contig::Contig;
use crate::core::sequence::TargetSequence;
use crate::utils::validation::{check_contig_limit, ValidationError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many contigs: {0} exceeds maximum allowed (100000)")]
    TooManyContigs(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Compression suffixes recognized on FASTA files (lowercase)
const COMPRESSION_SUFFIXES: [&str; 2] = [".gz", ".bgz"];

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();

    matches!(
        Path::new(strip_compression_suffix(&name))
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    COMPRESSION_SUFFIXES
        .iter()
        .any(|suffix| path_str.ends_with(suffix))
}

/// Remove a trailing `.gz`/`.bgz` (any case) from a file name.
///
/// ```
/// use contig_finder::parsing::fasta::strip_compression_suffix;
///
/// assert_eq!(strip_compression_suffix("sample.fna.gz"), "sample.fna");
/// assert_eq!(strip_compression_suffix("sample.FA.BGZ"), "sample.FA");
/// assert_eq!(strip_compression_suffix("sample.fasta"), "sample.fasta");
/// ```
pub fn strip_compression_suffix(file_name: &str) -> &str {
    let lower = file_name.to_ascii_lowercase();
    COMPRESSION_SUFFIXES
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map_or(file_name, |suffix| {
            &file_name[..file_name.len() - suffix.len()]
        })
}

/// Open a FASTA file, decompressing it if the name says it is gzipped.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_reader(path: &Path) -> Result<fasta::io::Reader<Box<dyn BufRead>>, ParseError> {
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(inner))
}

/// Read the target sequence from a FASTA file holding exactly one record.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, `ParseError::InvalidFormat` if the file holds zero or
/// more than one record, or `ParseError::Validation` if the sequence is empty
/// or contains non-nucleotide symbols.
pub fn read_target_sequence(path: &Path) -> Result<TargetSequence, ParseError> {
    let mut reader = open_reader(path)?;
    read_target_from_reader(&mut reader)
}

fn read_target_from_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<TargetSequence, ParseError> {
    let mut records = reader.records();

    let record = match records.next() {
        Some(result) => result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?,
        None => {
            return Err(ParseError::InvalidFormat(
                "No sequences found in FASTA file".to_string(),
            ))
        }
    };

    if records.next().is_some() {
        return Err(ParseError::InvalidFormat(
            "More than one record found; expected a single target sequence".to_string(),
        ));
    }

    let name = String::from_utf8_lossy(record.name()).to_string();
    Ok(TargetSequence::new(name, record.sequence().as_ref())?)
}

/// Stream the contigs of an assembly file and return the first one accepted
/// by `matcher`, along with what the matcher returned.
///
/// Records after the first accepted one are never read.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if a record before the match fails to parse, or
/// `ParseError::TooManyContigs` if the limit is exceeded.
pub fn find_contig<T, F>(path: &Path, matcher: F) -> Result<Option<(Contig, T)>, ParseError>
where
    F: FnMut(&Contig) -> Option<T>,
{
    let mut reader = open_reader(path)?;
    find_contig_in_reader(&mut reader, matcher)
}

fn find_contig_in_reader<R, T, F>(
    reader: &mut fasta::io::Reader<R>,
    mut matcher: F,
) -> Result<Option<(Contig, T)>, ParseError>
where
    R: BufRead,
    F: FnMut(&Contig) -> Option<T>,
{
    for (count, result) in reader.records().enumerate() {
        // Check contig limit for DOS protection
        if check_contig_limit(count).is_some() {
            return Err(ParseError::TooManyContigs(count));
        }

        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let contig = Contig::new(record);
        if let Some(hit) = matcher(&contig) {
            return Ok(Some((contig, hit)));
        }
    }

    Ok(None)
}
