//! Centralized validation and helper functions.

/// Maximum number of contigs allowed in a single assembly (DOS protection)
pub const MAX_CONTIGS: usize = 100_000;

/// Nucleotide symbols accepted in a target sequence (IUPAC codes plus gaps).
pub const IUPAC_NUCLEOTIDES: &[u8] = b"ACGTURYKMSWBDHVN-.";

/// Target sequence validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Target sequence is empty")]
    EmptySequence,
    #[error("Invalid nucleotide '{}' at position {position}", char::from(*base))]
    InvalidBase { base: u8, position: usize },
}

/// Check whether a byte is an IUPAC nucleotide code (case-insensitive).
///
/// # Examples
///
/// ```
/// use contig_finder::utils::validation::is_nucleotide;
///
/// assert!(is_nucleotide(b'A'));
/// assert!(is_nucleotide(b'n'));
/// assert!(!is_nucleotide(b'X'));
/// assert!(!is_nucleotide(b' '));
/// ```
#[must_use]
pub fn is_nucleotide(base: u8) -> bool {
    IUPAC_NUCLEOTIDES.contains(&base.to_ascii_uppercase())
}

/// Validate a target sequence and normalize it for searching.
///
/// The result is uppercase, with RNA `U` rewritten to `T` so that the
/// reverse complement is involutive.
///
/// # Errors
///
/// Returns `ValidationError::EmptySequence` if the sequence has no bases, or
/// `ValidationError::InvalidBase` for the first symbol outside the IUPAC
/// nucleotide alphabet.
pub fn normalize_sequence(sequence: &[u8]) -> Result<Vec<u8>, ValidationError> {
    if sequence.is_empty() {
        return Err(ValidationError::EmptySequence);
    }

    sequence
        .iter()
        .enumerate()
        .map(|(position, &base)| {
            if !is_nucleotide(base) {
                return Err(ValidationError::InvalidBase { base, position });
            }
            Ok(match base.to_ascii_uppercase() {
                b'U' => b'T',
                upper => upper,
            })
        })
        .collect()
}

/// Check if reading another contig would exceed the maximum allowed.
///
/// Call this with the current count BEFORE accepting a new contig.
/// Returns an error message if the limit is reached, None if safe to continue.
#[must_use]
pub fn check_contig_limit(count: usize) -> Option<String> {
    if count >= MAX_CONTIGS {
        Some(format!(
            "Too many contigs: adding another would exceed maximum of {MAX_CONTIGS}"
        ))
    } else {
        None
    }
}
