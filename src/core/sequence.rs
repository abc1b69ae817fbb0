use std::fmt;

use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{normalize_sequence, ValidationError};

/// Strand of an assembly record on which the target was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    /// The target occurs as given
    Forward,
    /// The reverse complement of the target occurs
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Complement a single IUPAC nucleotide, preserving case.
///
/// Gaps and unknown symbols are returned unchanged.
#[inline]
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        // S, W, N and gaps are their own complement
        other => other,
    }
}

/// Compute the reverse complement of a nucleotide sequence.
///
/// # Examples
///
/// ```
/// use contig_finder::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AAAC"), b"GTTT");
/// assert_eq!(reverse_complement(b"ACGT"), b"ACGT"); // palindrome
/// assert_eq!(reverse_complement(b"ACGRN"), b"NYCGT");
/// ```
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}

/// The sequence being searched for, on both strands.
///
/// Built once per run from the target FASTA record and never modified.
/// Both strands are uppercase; haystacks passed to [`TargetSequence::find`]
/// must be uppercase too.
#[derive(Debug, Clone)]
pub struct TargetSequence {
    name: String,
    forward: Vec<u8>,
    reverse: Vec<u8>,
    forward_finder: Finder<'static>,
    /// None when the target is its own reverse complement
    reverse_finder: Option<Finder<'static>>,
}

impl TargetSequence {
    /// Validate and normalize a raw sequence into a searchable target.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the sequence is empty or contains a
    /// symbol that is not an IUPAC nucleotide code.
    pub fn new(name: impl Into<String>, sequence: &[u8]) -> Result<Self, ValidationError> {
        let forward = normalize_sequence(sequence)?;
        let reverse = reverse_complement(&forward);

        let forward_finder = Finder::new(&forward).into_owned();
        let reverse_finder = if reverse == forward {
            None
        } else {
            Some(Finder::new(&reverse).into_owned())
        };

        Ok(Self {
            name: name.into(),
            forward,
            reverse,
            forward_finder,
            reverse_finder,
        })
    }

    /// Name of the record the target was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The target as given (uppercase)
    pub fn forward(&self) -> &[u8] {
        &self.forward
    }

    /// The reverse complement of the target (uppercase)
    pub fn reverse_complement(&self) -> &[u8] {
        &self.reverse
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// True when the target equals its own reverse complement
    pub fn is_palindromic(&self) -> bool {
        self.reverse_finder.is_none()
    }

    /// Find the strand on which the target occurs in `haystack`.
    ///
    /// The forward strand is checked first, so a palindromic target is
    /// always reported as [`Strand::Forward`].
    pub fn find(&self, haystack: &[u8]) -> Option<Strand> {
        if haystack.len() < self.forward.len() {
            return None;
        }

        if self.forward_finder.find(haystack).is_some() {
            return Some(Strand::Forward);
        }

        match &self.reverse_finder {
            Some(finder) if finder.find(haystack).is_some() => Some(Strand::Reverse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_pairs() {
        let pairs = [
            (b'A', b'T'),
            (b'C', b'G'),
            (b'R', b'Y'),
            (b'K', b'M'),
            (b'B', b'V'),
            (b'D', b'H'),
        ];
        for (a, b) in pairs {
            assert_eq!(complement(a), b);
            assert_eq!(complement(b), a);
            assert_eq!(complement(a.to_ascii_lowercase()), b.to_ascii_lowercase());
        }

        for base in [b'S', b'W', b'N', b'-', b'.'] {
            assert_eq!(complement(base), base);
        }
        assert_eq!(complement(b'U'), b'A');
    }

    #[test]
    fn test_reverse_complement_involutive() {
        let sequences: [&[u8]; 5] = [
            b"ACGTTGCA",
            b"AAAAACCCCCGGT",
            b"ACGTRYKMSWBDHVN",
            b"acgtNNnnGGtc",
            b"A",
        ];
        for seq in sequences {
            assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
        }
    }

    #[test]
    fn test_target_sequence_normalizes() {
        let target = TargetSequence::new("blaCTX", b"aacg").unwrap();
        assert_eq!(target.name(), "blaCTX");
        assert_eq!(target.forward(), b"AACG");
        assert_eq!(target.reverse_complement(), b"CGTT");
        assert_eq!(target.len(), 4);
        assert!(!target.is_palindromic());
    }

    #[test]
    fn test_target_sequence_rejects_empty() {
        assert_eq!(
            TargetSequence::new("empty", b"").unwrap_err(),
            ValidationError::EmptySequence
        );
    }

    #[test]
    fn test_target_sequence_rejects_invalid_base() {
        assert!(matches!(
            TargetSequence::new("bad", b"ACGZ"),
            Err(ValidationError::InvalidBase { base: b'Z', .. })
        ));
    }

    #[test]
    fn test_find_forward() {
        let target = TargetSequence::new("t", b"ACGTTGCA").unwrap();
        assert_eq!(target.find(b"TTTTACGTTGCAAAA"), Some(Strand::Forward));
    }

    #[test]
    fn test_find_reverse() {
        let target = TargetSequence::new("t", b"AAAC").unwrap();
        assert_eq!(target.find(b"CCGTTTCC"), Some(Strand::Reverse));
        assert_eq!(target.find(b"CCCCCCCC"), None);
    }

    #[test]
    fn test_find_palindrome_reports_forward() {
        let target = TargetSequence::new("t", b"ACGT").unwrap();
        assert!(target.is_palindromic());
        assert_eq!(target.find(b"TTACGTTT"), Some(Strand::Forward));
        assert_eq!(target.find(b"TACG"), None);
    }

    #[test]
    fn test_find_target_longer_than_haystack() {
        let target = TargetSequence::new("t", b"ACGTACGTAC").unwrap();
        assert_eq!(target.find(b"ACGT"), None);
        assert_eq!(target.find(b""), None);
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
    }
}
