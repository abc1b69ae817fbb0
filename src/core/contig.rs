use noodles::fasta;

use crate::core::sequence::{Strand, TargetSequence};

/// A single contig read from an assembly file.
///
/// Wraps the parsed FASTA record unchanged so it can be written back out
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    record: fasta::Record,
}

impl Contig {
    pub fn new(record: fasta::Record) -> Self {
        Self { record }
    }

    /// Sequence name (first word of the header line)
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.record.name()).to_string()
    }

    /// Remainder of the header line after the name, if any
    pub fn description(&self) -> Option<String> {
        self.record
            .description()
            .map(|d| String::from_utf8_lossy(d).to_string())
    }

    pub fn sequence(&self) -> &[u8] {
        self.record.sequence().as_ref()
    }

    pub fn len(&self) -> usize {
        self.record.sequence().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn record(&self) -> &fasta::Record {
        &self.record
    }

    /// Check whether this contig contains the target on either strand.
    ///
    /// Comparison is case-insensitive: the contig is uppercased before
    /// searching, the stored sequence is left untouched.
    pub fn find(&self, target: &TargetSequence) -> Option<Strand> {
        if self.len() < target.len() {
            return None;
        }

        let uppercase = self.sequence().to_ascii_uppercase();
        target.find(&uppercase)
    }
}

impl From<fasta::Record> for Contig {
    fn from(record: fasta::Record) -> Self {
        Self::new(record)
    }
}
