use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::sequence::Strand;

/// What happened to one assembly file during a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// A contig carried the target and was written to `output`
    Extracted {
        contig: String,
        strand: Strand,
        output: PathBuf,
    },
    /// No contig carried the target
    NoMatch,
    /// The file could not be read, parsed, or its contig written
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Per-file results of a scan, in the order files were processed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files: Vec<FileReport>,
}

impl ScanSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, outcome: FileOutcome) {
        self.files.push(FileReport {
            path: path.into(),
            outcome,
        });
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn extracted_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Extracted { .. }))
    }

    pub fn unmatched_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NoMatch))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    /// Look up the outcome recorded for an assembly file
    pub fn outcome(&self, path: &Path) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|report| report.path == path)
            .map(|report| &report.outcome)
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|r| predicate(&r.outcome)).count()
    }
}
