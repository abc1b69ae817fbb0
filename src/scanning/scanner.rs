use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use noodles::fasta;
use tracing::{debug, error, info};

use crate::core::contig::Contig;
use crate::core::sequence::{Strand, TargetSequence};
use crate::parsing::fasta::{find_contig, is_fasta_file, strip_compression_suffix};
use crate::scanning::summary::{FileOutcome, ScanSummary};
use crate::scanning::{FileError, ScanError};

/// Suffix appended to the base name of an assembly for its extracted contig
pub const CONTIG_SUFFIX: &str = "_contig";

/// Name of the file an assembly's matching contig is written to.
///
/// Any compression suffix is dropped since output is written uncompressed.
///
/// ```
/// use contig_finder::scanning::output_file_name;
///
/// assert_eq!(output_file_name("EC-0042.fasta"), "EC-0042_contig.fasta");
/// assert_eq!(output_file_name("EC-0042.fna.gz"), "EC-0042_contig.fna");
/// assert_eq!(output_file_name("run.1.fa"), "run.1_contig.fa");
/// ```
pub fn output_file_name(file_name: &str) -> String {
    let name = Path::new(strip_compression_suffix(file_name));
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match name.extension() {
        Some(ext) => format!("{stem}{CONTIG_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{CONTIG_SUFFIX}"),
    }
}

/// List the FASTA files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns `ScanError::ReadDirectory` if the directory cannot be listed.
pub fn list_assembly_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let read_dir_error = |source: std::io::Error| ScanError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && is_fasta_file(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Searches assembly files for a target sequence and extracts the first
/// contig that contains it.
pub struct AssemblyScanner<'a> {
    target: &'a TargetSequence,
    output_dir: PathBuf,
}

impl<'a> AssemblyScanner<'a> {
    pub fn new(target: &'a TargetSequence, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            target,
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory (and parents) if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::CreateOutputDir` if the directory cannot be created.
    pub fn ensure_output_dir(&self) -> Result<(), ScanError> {
        if !self.output_dir.is_dir() {
            info!("Creating output directory at {}", self.output_dir.display());
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| ScanError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Scan every assembly file in `assemblies_dir`.
    ///
    /// Per-file failures are logged and recorded in the summary; they never
    /// stop the scan. When two assemblies map to the same output file (e.g.
    /// `S1.fasta` and `S1.fasta.gz`), the later one fails instead of
    /// overwriting the earlier extraction.
    ///
    /// # Errors
    ///
    /// Returns a `ScanError` if the output directory cannot be created or the
    /// assemblies directory cannot be listed.
    pub fn scan_directory(&self, assemblies_dir: &Path) -> Result<ScanSummary, ScanError> {
        self.ensure_output_dir()?;

        let files = list_assembly_files(assemblies_dir)?;
        debug!(
            "Found {} assembly files in {}",
            files.len(),
            assemblies_dir.display()
        );

        let mut summary = ScanSummary::new();
        let mut written = HashSet::new();
        for path in files {
            let outcome = self.scan_file_tracked(&path, &mut written);
            summary.push(path, outcome);
        }

        Ok(summary)
    }

    /// Scan a single assembly file, logging the outcome.
    pub fn scan_file(&self, path: &Path) -> FileOutcome {
        self.scan_file_tracked(path, &mut HashSet::new())
    }

    /// Scan one file, refusing to write an output already written this run.
    fn scan_file_tracked(&self, path: &Path, written: &mut HashSet<PathBuf>) -> FileOutcome {
        match self.try_scan_file(path, written) {
            Ok(Some((contig, strand, output))) => {
                let output_name = output
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                info!(
                    "Contig {} ({strand} strand) extracted to {output_name}",
                    contig.name()
                );
                FileOutcome::Extracted {
                    contig: contig.name(),
                    strand,
                    output,
                }
            }
            Ok(None) => {
                debug!("No contig in {} contains the target", path.display());
                FileOutcome::NoMatch
            }
            Err(e) => {
                error!("Error processing file {}: {e}", path.display());
                FileOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    fn try_scan_file(
        &self,
        path: &Path,
        written: &mut HashSet<PathBuf>,
    ) -> Result<Option<(Contig, Strand, PathBuf)>, FileError> {
        let Some((contig, strand)) = find_contig(path, |contig| contig.find(self.target))? else {
            return Ok(None);
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let output = self.output_dir.join(output_file_name(&file_name));

        if !written.insert(output.clone()) {
            return Err(FileError::OutputCollision { path: output });
        }

        write_contig(&contig, &output).map_err(|source| FileError::Write {
            path: output.clone(),
            source,
        })?;

        Ok(Some((contig, strand, output)))
    }
}

/// Write a single contig as a FASTA file, replacing any existing file.
fn write_contig(contig: &Contig, path: &Path) -> std::io::Result<()> {
    let mut buf = BufWriter::new(File::create(path)?);
    fasta::io::Writer::new(&mut buf).write_record(contig.record())?;
    buf.flush()
}

/// Search every assembly in `assemblies_dir` for `target` and extract
/// matching contigs into `output_dir`.
///
/// # Errors
///
/// Returns a `ScanError` if the output directory cannot be created or the
/// assemblies directory cannot be listed.
pub fn search_sequence(
    assemblies_dir: &Path,
    target: &TargetSequence,
    output_dir: &Path,
) -> Result<ScanSummary, ScanError> {
    AssemblyScanner::new(target, output_dir).scan_directory(assemblies_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("a.fasta"), "a_contig.fasta");
        assert_eq!(output_file_name("a.FA"), "a_contig.FA");
        assert_eq!(output_file_name("a.fasta.bgz"), "a_contig.fasta");
        assert_eq!(output_file_name("noext"), "noext_contig");
    }

    #[test]
    fn test_list_assembly_files_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "c.fasta", b">x\nA\n");
        write_file(dir.path(), "a.fna.gz", b"");
        write_file(dir.path(), "b.fa", b">x\nA\n");
        write_file(dir.path(), "notes.txt", b"hello");
        write_file(dir.path(), "a.fasta.fai", b"");
        fs::create_dir(dir.path().join("d.fasta")).unwrap();

        let files = list_assembly_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.fna.gz", "b.fa", "c.fasta"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = list_assembly_files(&dir.path().join("missing"));
        assert!(matches!(result, Err(ScanError::ReadDirectory { .. })));
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let dir = TempDir::new().unwrap();
        let target = TargetSequence::new("t", b"ACGT").unwrap();
        let output = dir.path().join("nested").join("out");
        let scanner = AssemblyScanner::new(&target, &output);

        scanner.ensure_output_dir().unwrap();
        assert!(output.is_dir());

        // Idempotent
        scanner.ensure_output_dir().unwrap();
        assert!(output.is_dir());
    }

    #[test]
    fn test_ensure_output_dir_fails_on_file() {
        let dir = TempDir::new().unwrap();
        let blocker = write_file(dir.path(), "blocker", b"");
        let target = TargetSequence::new("t", b"ACGT").unwrap();
        let scanner = AssemblyScanner::new(&target, blocker.join("out"));

        assert!(matches!(
            scanner.ensure_output_dir(),
            Err(ScanError::CreateOutputDir { .. })
        ));
    }

    #[test]
    fn test_scan_file_extracts_whole_record() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        let path = write_file(
            dir.path(),
            "sample.fasta",
            b">header\nTTTTACGTTGCAAAA\n",
        );
        let target = TargetSequence::new("t", b"ACGTTGCA").unwrap();
        let scanner = AssemblyScanner::new(&target, &out);

        let outcome = scanner.scan_file(&path);
        let expected_output = out.join("sample_contig.fasta");
        assert_eq!(
            outcome,
            FileOutcome::Extracted {
                contig: "header".to_string(),
                strand: Strand::Forward,
                output: expected_output.clone(),
            }
        );
        assert_eq!(
            fs::read_to_string(expected_output).unwrap(),
            ">header\nTTTTACGTTGCAAAA\n"
        );
    }

    #[test]
    fn test_scan_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "broken.fasta", b"not a fasta file\n");
        let target = TargetSequence::new("t", b"ACGT").unwrap();
        let scanner = AssemblyScanner::new(&target, dir.path());

        assert!(matches!(
            scanner.scan_file(&path),
            FileOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_scan_file_no_match() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        let path = write_file(dir.path(), "sample.fasta", b">c1\nGGGGGGGG\n");
        let target = TargetSequence::new("t", b"ACGTTGCA").unwrap();
        let scanner = AssemblyScanner::new(&target, &out);

        assert_eq!(scanner.scan_file(&path), FileOutcome::NoMatch);
        assert!(!out.join("sample_contig.fasta").exists());
    }
}
