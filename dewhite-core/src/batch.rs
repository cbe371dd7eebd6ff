//! Directory batch driver

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::filter::{remove_white_background, FilterError};

/// Result of running the filter over one file.
#[derive(Debug)]
pub enum FileOutcome {
    Processed { path: PathBuf, cleared: usize },
    Failed { path: PathBuf, error: FilterError },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Processed { path, .. } | Self::Failed { path, .. } => path,
        }
    }

    /// The operator-facing line for this file.
    pub fn message(&self) -> String {
        match self {
            Self::Processed { path, .. } => format!("Processed: {}", path.display()),
            Self::Failed { path, error } => {
                format!("Error processing {}: {}", path.display(), error)
            }
        }
    }
}

/// Tally of one [`process_dir`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
    /// The directory did not exist and nothing was attempted
    pub missing_dir: bool,
}

impl BatchReport {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed { .. } => self.processed += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Run the filter over a single file, capturing failure as a value.
pub fn process_file(path: PathBuf) -> FileOutcome {
    match remove_white_background(&path) {
        Ok(cleared) => FileOutcome::Processed { path, cleared },
        Err(error) => FileOutcome::Failed { path, error },
    }
}

/// File names the driver picks up.
const PNG_PATTERN: &str = "*.png";

/// List the `.png` entries directly inside `dir`, sorted by path.
///
/// Each entry is `dir` joined with the entry name, so the directory is kept
/// exactly as given.
fn png_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(PNG_PATTERN).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::debug!("Listing {}/{}", dir.display(), PNG_PATTERN);

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let name = entry.file_name();
        if pattern.matches(&name.to_string_lossy()) {
            entries.push(dir.join(name));
        }
    }
    entries.sort();
    Ok(entries)
}

/// Clear the white background of every `.png` file directly inside `dir`.
///
/// One line per file is written to `out`. A file that fails is reported and
/// the batch moves on; only a failure to write to `out` is returned as an
/// error.
pub fn process_dir(dir: impl AsRef<Path>, out: &mut impl Write) -> io::Result<BatchReport> {
    let dir = dir.as_ref();
    let mut report = BatchReport::default();

    if !dir.exists() {
        writeln!(out, "Assets directory not found.")?;
        report.missing_dir = true;
        return Ok(report);
    }

    let entries = png_entries(dir)?;
    log::info!("Found {} PNG files in {}", entries.len(), dir.display());

    for path in entries {
        let outcome = process_file(path);
        if let FileOutcome::Processed { path, cleared } = &outcome {
            log::debug!("{}: {} pixels made transparent", path.display(), cleared);
        }
        writeln!(out, "{}", outcome.message())?;
        report.record(&outcome);
    }

    log::info!(
        "Batch done: {} processed, {} failed",
        report.processed,
        report.failed
    );
    Ok(report)
}
