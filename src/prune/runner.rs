//! The read → remove × N → cleanup → write cycle, with operator reporting.
//!
//! A run reads the whole file into a [`Document`], applies every removal in
//! list order, collapses comma artifacts, then writes the buffer back in one
//! call. Any failure before the write leaves the original file untouched.

use crate::prune::document::Document;
use std::fs;
use std::path::Path;

/// Error that can occur during a prune run.
#[derive(Debug, Clone)]
pub enum PruneError {
    /// IO error when reading or writing the data file
    Io(String),
    /// A target identifier produced an invalid search pattern
    Pattern(String),
}

impl std::fmt::Display for PruneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneError::Io(msg) => write!(f, "IO error: {}", msg),
            PruneError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for PruneError {}

impl From<std::io::Error> for PruneError {
    fn from(err: std::io::Error) -> Self {
        PruneError::Io(err.to_string())
    }
}

impl From<regex::Error> for PruneError {
    fn from(err: regex::Error) -> Self {
        PruneError::Pattern(err.to_string())
    }
}

/// Knobs for a single run.
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Report what would change without writing the file back.
    pub dry_run: bool,
}

/// Outcome counts reported to the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub removed: usize,
    pub not_found: usize,
}

/// Runs the full cycle against `path`, removing every entry whose id is in
/// `ids`.
///
/// Finding zero entries is still success; only read/write or pattern
/// failures abort the run. Progress is reported line by line on stdout.
pub fn prune_file(
    path: &Path,
    ids: &[&str],
    options: &PruneOptions,
) -> Result<PruneSummary, PruneError> {
    println!(
        "🧹 Starting removal of problematic parks from {}...",
        path.display()
    );

    let mut document = Document::new(fs::read_to_string(path)?);
    let mut summary = PruneSummary::default();

    for id in ids {
        match document.remove_entry(id)? {
            Some(entry) => {
                println!("❌ Removing: {} ({})", entry.name, entry.city);
                summary.removed += 1;
            }
            None => {
                println!("⚠️  Park with ID {} not found", id);
                summary.not_found += 1;
            }
        }
    }

    document.collapse_double_commas();

    if options.dry_run {
        println!(
            "✅ Dry run: {} parks would be removed from the database",
            summary.removed
        );
    } else {
        fs::write(path, document.as_str())?;
        println!(
            "✅ Successfully removed {} parks from the database!",
            summary.removed
        );
    }

    Ok(summary)
}
