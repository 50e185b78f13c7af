//! Per-entry outcomes collected into a batch report

use serde_json::{json, Value};
use std::fmt;
use std::path::PathBuf;

use super::error::SwapError;
use super::family::{FileFamily, FileRole, SubstitutionEntry};

/// Which pass produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward pass: minified file becomes the active file
    Substitute,
    /// Reverse pass: original file becomes active again
    Restore,
}

impl Direction {
    /// Lowercase name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substitute => "substitute",
            Self::Restore => "restore",
        }
    }
}

/// Why an entry was left untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `fileName` was empty or absent
    MissingFileName,
    /// `path` was empty or absent
    MissingPath,
    /// `path` does not exist
    DirectoryNotFound(PathBuf),
    /// A family member required by the pass is absent
    FileNotFound {
        /// Which member is missing
        role: FileRole,
        /// Its path
        path: PathBuf,
    },
    /// A parked original is already present; renaming onto it would destroy it
    ParkedExists(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFileName => f.write_str("fileName property not provided for the entry"),
            Self::MissingPath => f.write_str("path property not provided for the entry"),
            Self::DirectoryNotFound(path) => write!(f, "path '{}' can't be found", path.display()),
            Self::FileNotFound { role, path } => {
                write!(f, "{} file '{}' doesn't exist", role, path.display())
            }
            Self::ParkedExists(path) => write!(
                f,
                "parked file '{}' already exists; restore it before substituting again",
                path.display()
            ),
        }
    }
}

/// Result of processing one entry
#[derive(Debug)]
pub enum EntryOutcome {
    /// Both renames succeeded
    Applied(FileFamily),
    /// Validation failed, nothing was touched
    Skipped(SkipReason),
    /// A rename failed
    Failed(SwapError),
}

impl EntryOutcome {
    /// Short label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied(_) => "applied",
            Self::Skipped(_) => "skipped",
            Self::Failed(_) => "failed",
        }
    }
}

/// One entry and what happened to it
#[derive(Debug)]
pub struct EntryReport {
    /// The entry as configured
    pub entry: SubstitutionEntry,
    /// What the pass did with it
    pub outcome: EntryOutcome,
}

/// Outcomes of one pass over all entries, in entry order
#[derive(Debug)]
pub struct SwapReport {
    /// Pass that produced this report
    pub direction: Direction,
    /// Per-entry results
    pub entries: Vec<EntryReport>,
}

impl SwapReport {
    /// Empty report for the given pass
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: &SubstitutionEntry, outcome: EntryOutcome) {
        self.entries.push(EntryReport {
            entry: entry.clone(),
            outcome,
        });
    }

    /// Number of entries whose renames both succeeded
    pub fn applied_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Applied(_)))
    }

    /// Number of entries skipped by validation
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped(_)))
    }

    /// Number of entries with a rename failure
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    /// True if this is a forward pass that swapped at least one entry
    ///
    /// The orchestrator uses this to decide whether to schedule the reverse pass.
    pub fn did_swap_any(&self) -> bool {
        self.direction == Direction::Substitute && self.applied_count() > 0
    }

    /// Failures that left a family between its two renames
    pub fn half_swapped(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries
            .iter()
            .filter(|e| matches!(&e.outcome, EntryOutcome::Failed(err) if err.is_half_swapped()))
    }

    /// Machine-readable form for `--json` output
    pub fn to_json(&self) -> Value {
        let entries: Vec<Value> = self
            .entries
            .iter()
            .map(|e| {
                let detail = match &e.outcome {
                    EntryOutcome::Applied(family) => json!({
                        "original": family.original,
                        "parked": family.parked,
                        "minified": family.minified,
                    }),
                    EntryOutcome::Skipped(reason) => json!({ "reason": reason.to_string() }),
                    EntryOutcome::Failed(err) => json!({
                        "error": err.to_string(),
                        "half_swapped": err.is_half_swapped(),
                    }),
                };
                json!({
                    "path": e.entry.path,
                    "fileName": e.entry.file_name,
                    "outcome": e.outcome.label(),
                    "detail": detail,
                })
            })
            .collect();

        json!({
            "direction": self.direction.as_str(),
            "applied": self.applied_count(),
            "skipped": self.skipped_count(),
            "failed": self.failed_count(),
            "entries": entries,
        })
    }
}
