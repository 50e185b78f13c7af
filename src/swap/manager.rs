//! Forward and reverse substitution passes
//!
//! [`SwapManager`] renames `<name>.js` out of the way and puts `<name>.min.js`
//! in its place before a build, and undoes that afterwards. Each entry is
//! handled independently: a missing directory or file skips that entry only,
//! and a failed rename is recorded and the batch moves on.
//!
//! The two renames of a pair are not atomic. If the process dies between them
//! the family is left half swapped; see [`FamilyState::Interrupted`].
//!
//! # Examples
//!
//! ```no_run
//! use usemin::swap::{SubstitutionEntry, SwapManager};
//!
//! let entries = vec![SubstitutionEntry::new("node_modules/p5/lib", "p5")];
//! let mut manager = SwapManager::new(false);
//!
//! let report = manager.begin_substitution(&entries);
//! // ... run the build ...
//! if report.did_swap_any() {
//!     manager.end_substitution(&entries);
//! }
//! ```
//!
//! [`FamilyState::Interrupted`]: super::FamilyState::Interrupted

use log::{error, info, warn};
use std::path::Path;

use crate::infra::{FileSystem, RealFileSystem};

use super::error::SwapError;
use super::family::{FileFamily, FileRole, SubstitutionEntry};
use super::report::{Direction, EntryOutcome, SkipReason, SwapReport};

/// Owns the substitution state for one build cycle
pub struct SwapManager<FS: FileSystem = RealFileSystem> {
    fs: FS,
    no_logs: bool,
    substitution_active: bool,
}

impl SwapManager<RealFileSystem> {
    /// Create a manager over the real filesystem
    ///
    /// `no_logs` silences info and warning logs. Rename failures are always logged.
    pub fn new(no_logs: bool) -> Self {
        Self::with_fs(RealFileSystem, no_logs)
    }
}

impl<FS: FileSystem> SwapManager<FS> {
    /// Create a manager with a custom filesystem implementation
    pub fn with_fs(fs: FS, no_logs: bool) -> Self {
        Self {
            fs,
            no_logs,
            substitution_active: false,
        }
    }

    /// True between a forward pass that swapped something and the next reverse pass
    pub fn is_substitution_active(&self) -> bool {
        self.substitution_active
    }

    /// Swap every valid entry's minified file into the active slot
    ///
    /// For each entry: `<name>.js -> __<name>.js`, then `<name>.min.js -> <name>.js`.
    /// Requires the directory, the original and the minified file to exist,
    /// and the parked slot to be free.
    pub fn begin_substitution(&mut self, entries: &[SubstitutionEntry]) -> SwapReport {
        let mut report = SwapReport::new(Direction::Substitute);

        for entry in entries {
            let outcome = match self
                .prepare(entry, &[FileRole::Original, FileRole::Minified])
                .and_then(|family| self.ensure_parked_free(family))
            {
                Ok(family) => self.swap_pair(
                    family,
                    (FileRole::Original, FileRole::Parked),
                    (FileRole::Minified, FileRole::Original),
                ),
                Err(reason) => EntryOutcome::Skipped(reason),
            };

            if matches!(outcome, EntryOutcome::Applied(_)) {
                self.substitution_active = true;
            }
            report.push(entry, outcome);
        }

        report
    }

    /// Put every swapped entry back the way it was
    ///
    /// For each entry: `<name>.js -> <name>.min.js`, then `__<name>.js -> <name>.js`.
    /// Requires the directory, the active file and the parked file to exist, so
    /// entries that were never swapped are skipped without touching anything.
    pub fn end_substitution(&mut self, entries: &[SubstitutionEntry]) -> SwapReport {
        let mut report = SwapReport::new(Direction::Restore);

        for entry in entries {
            let outcome = match self.prepare(entry, &[FileRole::Original, FileRole::Parked]) {
                Ok(family) => self.swap_pair(
                    family,
                    (FileRole::Original, FileRole::Minified),
                    (FileRole::Parked, FileRole::Original),
                ),
                Err(reason) => EntryOutcome::Skipped(reason),
            };
            report.push(entry, outcome);
        }

        self.substitution_active = false;
        report
    }

    fn prepare(
        &self,
        entry: &SubstitutionEntry,
        required: &[FileRole],
    ) -> Result<FileFamily, SkipReason> {
        let result = FileFamily::resolve(entry, &self.fs)
            .and_then(|family| family.require(&self.fs, required).map(|()| family));

        if let Err(reason) = &result {
            if !self.no_logs {
                warn!("{}. Moving to the next entry.", reason);
            }
        }
        result
    }

    fn ensure_parked_free(&self, family: FileFamily) -> Result<FileFamily, SkipReason> {
        if !self.fs.exists(&family.parked) {
            return Ok(family);
        }
        let reason = SkipReason::ParkedExists(family.parked);
        if !self.no_logs {
            warn!("{}. Moving to the next entry.", reason);
        }
        Err(reason)
    }

    fn swap_pair(
        &self,
        family: FileFamily,
        first: (FileRole, FileRole),
        second: (FileRole, FileRole),
    ) -> EntryOutcome {
        let (from, to) = (family.path(first.0), family.path(first.1));
        if let Err(source) = self.rename(from, to) {
            let err = SwapError::Rename {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            };
            error!("{}: {}", err, error_source(&err));
            return EntryOutcome::Failed(err);
        }

        let moved = from.to_path_buf();
        let (from, to) = (family.path(second.0), family.path(second.1));
        if let Err(source) = self.rename(from, to) {
            let err = SwapError::HalfSwapped {
                moved,
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            };
            error!("{}: {}", err, error_source(&err));
            return EntryOutcome::Failed(err);
        }

        EntryOutcome::Applied(family)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        if !self.no_logs {
            info!("Changing {} to {}", from.display(), to.display());
        }
        self.fs.rename(from, to)
    }
}

fn error_source(err: &SwapError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_default()
}
