//! Command handlers for the usemin CLI
//!
//! Each submodule handles one CLI command. Shared pieces (option loading and
//! report presentation) live here.

pub mod completions;
pub mod init;
pub mod passes;
pub mod run;
pub mod status;

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use crate::config::{ConfigLoader, SwapOptions};
use crate::error::UseminError;
use crate::fmt::{count_noun, icon, CHECKMARK, CROSSMARK};
use crate::swap::{Direction, SwapReport};

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use passes::{cmd_restore, cmd_swap};
pub use run::cmd_run;
pub use status::cmd_status;

/// Settings shared by every command, taken from global CLI flags
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Project directory; config files are looked up here
    pub project_root: Option<PathBuf>,
    /// Explicit config file instead of `.usemin.toml` / `.usemin.json`
    pub config_path: Option<PathBuf>,
    /// Force `no-logs` on, whatever the config says
    pub no_logs: bool,
    /// Print machine-readable JSON instead of styled text
    pub json: bool,
}

impl CommandContext {
    /// Directory commands operate in
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.project_root {
            Some(root) => Ok(root.clone()),
            None => Ok(env::current_dir()?),
        }
    }

    /// Load options and apply flag overrides
    pub fn load_options(&self) -> Result<SwapOptions> {
        let mut options = match &self.config_path {
            Some(path) => ConfigLoader::load_file(path),
            None => ConfigLoader::load(&self.project_root()?),
        }
        .map_err(UseminError::from)?;

        options.no_logs |= self.no_logs;
        Ok(options)
    }
}

/// Print a one-line summary of a pass
///
/// Per-entry detail is not repeated here: the pass itself logs every rename
/// and skip (unless `no-logs` is set) and always logs rename failures.
pub(crate) fn present_summary(report: &SwapReport) {
    let verb = match report.direction {
        Direction::Substitute => "Substituted",
        Direction::Restore => "Restored",
    };
    let marker = if report.failed_count() > 0 {
        icon(CROSSMARK)
    } else {
        icon(CHECKMARK)
    };

    println!(
        "   {} {} {}, {} skipped, {} failed",
        marker,
        verb,
        count_noun(report.applied_count(), "entry", "entries"),
        report.skipped_count(),
        report.failed_count()
    );
}

/// Turn a report with rename failures into an error
pub(crate) fn ensure_no_failures(report: &SwapReport) -> Result<(), UseminError> {
    let failed = report.failed_count();
    if failed == 0 {
        return Ok(());
    }
    Err(UseminError::PassFailed {
        pass: report.direction.as_str(),
        failed,
        half_swapped: report.half_swapped().count(),
    })
}
