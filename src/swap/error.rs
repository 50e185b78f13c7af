//! Errors raised by the rename pair of a single entry

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failure while swapping or restoring one entry
///
/// These never abort a batch; they are recorded in the entry's outcome.
#[derive(Error, Debug)]
pub enum SwapError {
    /// The first rename of the pair failed; nothing was changed
    #[error("failed to rename {} to {}", .from.display(), .to.display())]
    Rename {
        /// Source path
        from: PathBuf,
        /// Destination path
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The second rename failed after the first succeeded
    ///
    /// The family is left in an intermediate state and needs manual attention.
    #[error(
        "failed to rename {} to {} after {} was already moved",
        .from.display(),
        .to.display(),
        .moved.display()
    )]
    HalfSwapped {
        /// Path that was already moved by the first rename
        moved: PathBuf,
        /// Source path of the failed rename
        from: PathBuf,
        /// Destination path of the failed rename
        to: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl SwapError {
    /// True if the family was left between the two renames
    pub fn is_half_swapped(&self) -> bool {
        matches!(self, Self::HalfSwapped { .. })
    }
}
