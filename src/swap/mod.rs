//! Swap/restore state machine for minified file substitution
//!
//! This module provides:
//! - [`SubstitutionEntry`] and [`FileFamily`]: naming convention and validation
//! - [`SwapManager`]: the forward and reverse rename passes
//! - [`SwapReport`]: per-entry outcomes of a pass

pub mod error;
pub mod family;
pub mod manager;
pub mod report;

pub use error::SwapError;
pub use family::{FamilyState, FileFamily, FileRole, SubstitutionEntry};
pub use manager::SwapManager;
pub use report::{Direction, EntryOutcome, EntryReport, SkipReason, SwapReport};
