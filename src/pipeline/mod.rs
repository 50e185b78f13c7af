//! Build runner module
//!
//! Wraps an external build command with the lifecycle notifications:
//! 1. before-build hooks (forward substitution)
//! 2. the build command itself
//! 3. after-build hooks (reverse substitution), regardless of the build outcome

pub mod error;
pub mod runner;

pub use error::PipelineError;
pub use runner::{BuildCommand, BuildRunner, RunOutcome};
