#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! usemin library
//!
//! Swaps minified JavaScript files in for their unminified originals for the
//! duration of a build, then puts everything back. Each configured entry
//! names a directory and a base name; together they identify a file family:
//!
//! | role      | path                |
//! |-----------|---------------------|
//! | original  | `dir/name.js`       |
//! | parked    | `dir/__name.js`     |
//! | minified  | `dir/name.min.js`   |
//!
//! # Basic Example
//!
//! Running both passes directly:
//!
//! ```
//! use usemin::swap::{SubstitutionEntry, SwapManager};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let workspace = TempDir::new().unwrap();
//! let dir = workspace.path();
//! fs::write(dir.join("p5.js"), "source").unwrap();
//! fs::write(dir.join("p5.min.js"), "minified").unwrap();
//!
//! let entries = vec![SubstitutionEntry::new(dir.to_string_lossy(), "p5")];
//! let mut manager = SwapManager::new(true);
//!
//! let report = manager.begin_substitution(&entries);
//! assert_eq!(report.applied_count(), 1);
//! assert_eq!(fs::read_to_string(dir.join("p5.js")).unwrap(), "minified");
//!
//! manager.end_substitution(&entries);
//! assert_eq!(fs::read_to_string(dir.join("p5.js")).unwrap(), "source");
//! assert!(!dir.join("__p5.js").exists());
//! ```
//!
//! # Advanced Example: Wrapping a Build
//!
//! Registering the hooks with a runner that executes a build command:
//!
//! ```no_run
//! use usemin::config::SwapOptions;
//! use usemin::lifecycle::SwapPlugin;
//! use usemin::pipeline::{BuildCommand, BuildRunner};
//! use usemin::swap::SubstitutionEntry;
//!
//! let mut options = SwapOptions::default();
//! options.entries.push(SubstitutionEntry::new("node_modules/p5/lib", "p5"));
//!
//! let mut runner = BuildRunner::new();
//! SwapPlugin::new(options).apply(&mut runner);
//!
//! let command = BuildCommand::from_argv(&["npm".into(), "run".into(), "build".into()])?;
//! let outcome = runner.run(&command);
//! assert!(outcome.succeeded());
//! # Ok::<(), usemin::pipeline::PipelineError>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Options and config file loading
pub mod config;
/// Top-level error type with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Build-tool lifecycle adapter
pub mod lifecycle;
/// Build command runner
pub mod pipeline;
/// File family naming and the swap/restore passes
pub mod swap;
