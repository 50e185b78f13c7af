//! Configuration for usemin
//!
//! This module provides:
//! - [`SwapOptions`]: entries, `disabled` and `no-logs`
//! - `.usemin.toml` / `.usemin.json` loading and saving
//! - [`ConfigError`] for the fatal, pre-build failures

pub mod error;
pub mod file;
pub mod loader;

pub use error::ConfigError;
pub use file::{SwapOptions, CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
