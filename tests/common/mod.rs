//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Project fixtures with file families on disk
//! - Assertions about which member holds which content
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::*;
//!
//! fn test_round_trip() {
//!     let project = Project::new();
//!     let lib = project.family("lib", "p5");
//!     lib.assert_ready();
//! }
//! ```

pub mod fixtures;
