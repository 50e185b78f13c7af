//! Build-tool lifecycle adapter
//!
//! A host build tool only ever sees two calls, [`BuildLifecycle::before_build`]
//! and [`BuildLifecycle::after_build`], however its own hook registration API
//! looks. [`SwapPlugin`] turns [`SwapOptions`] into such a pair and registers it
//! with a [`HookRegistry`], or registers nothing at all when disabled.
//!
//! # Examples
//!
//! ```no_run
//! use usemin::config::SwapOptions;
//! use usemin::lifecycle::{BuildLifecycle, HookRegistry, SwapPlugin};
//! use usemin::swap::SubstitutionEntry;
//!
//! #[derive(Default)]
//! struct Host(Vec<Box<dyn BuildLifecycle>>);
//!
//! impl HookRegistry for Host {
//!     fn tap(&mut self, _name: &str, hooks: Box<dyn BuildLifecycle>) {
//!         self.0.push(hooks);
//!     }
//! }
//!
//! let mut options = SwapOptions::default();
//! options.entries.push(SubstitutionEntry::new("node_modules/p5/lib", "p5"));
//!
//! let mut host = Host::default();
//! SwapPlugin::new(options).apply(&mut host);
//!
//! for hooks in &mut host.0 {
//!     hooks.before_build();
//! }
//! // ... compile ...
//! for hooks in &mut host.0 {
//!     hooks.after_build();
//! }
//! ```

use serde_json::Value;

use crate::config::{ConfigError, SwapOptions};
use crate::infra::{FileSystem, RealFileSystem};
use crate::swap::{SubstitutionEntry, SwapManager, SwapReport};

/// Name hooks are registered under
pub const PLUGIN_NAME: &str = "usemin";

/// The two notifications a build tool delivers
pub trait BuildLifecycle {
    /// Called once before the build step
    fn before_build(&mut self) -> SwapReport;

    /// Called once after the build step, whether or not it succeeded
    ///
    /// Returns `None` when there was nothing to undo.
    fn after_build(&mut self) -> Option<SwapReport>;
}

/// Something that accepts lifecycle hooks
pub trait HookRegistry {
    /// Register a hook pair under a name
    fn tap(&mut self, name: &str, hooks: Box<dyn BuildLifecycle>);
}

/// Lifecycle hooks that drive a [`SwapManager`] over a fixed entry list
pub struct SwapHooks<FS: FileSystem = RealFileSystem> {
    manager: SwapManager<FS>,
    entries: Vec<SubstitutionEntry>,
}

impl<FS: FileSystem> SwapHooks<FS> {
    /// Create hooks over the given manager and entries
    pub fn new(manager: SwapManager<FS>, entries: Vec<SubstitutionEntry>) -> Self {
        Self { manager, entries }
    }

    /// True while a forward pass is waiting to be undone
    pub fn is_substitution_active(&self) -> bool {
        self.manager.is_substitution_active()
    }
}

impl<FS: FileSystem> BuildLifecycle for SwapHooks<FS> {
    fn before_build(&mut self) -> SwapReport {
        self.manager.begin_substitution(&self.entries)
    }

    fn after_build(&mut self) -> Option<SwapReport> {
        // Nothing was swapped (or the build failed before we ran): leave the files alone
        if !self.is_substitution_active() {
            return None;
        }
        Some(self.manager.end_substitution(&self.entries))
    }
}

/// Validated options ready to be attached to a build
#[derive(Debug, Clone)]
pub struct SwapPlugin {
    options: SwapOptions,
}

impl SwapPlugin {
    /// Create a plugin from typed options
    pub fn new(options: SwapOptions) -> Self {
        Self { options }
    }

    /// Create a plugin from an untyped options object
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPlainObject`] unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        SwapOptions::from_value(value).map(Self::new)
    }

    /// Options this plugin was built with
    pub fn options(&self) -> &SwapOptions {
        &self.options
    }

    /// Build hooks over the real filesystem, or `None` when disabled
    pub fn hooks(&self) -> Option<SwapHooks> {
        self.hooks_with_fs(RealFileSystem)
    }

    /// Build hooks over a custom filesystem, or `None` when disabled
    pub fn hooks_with_fs<FS: FileSystem>(&self, fs: FS) -> Option<SwapHooks<FS>> {
        if self.options.disabled {
            return None;
        }
        Some(SwapHooks::new(
            SwapManager::with_fs(fs, self.options.no_logs),
            self.options.entries.clone(),
        ))
    }

    /// Register hooks with the host; registers nothing when disabled
    pub fn apply<R: HookRegistry + ?Sized>(&self, registry: &mut R) {
        if let Some(hooks) = self.hooks() {
            registry.tap(PLUGIN_NAME, Box::new(hooks));
        }
    }
}
