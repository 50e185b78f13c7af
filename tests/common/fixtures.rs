//! Test fixture helpers for creating projects with file families
//!
//! A family on disk starts as `name.js` holding "source:<name>" and
//! `name.min.js` holding "minified:<name>", so tests can tell at any point
//! which file ended up where.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use usemin::swap::SubstitutionEntry;

/// Temporary project directory; removed on drop
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Create an empty project
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Project root
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create `dir/name.js` and `dir/name.min.js`
    pub fn family(&self, dir: &str, name: &str) -> Family {
        let family = self.empty_family(dir, name);
        fs::write(family.original(), source_of(name)).expect("Failed to write original");
        fs::write(family.minified(), minified_of(name)).expect("Failed to write minified");
        family
    }

    /// Create `dir/name.js` without a minified build
    pub fn unminified_family(&self, dir: &str, name: &str) -> Family {
        let family = self.empty_family(dir, name);
        fs::write(family.original(), source_of(name)).expect("Failed to write original");
        family
    }

    /// Create only the directory
    pub fn empty_family(&self, dir: &str, name: &str) -> Family {
        let directory = self.root().join(dir);
        fs::create_dir_all(&directory).expect("Failed to create family directory");
        Family {
            directory,
            name: name.to_string(),
        }
    }

    /// Write a `.usemin.json` with the given body
    pub fn write_json_config(&self, body: &str) {
        fs::write(self.root().join(".usemin.json"), body).expect("Failed to write config");
    }

    /// Write a `.usemin.toml` with the given body
    pub fn write_toml_config(&self, body: &str) {
        fs::write(self.root().join(".usemin.toml"), body).expect("Failed to write config");
    }
}

/// A family's files inside a [`Project`]
pub struct Family {
    directory: PathBuf,
    name: String,
}

impl Family {
    /// Config entry for this family, using an absolute path
    pub fn entry(&self) -> SubstitutionEntry {
        SubstitutionEntry::new(self.directory.to_string_lossy(), self.name.as_str())
    }

    /// TOML inline table for this family
    pub fn toml_entry(&self) -> String {
        format!(
            "{{ path = {:?}, fileName = {:?} }}",
            self.directory.to_string_lossy(),
            self.name
        )
    }

    pub fn original(&self) -> PathBuf {
        self.directory.join(format!("{}.js", self.name))
    }

    pub fn parked(&self) -> PathBuf {
        self.directory.join(format!("__{}.js", self.name))
    }

    pub fn minified(&self) -> PathBuf {
        self.directory.join(format!("{}.min.js", self.name))
    }

    /// Original in place, minified beside it, nothing parked
    pub fn assert_ready(&self) {
        assert_eq!(read(&self.original()), source_of(&self.name));
        assert_eq!(read(&self.minified()), minified_of(&self.name));
        assert!(!self.parked().exists(), "{} should not exist", self.parked().display());
    }

    /// Minified content active, original parked, no minified file
    pub fn assert_swapped(&self) {
        assert_eq!(read(&self.original()), minified_of(&self.name));
        assert_eq!(read(&self.parked()), source_of(&self.name));
        assert!(!self.minified().exists(), "{} should not exist", self.minified().display());
    }
}

pub fn source_of(name: &str) -> String {
    format!("source:{name}")
}

pub fn minified_of(name: &str) -> String {
    format!("minified:{name}")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
