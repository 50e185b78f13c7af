//! Substitution entries and the file families derived from them
//!
//! An entry names a directory and a base file name. Every entry maps to exactly
//! three paths:
//!
//! | Role | Path |
//! |---|---|
//! | original | `<dir>/<name>.js` |
//! | parked | `<dir>/__<name>.js` |
//! | minified | `<dir>/<name>.min.js` |
//!
//! # Examples
//!
//! ```
//! use usemin::swap::FileFamily;
//! use std::path::Path;
//!
//! let family = FileFamily::new("lib", "p5");
//! assert_eq!(family.original, Path::new("lib/p5.js"));
//! assert_eq!(family.parked, Path::new("lib/__p5.js"));
//! assert_eq!(family.minified, Path::new("lib/p5.min.js"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::infra::FileSystem;

use super::report::SkipReason;

/// Prefix given to the original file while it is parked
pub const PARKED_PREFIX: &str = "__";

/// Extension of the original (active) file
pub const SCRIPT_EXTENSION: &str = ".js";

/// Extension of the minified artifact
pub const MINIFIED_EXTENSION: &str = ".min.js";

/// Deserialize an explicit `null` the same way as an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One candidate file family, as supplied by the caller
///
/// Empty strings stand for missing fields, and `null` counts as missing.
/// Missing fields are reported per entry when a pass runs, never when the
/// configuration is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    /// Directory containing the file family
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,

    /// Base file name, without extension
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename = "fileName",
        alias = "file-name",
        alias = "file_name"
    )]
    pub file_name: String,
}

impl SubstitutionEntry {
    /// Create an entry from a directory and a base file name
    pub fn new(path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
        }
    }
}

impl fmt::Display for SubstitutionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.path.is_empty(), self.file_name.is_empty()) {
            (false, false) => write!(f, "{}:{}", self.path, self.file_name),
            (true, false) => write!(f, "<no path>:{}", self.file_name),
            (false, true) => write!(f, "{}:<no fileName>", self.path),
            (true, true) => f.write_str("<empty entry>"),
        }
    }
}

/// Which member of a family a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// `<name>.js`
    Original,
    /// `__<name>.js`
    Parked,
    /// `<name>.min.js`
    Minified,
}

impl FileRole {
    /// Lowercase role name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Parked => "parked",
            Self::Minified => "minified",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append a trailing `/` unless the directory already ends with a separator
///
/// No other normalization happens: `..` is kept and symlinks are not resolved.
pub fn normalize_directory(directory: &str) -> String {
    if directory.ends_with('/') || directory.ends_with(std::path::MAIN_SEPARATOR) {
        directory.to_string()
    } else {
        format!("{}/", directory)
    }
}

/// The three concrete paths for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFamily {
    /// Active file, `<dir>/<name>.js`
    pub original: PathBuf,
    /// Original file while substituted, `<dir>/__<name>.js`
    pub parked: PathBuf,
    /// Minified artifact, `<dir>/<name>.min.js`
    pub minified: PathBuf,
}

impl FileFamily {
    /// Derive the family paths. Does not touch the filesystem.
    pub fn new(directory: &str, file_name: &str) -> Self {
        let dir = normalize_directory(directory);
        Self {
            original: PathBuf::from(format!("{dir}{file_name}{SCRIPT_EXTENSION}")),
            parked: PathBuf::from(format!(
                "{dir}{PARKED_PREFIX}{file_name}{SCRIPT_EXTENSION}"
            )),
            minified: PathBuf::from(format!("{dir}{file_name}{MINIFIED_EXTENSION}")),
        }
    }

    /// Validate an entry against the filesystem and derive its family
    ///
    /// Checks, in order: file name present, path present, directory exists.
    /// File presence is checked by the pass itself since the forward and
    /// reverse passes need different members.
    pub fn resolve<FS: FileSystem>(
        entry: &SubstitutionEntry,
        fs: &FS,
    ) -> Result<Self, SkipReason> {
        if entry.file_name.is_empty() {
            return Err(SkipReason::MissingFileName);
        }
        if entry.path.is_empty() {
            return Err(SkipReason::MissingPath);
        }
        if !fs.exists(Path::new(&entry.path)) {
            return Err(SkipReason::DirectoryNotFound(PathBuf::from(&entry.path)));
        }
        Ok(Self::new(&entry.path, &entry.file_name))
    }

    /// Path of the given member
    pub fn path(&self, role: FileRole) -> &Path {
        match role {
            FileRole::Original => &self.original,
            FileRole::Parked => &self.parked,
            FileRole::Minified => &self.minified,
        }
    }

    /// Fail with the first listed role whose file is absent
    pub fn require<FS: FileSystem>(&self, fs: &FS, roles: &[FileRole]) -> Result<(), SkipReason> {
        for &role in roles {
            let path = self.path(role);
            if !fs.exists(path) {
                return Err(SkipReason::FileNotFound {
                    role,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    /// Classify what is currently on disk for this family
    pub fn inspect<FS: FileSystem>(&self, fs: &FS) -> FamilyState {
        let original = fs.exists(&self.original);
        let parked = fs.exists(&self.parked);
        let minified = fs.exists(&self.minified);

        match (original, parked, minified) {
            (true, false, true) => FamilyState::Ready,
            (true, true, false) => FamilyState::Swapped,
            (false, true, _) => FamilyState::Interrupted,
            _ => FamilyState::Incomplete,
        }
    }
}

/// On-disk state of a file family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyState {
    /// Original and minified present, nothing parked
    Ready,
    /// Minified file is active, original parked
    Swapped,
    /// Original parked but nothing active: a rename pair was cut short
    Interrupted,
    /// Any other combination, typically a missing minified build
    Incomplete,
}

impl FamilyState {
    /// Short lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Swapped => "swapped",
            Self::Interrupted => "interrupted",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for FamilyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::RealFileSystem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_family_paths_are_exact() {
        let family = FileFamily::new("lib", "p5");
        assert_eq!(family.original, Path::new("lib/p5.js"));
        assert_eq!(family.parked, Path::new("lib/__p5.js"));
        assert_eq!(family.minified, Path::new("lib/p5.min.js"));
    }

    #[test]
    fn test_trailing_separator_is_not_doubled() {
        assert_eq!(normalize_directory("lib"), "lib/");
        assert_eq!(normalize_directory("lib/"), "lib/");
        assert_eq!(
            FileFamily::new("lib/", "p5"),
            FileFamily::new("lib", "p5")
        );
    }

    #[test]
    fn test_normalize_keeps_parent_components() {
        assert_eq!(normalize_directory("../vendor"), "../vendor/");
        assert_eq!(
            FileFamily::new("a/../b", "x").original,
            Path::new("a/../b/x.js")
        );
    }

    #[test]
    fn test_entry_deserializes_camel_case_and_aliases() {
        let entry: SubstitutionEntry =
            serde_json::from_str(r#"{"path": "lib", "fileName": "p5"}"#).unwrap();
        assert_eq!(entry, SubstitutionEntry::new("lib", "p5"));

        let entry: SubstitutionEntry =
            serde_json::from_str(r#"{"path": "lib", "file-name": "p5"}"#).unwrap();
        assert_eq!(entry.file_name, "p5");
    }

    #[test]
    fn test_entry_with_missing_fields_deserializes_to_empty() {
        let entry: SubstitutionEntry = serde_json::from_str("{}").unwrap();
        assert!(entry.path.is_empty());
        assert!(entry.file_name.is_empty());
    }

    #[test]
    fn test_entry_with_null_fields_deserializes_to_empty() {
        let entry: SubstitutionEntry =
            serde_json::from_str(r#"{"path": null, "fileName": null}"#).unwrap();
        assert_eq!(entry, SubstitutionEntry::default());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(SubstitutionEntry::new("lib", "p5").to_string(), "lib:p5");
        assert_eq!(SubstitutionEntry::new("", "").to_string(), "<empty entry>");
    }

    #[test]
    fn test_resolve_checks_file_name_first() {
        let entry = SubstitutionEntry::new("", "");
        let result = FileFamily::resolve(&entry, &RealFileSystem);
        assert!(matches!(result, Err(SkipReason::MissingFileName)));
    }

    #[test]
    fn test_resolve_rejects_missing_path() {
        let entry = SubstitutionEntry::new("", "p5");
        let result = FileFamily::resolve(&entry, &RealFileSystem);
        assert!(matches!(result, Err(SkipReason::MissingPath)));
    }

    #[test]
    fn test_resolve_rejects_nonexistent_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let entry = SubstitutionEntry::new(missing.to_string_lossy(), "p5");

        match FileFamily::resolve(&entry, &RealFileSystem) {
            Err(SkipReason::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected DirectoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_require_reports_first_missing_role() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_string_lossy().to_string();
        let family = FileFamily::new(&dir, "p5");
        fs::write(&family.original, "orig").unwrap();

        let result = family.require(&RealFileSystem, &[FileRole::Original, FileRole::Minified]);
        match result {
            Err(SkipReason::FileNotFound { role, path }) => {
                assert_eq!(role, FileRole::Minified);
                assert_eq!(path, family.minified);
            }
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_inspect_classifies_states() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_string_lossy().to_string();
        let family = FileFamily::new(&dir, "p5");
        let fs_impl = RealFileSystem;

        assert_eq!(family.inspect(&fs_impl), FamilyState::Incomplete);

        fs::write(&family.original, "orig").unwrap();
        fs::write(&family.minified, "min").unwrap();
        assert_eq!(family.inspect(&fs_impl), FamilyState::Ready);

        fs::rename(&family.original, &family.parked).unwrap();
        assert_eq!(family.inspect(&fs_impl), FamilyState::Interrupted);

        fs::rename(&family.minified, &family.original).unwrap();
        assert_eq!(family.inspect(&fs_impl), FamilyState::Swapped);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_family_members_share_directory(
            dir in "[a-z][a-z0-9_]{0,8}(/[a-z0-9_]{1,8}){0,3}",
            name in "[a-zA-Z][a-zA-Z0-9_-]{0,12}",
        ) {
            let family = FileFamily::new(&dir, &name);
            let parent = Path::new(&dir);

            prop_assert_eq!(family.original.parent(), Some(parent));
            prop_assert_eq!(family.parked.parent(), Some(parent));
            prop_assert_eq!(family.minified.parent(), Some(parent));

            prop_assert_eq!(
                family.parked.file_name().unwrap().to_string_lossy().to_string(),
                format!("__{}.js", name)
            );
            prop_assert_eq!(
                family.minified.file_name().unwrap().to_string_lossy().to_string(),
                format!("{}.min.js", name)
            );
        }

        #[test]
        fn prop_normalize_is_idempotent(dir in "[a-z/]{1,16}") {
            let once = normalize_directory(&dir);
            prop_assert_eq!(normalize_directory(&once), once.clone());
            prop_assert!(once.ends_with('/'));
        }
    }
}
