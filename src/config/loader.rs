//! Configuration file loading and saving

use super::error::ConfigError;
use super::file::{SwapOptions, CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load options from `.usemin.toml` (or `.usemin.json`) in the given directory
    ///
    /// Returns default options if neither file exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use usemin::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let options = ConfigLoader::load(Path::new("."))?;
    /// println!("{} entries configured", options.entries.len());
    /// # Ok::<(), usemin::config::ConfigError>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<SwapOptions, ConfigError> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load options with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        project_root: &Path,
        fs: &FS,
    ) -> Result<SwapOptions, ConfigError> {
        for name in [CONFIG_FILE_NAME, JSON_CONFIG_FILE_NAME] {
            let path = project_root.join(name);

            // Read directly instead of checking existence first
            match fs.read_to_string(&path) {
                Ok(contents) => return Self::parse(&path, &contents),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ConfigError::Io { path, source: e }),
            }
        }

        Ok(SwapOptions::default())
    }

    /// Load options from an explicit file; a missing file is an error
    pub fn load_file(path: &Path) -> Result<SwapOptions, ConfigError> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load an explicit file with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(
        path: &Path,
        fs: &FS,
    ) -> Result<SwapOptions, ConfigError> {
        let contents = fs.read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(path, &contents)
    }

    /// Parse file contents, picking the format from the extension
    fn parse(path: &Path, contents: &str) -> Result<SwapOptions, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let value: serde_json::Value =
                serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
                    origin: path.display().to_string(),
                    message: e.to_string(),
                })?;
            SwapOptions::from_value(value)
        } else {
            toml_edit::de::from_str(contents).map_err(|e| ConfigError::Parse {
                origin: path.display().to_string(),
                message: e.to_string(),
            })
        }
    }

    /// Save options to `.usemin.toml` in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use usemin::config::{ConfigLoader, SwapOptions};
    /// use usemin::swap::SubstitutionEntry;
    /// use std::path::Path;
    ///
    /// let mut options = SwapOptions::default();
    /// options.entries.push(SubstitutionEntry::new("node_modules/p5/lib", "p5"));
    /// ConfigLoader::save(&options, Path::new("."))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(options: &SwapOptions, project_root: &Path) -> Result<()> {
        Self::save_with_fs(options, project_root, &RealFileSystem)
    }

    /// Save options with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        options: &SwapOptions,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(options).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .usemin.toml")?;

        Ok(())
    }

    /// Check if a config file exists in the project
    pub fn exists(project_root: &Path) -> bool {
        project_root.join(CONFIG_FILE_NAME).exists()
            || project_root.join(JSON_CONFIG_FILE_NAME).exists()
    }
}
