//! Infrastructure traits for abstracting I/O operations.
//!
//! This module provides trait abstractions for filesystem and command execution operations,
//! so the swap passes and the build runner can be exercised against mocks in tests.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Trait for abstracting filesystem operations.
///
/// The swap passes only ever need metadata operations (existence checks and
/// renames). Reading and writing whole files is used by the config loader.
pub trait FileSystem {
    /// Returns true if anything (file, directory, or symlink target) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Rename a file, replacing `to` if it already exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

impl<T: FileSystem> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// Trait for abstracting command execution.
///
/// Lets the build runner be tested without spawning the real build tool.
pub trait CommandExecutor {
    /// Execute a command and return its exit status.
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus>;

    /// Execute a command built with a closure and return its exit status.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use usemin::infra::{CommandExecutor, RealCommandExecutor};
    ///
    /// let executor = RealCommandExecutor;
    /// let status = executor.run(|cmd| cmd.arg("run").arg("build"), "npm")?;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    fn run<F>(&self, builder: F, program: &str) -> io::Result<ExitStatus>
    where
        F: FnOnce(&mut Command) -> &mut Command,
    {
        let mut cmd = Command::new(program);
        builder(&mut cmd);
        self.status(&mut cmd)
    }
}

/// Real command executor that delegates to std::process::Command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn status(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        cmd.status()
    }
}

/// Create an ExitStatus with the given exit code for use in test mocks.
///
/// This avoids spawning actual processes (like `Command::new("true")`) in tests.
#[cfg(all(test, unix))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8) // Unix stores exit code in upper bits
}

#[cfg(all(test, windows))]
pub fn mock_exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
