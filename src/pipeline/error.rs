//! Error types for the build runner

use thiserror::Error;

/// Errors that can occur while running the wrapped build command
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No build command was given
    #[error("No build command given")]
    EmptyCommand,

    /// The build command could not be started
    #[error("Failed to start build command '{program}'")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The build command ran and exited unsuccessfully
    #[error("Build command '{program}' failed{}", .code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    BuildFailed {
        /// Program that failed
        program: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
    },
}
