//! Error types with contextual suggestions for the CLI
//!
//! Provides a top-level error that includes:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for scripts and CI
//!
//! Per-entry problems during a pass are not errors at this level: they are
//! outcomes in a [`SwapReport`](crate::swap::SwapReport). Only configuration
//! problems, build command problems, and passes that left failures behind
//! reach the user as an error.

use thiserror::Error;

use crate::config::ConfigError;
use crate::pipeline::PipelineError;

/// usemin errors with contextual suggestions
#[derive(Error, Debug)]
pub enum UseminError {
    /// Options could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The wrapped build command failed or could not run
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A pass finished but some renames failed
    #[error("{failed} configured entries failed during {pass}")]
    PassFailed {
        /// Which pass ("substitute" or "restore")
        pass: &'static str,
        /// Number of entries whose renames failed
        failed: usize,
        /// How many of those were left between their two renames
        half_swapped: usize,
    },
}

impl UseminError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use usemin::error::UseminError;
    ///
    /// let error = UseminError::PassFailed {
    ///     pass: "substitute",
    ///     failed: 1,
    ///     half_swapped: 1,
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("usemin status"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(ConfigError::NotPlainObject { .. }) => Some(
                "Write the options as a table (TOML) or an object (JSON), e.g. \
                 entries = [{ path = \"lib\", fileName = \"p5\" }]"
                    .to_string(),
            ),
            Self::Config(ConfigError::Parse { .. }) => Some(
                "Check the config syntax; run 'usemin init' to see a working example".to_string(),
            ),
            Self::Config(ConfigError::Io { path, .. }) => Some(format!(
                "Check file permissions and that {} is accessible",
                path.display()
            )),
            Self::Pipeline(PipelineError::EmptyCommand) => {
                Some("Pass the build command after '--', e.g. usemin run -- npm run build".to_string())
            }
            Self::Pipeline(PipelineError::Spawn { program, .. }) => Some(format!(
                "Make sure '{}' is installed and on your PATH",
                program
            )),
            Self::Pipeline(PipelineError::BuildFailed { .. }) => Some(
                "Check the build output above; original files have been restored".to_string(),
            ),
            Self::PassFailed { half_swapped, .. } if *half_swapped > 0 => Some(
                "Some files were left between renames. Run 'usemin status' to find them \
                 and move them back by hand"
                    .to_string(),
            ),
            Self::PassFailed { .. } => Some(
                "Check permissions on the listed files; run 'usemin status' to see each entry"
                    .to_string(),
            ),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions where one applies. A failed build
    /// command passes its own exit code through.
    ///
    /// # Examples
    ///
    /// ```
    /// use usemin::error::UseminError;
    /// use usemin::pipeline::PipelineError;
    ///
    /// let error = UseminError::Pipeline(PipelineError::BuildFailed {
    ///     program: "npm".to_string(),
    ///     code: Some(2),
    /// });
    /// assert_eq!(error.exit_code(), 2);
    ///
    /// let error = UseminError::Pipeline(PipelineError::EmptyCommand);
    /// assert_eq!(error.exit_code(), 64); // EX_USAGE
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Io { .. }) => 74, // EX_IOERR
            Self::Config(_) => 78,                      // EX_CONFIG
            Self::Pipeline(PipelineError::EmptyCommand) => 64, // EX_USAGE
            Self::Pipeline(PipelineError::Spawn { .. }) => 127, // Command not found
            Self::Pipeline(PipelineError::BuildFailed { code, .. }) => match code {
                Some(code) if *code > 0 && *code < 256 => *code,
                _ => 1,
            },
            Self::PassFailed { .. } => 74, // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        // Main error message
        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::downcast(error).and_then(UseminError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::downcast(error).map_or(1, UseminError::exit_code)
    }

    fn downcast(error: &anyhow::Error) -> Option<&UseminError> {
        error.downcast_ref::<UseminError>()
    }
}
