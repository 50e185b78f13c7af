//! Build runner
//!
//! Plays the build orchestrator: notifies every registered hook pair before
//! the build, runs the build command, then notifies them again afterwards.
//! The after-build notification happens whatever the command's outcome,
//! including when it could not be started at all.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::infra::{CommandExecutor, RealCommandExecutor};
use crate::lifecycle::{BuildLifecycle, HookRegistry};
use crate::swap::SwapReport;

use super::error::PipelineError;

/// External command that performs the build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    /// Program to execute
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
    /// Working directory (defaults to the current directory)
    pub current_dir: Option<PathBuf>,
}

impl BuildCommand {
    /// Build a command from a program name and its arguments
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyCommand`] if `argv` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use usemin::pipeline::BuildCommand;
    ///
    /// let cmd = BuildCommand::from_argv(&["npx".into(), "webpack".into()])?;
    /// assert_eq!(cmd.program, "npx");
    /// assert_eq!(cmd.args, vec!["webpack".to_string()]);
    /// # Ok::<(), usemin::pipeline::PipelineError>(())
    /// ```
    pub fn from_argv(argv: &[String]) -> Result<Self, PipelineError> {
        let (program, args) = argv.split_first().ok_or(PipelineError::EmptyCommand)?;
        if program.is_empty() {
            return Err(PipelineError::EmptyCommand);
        }
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            current_dir: None,
        })
    }

    /// Run the command from the given directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

/// Everything that happened during one run
#[derive(Debug)]
pub struct RunOutcome {
    /// Exit status of the build command, or why it could not run
    pub status: Result<ExitStatus, PipelineError>,
    /// Reports from the before-build notifications
    pub before: Vec<SwapReport>,
    /// Reports from after-build notifications that had something to undo
    pub after: Vec<SwapReport>,
}

impl RunOutcome {
    /// True if the command ran and exited successfully
    pub fn succeeded(&self) -> bool {
        matches!(&self.status, Ok(status) if status.success())
    }

    /// Turn the command's status into an error if it did not succeed
    pub fn into_result(self, program: &str) -> Result<ExitStatus, PipelineError> {
        let status = self.status?;
        if status.success() {
            Ok(status)
        } else {
            Err(PipelineError::BuildFailed {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Runs a build command between lifecycle notifications
pub struct BuildRunner<CE: CommandExecutor = RealCommandExecutor> {
    hooks: Vec<(String, Box<dyn BuildLifecycle>)>,
    executor: CE,
}

impl BuildRunner {
    /// Create a runner that spawns real processes
    pub fn new() -> Self {
        Self::with_executor(RealCommandExecutor)
    }
}

impl Default for BuildRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl<CE: CommandExecutor> BuildRunner<CE> {
    /// Create a runner with a custom command executor
    pub fn with_executor(executor: CE) -> Self {
        Self {
            hooks: Vec::new(),
            executor,
        }
    }

    /// Names of the registered hook pairs, in registration order
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(|(name, _)| name.as_str())
    }

    /// Run `command` wrapped in the lifecycle notifications
    pub fn run(&mut self, command: &BuildCommand) -> RunOutcome {
        let before: Vec<SwapReport> = self
            .hooks
            .iter_mut()
            .map(|(_, hooks)| hooks.before_build())
            .collect();

        log::debug!("Running build command: {} {:?}", command.program, command.args);
        let status = self
            .executor
            .run(
                |cmd| {
                    cmd.args(&command.args);
                    if let Some(dir) = &command.current_dir {
                        cmd.current_dir(dir);
                    }
                    cmd
                },
                &command.program,
            )
            .map_err(|source| PipelineError::Spawn {
                program: command.program.clone(),
                source,
            });

        let after: Vec<SwapReport> = self
            .hooks
            .iter_mut()
            .filter_map(|(_, hooks)| hooks.after_build())
            .collect();

        RunOutcome {
            status,
            before,
            after,
        }
    }
}

impl<CE: CommandExecutor> HookRegistry for BuildRunner<CE> {
    fn tap(&mut self, name: &str, hooks: Box<dyn BuildLifecycle>) {
        self.hooks.push((name.to_string(), hooks));
    }
}
