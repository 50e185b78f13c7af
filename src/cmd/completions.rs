//! Completions command implementation
//!
//! Handles the `usemin completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};
use std::io::Write;

/// Name completions are registered under
pub const BIN_NAME: &str = "usemin";

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// usemin completions bash > /etc/bash_completion.d/usemin
///
/// # Zsh
/// usemin completions zsh > ~/.zfunc/_usemin
///
/// # Fish
/// usemin completions fish > ~/.config/fish/completions/usemin.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut clap::Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Write a completion script for `cmd` to any writer
pub fn write_completions(shell: Shell, cmd: &mut clap::Command, out: &mut dyn Write) {
    generate(shell, cmd, BIN_NAME, out);
}
