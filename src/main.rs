use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;
use usemin::cmd::{self, CommandContext};

/// Minified file substitution for builds
///
/// usemin swaps `name.min.js` in for `name.js` before a build and puts the
/// original back afterwards, so bundlers pick up the minified code without
/// any change to import paths.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of .usemin.toml / .usemin.json
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress per-entry progress messages (failures are still shown)
    #[arg(long, global = true)]
    no_logs: bool,

    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap minified files in, run a build command, then restore
    Run {
        /// Build command and its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// Swap minified files in and leave them there
    Swap,

    /// Put parked originals back in place
    Restore,

    /// Show the on-disk state of every configured file family
    Status,

    /// Create a .usemin.toml configuration file
    Init {
        /// Entry as path:fileName (repeatable)
        #[arg(short, long = "entry", value_name = "PATH:NAME")]
        entries: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var(usemin::fmt::NO_EMOJI_ENV, "1");
    }

    let ctx = CommandContext {
        project_root: None,
        config_path: cli.config.clone(),
        no_logs: cli.no_logs,
        json: cli.json,
    };

    let result = match &cli.command {
        Some(Commands::Run { command }) => cmd::cmd_run(&ctx, command),
        Some(Commands::Swap) => cmd::cmd_swap(&ctx),
        Some(Commands::Restore) => cmd::cmd_restore(&ctx),
        Some(Commands::Status) => cmd::cmd_status(&ctx),
        Some(Commands::Init { entries }) => cmd::cmd_init(&ctx, entries),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Cli::command().print_help().map_err(Into::into),
    };

    if let Err(e) = result {
        use usemin::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
