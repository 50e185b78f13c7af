//! Run command implementation
//!
//! `usemin run -- <build command>` is the whole lifecycle in one go:
//! substitute, build, restore. Restoring happens even when the build fails.

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::error::UseminError;
use crate::fmt::{icon, HAMMER, INFO, ROCKET};
use crate::lifecycle::SwapPlugin;
use crate::pipeline::{BuildCommand, BuildRunner, RunOutcome};

use super::{ensure_no_failures, present_summary, CommandContext};

/// Wrap a build command with minified-file substitution
///
/// The process exit code follows the build command's when the build fails.
///
/// # Examples
///
/// ```no_run
/// use usemin::cmd::{cmd_run, CommandContext};
///
/// let argv = vec!["npx".to_string(), "webpack".to_string()];
/// cmd_run(&CommandContext::default(), &argv)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_run(ctx: &CommandContext, argv: &[String]) -> Result<()> {
    let command = BuildCommand::from_argv(argv)
        .map_err(UseminError::from)?
        .in_dir(ctx.project_root()?);
    let options = ctx.load_options()?;
    let verbose = !options.no_logs && !ctx.json;

    let plugin = SwapPlugin::new(options);
    let mut runner = BuildRunner::new();
    plugin.apply(&mut runner);

    if verbose {
        if runner.hook_names().next().is_none() {
            println!(
                "{} usemin is disabled; running the build without substitution",
                icon(INFO)
            );
        }
        println!(
            "{} {} {}",
            icon(HAMMER),
            style("Building with").bold(),
            style(format!("{} {}", command.program, command.args.join(" ")).trim_end()).cyan()
        );
    }

    let outcome = runner.run(&command);
    present_outcome(ctx, verbose, &outcome)?;

    let failures: Vec<_> = outcome
        .before
        .iter()
        .chain(&outcome.after)
        .map(ensure_no_failures)
        .filter_map(Result::err)
        .collect();

    outcome
        .into_result(&command.program)
        .map_err(UseminError::from)?;

    if let Some(err) = failures.into_iter().next() {
        return Err(err.into());
    }

    if verbose {
        println!("{} {}", icon(ROCKET), style("Build finished").green().bold());
    }
    Ok(())
}

fn present_outcome(ctx: &CommandContext, verbose: bool, outcome: &RunOutcome) -> Result<()> {
    if ctx.json {
        let report = json!({
            "success": outcome.succeeded(),
            "exit_code": outcome.status.as_ref().ok().and_then(|s| s.code()),
            "before": outcome.before.iter().map(|r| r.to_json()).collect::<Vec<_>>(),
            "after": outcome.after.iter().map(|r| r.to_json()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        for report in outcome.before.iter().chain(&outcome.after) {
            present_summary(report);
        }
    }
    Ok(())
}
