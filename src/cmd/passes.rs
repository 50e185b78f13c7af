//! Swap and restore command implementations
//!
//! `usemin swap` runs only the forward pass and `usemin restore` only the
//! reverse pass. The reverse pass is not gated on a previous swap in this
//! process: its own preconditions (active and parked file both present) keep
//! it from touching families that were never swapped, which makes `restore`
//! the way to recover after a build was killed mid-cycle.

use anyhow::Result;
use console::style;

use crate::fmt::{icon, INFO, ROCKET};
use crate::swap::{SwapManager, SwapReport};

use super::{ensure_no_failures, present_summary, CommandContext};

/// Forward pass only: put every minified file in its original's place
///
/// # Examples
///
/// ```no_run
/// use usemin::cmd::{cmd_swap, CommandContext};
///
/// cmd_swap(&CommandContext::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_swap(ctx: &CommandContext) -> Result<()> {
    run_pass(ctx, "Substituting minified files", |manager, entries| {
        manager.begin_substitution(entries)
    })
}

/// Reverse pass only: put every parked original back
pub fn cmd_restore(ctx: &CommandContext) -> Result<()> {
    run_pass(ctx, "Restoring original files", |manager, entries| {
        manager.end_substitution(entries)
    })
}

fn run_pass<F>(ctx: &CommandContext, title: &str, pass: F) -> Result<()>
where
    F: FnOnce(&mut SwapManager, &[crate::swap::SubstitutionEntry]) -> SwapReport,
{
    let options = ctx.load_options()?;
    let verbose = !options.no_logs && !ctx.json;

    if options.disabled {
        if verbose {
            println!("{} usemin is disabled in the configuration; nothing to do", icon(INFO));
        }
        return Ok(());
    }

    if verbose {
        println!("{} {}", icon(ROCKET), style(title).bold());
    }

    let mut manager = SwapManager::new(options.no_logs);
    let report = pass(&mut manager, &options.entries);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else if verbose {
        present_summary(&report);
    }

    ensure_no_failures(&report)?;
    Ok(())
}
