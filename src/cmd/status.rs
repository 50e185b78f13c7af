//! Status command implementation
//!
//! Reports the on-disk state of every configured file family without
//! renaming anything.

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::fmt::{count_noun, icon, CHECKMARK, INFO, MICROSCOPE, WARNING};
use crate::infra::{FileSystem, RealFileSystem};
use crate::swap::{FamilyState, FileFamily, SkipReason, SubstitutionEntry};

use super::CommandContext;

/// State of one configured entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Entry resolved to a family in the given state
    Family(FileFamily, FamilyState),
    /// Entry cannot be acted on
    Invalid(SkipReason),
}

/// Inspect every entry against the filesystem
pub fn inspect_entries<FS: FileSystem>(
    entries: &[SubstitutionEntry],
    fs: &FS,
) -> Vec<(SubstitutionEntry, EntryStatus)> {
    entries
        .iter()
        .map(|entry| {
            let status = match FileFamily::resolve(entry, fs) {
                Ok(family) => {
                    let state = family.inspect(fs);
                    EntryStatus::Family(family, state)
                }
                Err(reason) => EntryStatus::Invalid(reason),
            };
            (entry.clone(), status)
        })
        .collect()
}

/// Show which families are ready, swapped, or stuck mid-swap
pub fn cmd_status(ctx: &CommandContext) -> Result<()> {
    let options = ctx.load_options()?;
    let statuses = inspect_entries(&options.entries, &RealFileSystem);

    if ctx.json {
        let entries: Vec<_> = statuses
            .iter()
            .map(|(entry, status)| match status {
                EntryStatus::Family(family, state) => json!({
                    "path": entry.path,
                    "fileName": entry.file_name,
                    "state": state.as_str(),
                    "original": family.original.display().to_string(),
                }),
                EntryStatus::Invalid(reason) => json!({
                    "path": entry.path,
                    "fileName": entry.file_name,
                    "state": "invalid",
                    "reason": reason.to_string(),
                }),
            })
            .collect();
        let report = json!({
            "disabled": options.disabled,
            "entries": entries,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        icon(MICROSCOPE),
        style("Substitution status").bold(),
        count_noun(statuses.len(), "entry", "entries")
    );
    if options.disabled {
        println!("   {} usemin is disabled in the configuration", icon(INFO));
    }

    for (entry, status) in &statuses {
        match status {
            EntryStatus::Family(family, state) => {
                let marker = match state {
                    FamilyState::Ready => icon(CHECKMARK),
                    FamilyState::Swapped | FamilyState::Interrupted => icon(WARNING),
                    FamilyState::Incomplete => icon(INFO),
                };
                println!(
                    "   {} {} {}",
                    marker,
                    style(family.original.display()).cyan(),
                    style(state).bold()
                );
                if *state == FamilyState::Interrupted {
                    println!(
                        "      {} move {} back to {}",
                        style("→").dim(),
                        family.parked.display(),
                        family.original.display()
                    );
                }
            }
            EntryStatus::Invalid(reason) => println!(
                "   {} {}: {}",
                icon(INFO),
                style(entry).bold(),
                style(reason).dim()
            ),
        }
    }

    Ok(())
}
