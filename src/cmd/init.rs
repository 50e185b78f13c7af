//! Init command implementation
//!
//! Handles the `usemin init` command which writes a starter `.usemin.toml`.
//! Entries are given as `path:fileName` pairs on the command line.

use anyhow::{bail, Result};
use console::style;

use crate::config::{ConfigLoader, SwapOptions, CONFIG_FILE_NAME};
use crate::fmt::{icon, CHECKMARK, INFO, ROCKET, WARNING};
use crate::swap::{FileFamily, SubstitutionEntry};

use super::CommandContext;

/// Parse a `path:fileName` pair
///
/// The last `:` separates the two halves so Windows drive letters survive.
///
/// # Examples
///
/// ```
/// use usemin::cmd::init::parse_entry;
///
/// let entry = parse_entry("public/lib:p5")?;
/// assert_eq!(entry.path, "public/lib");
/// assert_eq!(entry.file_name, "p5");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_entry(raw: &str) -> Result<SubstitutionEntry> {
    let Some((path, file_name)) = raw.rsplit_once(':') else {
        bail!("Entry '{}' must look like path:fileName", raw);
    };
    if path.is_empty() || file_name.is_empty() {
        bail!("Entry '{}' needs both a path and a file name", raw);
    }
    Ok(SubstitutionEntry::new(path, file_name))
}

/// Create a `.usemin.toml` with the given entries
///
/// Does nothing (apart from a notice) when a config file already exists.
pub fn cmd_init(ctx: &CommandContext, raw_entries: &[String]) -> Result<()> {
    println!(
        "{} {} Initializing usemin",
        icon(ROCKET),
        style("usemin init").bold()
    );
    println!();

    let project_root = ctx.project_root()?;

    if ConfigLoader::exists(&project_root) {
        println!(
            "{} Config file already exists in {}",
            icon(WARNING),
            style(project_root.display()).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let entries = raw_entries
        .iter()
        .map(|raw| parse_entry(raw.as_str()))
        .collect::<Result<Vec<_>>>()?;

    if !entries.is_empty() {
        println!("{}  Configured families:", icon(INFO));
        for entry in &entries {
            let family = FileFamily::new(&entry.path, &entry.file_name);
            println!(
                "   {} {} ⇄ {}",
                style("•").dim(),
                style(family.original.display()).cyan(),
                style(family.minified.display()).green()
            );
        }
        println!();
    }

    let options = SwapOptions {
        entries,
        ..Default::default()
    };
    ConfigLoader::save(&options, &project_root)?;

    println!(
        "{} Created {}",
        icon(CHECKMARK),
        style(CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Next Steps:", icon(INFO));
    println!("   1. Add or adjust entries in {}", CONFIG_FILE_NAME);
    println!(
        "   2. Run {} to check every family",
        style("usemin status").cyan()
    );
    println!(
        "   3. Wrap your build with {}",
        style("usemin run -- <build command>").cyan()
    );
    println!();

    Ok(())
}
