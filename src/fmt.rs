//! Shared console output helpers

use console::Emoji;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Hammer emoji for build operations
pub const HAMMER: Emoji = Emoji("🔨", ">");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Environment variable that forces plain-text fallbacks
pub const NO_EMOJI_ENV: &str = "NO_EMOJI";

/// Render an emoji, or its fallback when `NO_EMOJI` is set
///
/// `console` already falls back on terminals that cannot show emoji; this
/// additionally honors the `--no-emoji` flag.
///
/// # Examples
///
/// ```
/// use usemin::fmt::{icon, CHECKMARK};
///
/// std::env::set_var("NO_EMOJI", "1");
/// assert_eq!(icon(CHECKMARK), "[OK]");
/// ```
pub fn icon(emoji: Emoji<'_, '_>) -> String {
    if std::env::var_os(NO_EMOJI_ENV).is_some() {
        emoji.1.to_string()
    } else {
        emoji.to_string()
    }
}

/// Pluralize a count for messages like "3 entries"
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
