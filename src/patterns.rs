//! Compiled patterns, label sets, and CSS selectors for leaderboard extraction.
//!
//! All regex patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Labels expected in a real leaderboard header row.
///
/// Matched case-insensitively by substring containment, so "Model Name"
/// counts via "model" and "Performance Score" via "performance".
pub const HEADER_LABELS: [&str; 7] = [
    "model",
    "performance",
    "score",
    "rank",
    "provider",
    "name",
    "accuracy",
];

/// Matches the trailing `" logo"` suffix of an image alt text.
///
/// Only the exact five-character suffix is removed; an alt of just "logo"
/// (no leading space) is left alone.
pub static LOGO_ALT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) logo$").expect("LOGO_ALT_SUFFIX regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for header and data cells within a row.
pub const CELL_SELECTOR: &str = "th, td";

/// Selector for the Next.js embedded data payload (diagnostics only).
pub const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";

/// Selector for ARIA table containers (diagnostics only).
pub const ROLE_TABLE_SELECTOR: &str = "[role='table']";

/// Selector for the sort/expand buttons in the table header.
///
/// The leaderboard hides full column labels behind these until clicked.
#[cfg(feature = "browser")]
pub const HEADER_BUTTON_SELECTOR: &str = "thead button";
