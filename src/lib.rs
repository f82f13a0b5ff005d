//! # aa-leaderboard
//!
//! Scraper for the Artificial Analysis LLM leaderboard.
//!
//! This library extracts the leaderboard comparison table from a page's HTML,
//! normalizes provider logo cells into provider names, and exports the result
//! as CSV. Pages that only build the table client-side can be snapshotted
//! through a headless browser first.
//!
//! ## Quick Start
//!
//! ```rust
//! use aa_leaderboard::parse_leaderboard;
//!
//! let html = r#"<table>
//!   <thead><tr><th>Model</th><th>Score</th></tr></thead>
//!   <tbody>
//!     <tr><td><img src="/logos/acme.svg" alt="Acme logo"></td><td>88</td></tr>
//!   </tbody>
//! </table>"#;
//!
//! let table = parse_leaderboard(html);
//! assert_eq!(table.header(), Some(&["Model".to_string(), "Score".to_string()][..]));
//! assert_eq!(table.data_rows(), &[vec!["Acme".to_string(), "88".to_string()]]);
//! ```
//!
//! ## Features
//!
//! - **Table Extraction**: Locates the leaderboard table and picks the most
//!   plausible header row
//! - **Provider Names**: Collapses logo-only cells into clean provider names
//! - **Fetch and Render**: Plain HTTP fetch with retries, plus a
//!   headless-Chromium fallback for client-side rendered pages
//! - **CSV Export**: Writes the extracted table with minimal quoting

mod error;
mod extract;
mod header;
mod patterns;
mod result;
mod rows;

/// DOM parsing and traversal helpers.
pub mod dom;

/// CSV export of extracted tables.
pub mod export;

/// HTTP fetching with retries and backoff.
pub mod fetch;

/// Headless-browser rendering of client-side pages.
#[cfg(feature = "browser")]
pub mod render;

/// Layered runtime configuration.
pub mod settings;

// Public API - re-exports
pub use error::{Error, Result};
pub use result::LeaderboardTable;

/// Extracts the leaderboard comparison table from an HTML document.
///
/// Finds the first `<table>`, selects the most plausible header row, and
/// normalizes every body row. Logo cells in the first column are replaced
/// with the provider's name taken from the image's alt text or file name.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// Returns the extracted [`LeaderboardTable`]. Extraction never fails: a
/// document without a usable table yields an empty table, which callers
/// detect with [`LeaderboardTable::is_empty`].
///
/// # Example
///
/// ```rust
/// use aa_leaderboard::parse_leaderboard;
///
/// let table = parse_leaderboard("<p>no table here</p>");
/// assert!(table.is_empty());
/// ```
#[must_use]
pub fn parse_leaderboard(html: &str) -> LeaderboardTable {
    extract::extract_table(html)
}
