//! Error types for aa-leaderboard.
//!
//! This module defines the error types returned by the fetching, rendering,
//! configuration, and export layers. Extraction itself never errors: an
//! empty [`LeaderboardTable`](crate::LeaderboardTable) is its failure signal.

/// Error type for scraper operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP fetch failed after exhausting retries.
    #[error("HTTP fetch failed: {0}")]
    Fetch(String),

    /// Headless browser rendering failed.
    #[error("Browser rendering failed: {0}")]
    Render(String),

    /// Configuration was missing or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing the output file failed.
    #[error("Output write failed: {0}")]
    Export(#[from] std::io::Error),
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, Error>;
