//! Runtime configuration.
//!
//! Settings are layered: a YAML file (optional), then `AA_`-prefixed
//! environment variables, then explicit overrides from the command line.
//! Later layers win.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Resolved runtime configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Page to scrape.
    pub target_url: String,
    /// Destination for the extracted table.
    pub output_csv_path: PathBuf,
    /// Retries after a failed fetch or render.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Base delay between retries; doubles on each attempt.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    /// Per-request HTTP timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Click table header buttons when rendering in a browser.
    #[serde(default = "default_true")]
    pub click_header_buttons: bool,
    /// Settle time after navigation before snapshotting the DOM.
    #[serde(default = "default_render_settle_ms")]
    pub render_settle_ms: u64,
}

fn default_retries() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_render_settle_ms() -> u64 {
    2000
}

impl Settings {
    /// Load settings from `path` (skipped when absent), `AA_` environment
    /// variables, and `overrides` of `(key, value)` pairs.
    pub fn load(path: &str, overrides: &[(&str, String)]) -> Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("AA"));
        for (key, value) in overrides {
            builder = builder
                .set_override(*key, value.clone())
                .map_err(|e| Error::Config(e.to_string()))?;
        }

        let settings: Self = builder
            .build()
            .map_err(|e| Error::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.target_url)
            .map_err(|e| Error::Config(format!("invalid target_url {:?}: {e}", self.target_url)))?;
        if self.output_csv_path.as_os_str().is_empty() {
            return Err(Error::Config("output_csv_path must not be empty".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn render_settle(&self) -> Duration {
        Duration::from_millis(self.render_settle_ms)
    }
}
