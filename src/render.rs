//! Headless-browser rendering of the leaderboard page.
//!
//! The leaderboard is client-side rendered, so the static HTML payload often
//! ships without the table. This module snapshots the live DOM from a
//! headless Chromium instead, clicking the header buttons first so every
//! column label is present in the snapshot.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use indicatif::ProgressBar;

use crate::error::{Error, Result};
use crate::patterns::HEADER_BUTTON_SELECTOR;

/// Knobs for a rendered-page snapshot.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Explicit Chromium binary; discovery runs when unset.
    pub browser_path: Option<PathBuf>,
    /// Settle time after navigation before reading the DOM.
    pub settle: Duration,
    /// Click the table's header buttons before snapshotting.
    pub click_header_buttons: bool,
    /// Navigation timeout.
    pub nav_timeout: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            browser_path: None,
            settle: Duration::from_millis(2000),
            click_header_buttons: true,
            nav_timeout: Duration::from_secs(30),
        }
    }
}

/// Find the Chromium binary path.
#[must_use]
pub fn find_chromium(override_path: Option<&PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if path.exists() {
            return Some(path.clone());
        }
    }

    if let Ok(p) = std::env::var("AA_BROWSER_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    None
}

/// Render `url` in headless Chromium and return the live DOM as HTML.
///
/// Launches a fresh browser per call, navigates, waits out the settle
/// delay, optionally clicks the header buttons, then snapshots
/// `document.documentElement.outerHTML`.
pub async fn fetch_rendered(url: &str, options: &RenderOptions) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Rendering page with headless Chromium...");

    let result = render_inner(url, options, &spinner).await;
    spinner.finish_and_clear();
    result
}

/// Retry wrapper around [`fetch_rendered`] with exponential backoff.
pub async fn fetch_rendered_with_retries(
    url: &str,
    options: &RenderOptions,
    retries: u32,
    delay: Duration,
) -> Result<String> {
    let mut attempt = 0u32;
    loop {
        match fetch_rendered(url, options).await {
            Ok(html) => return Ok(html),
            Err(err) if attempt < retries => {
                let backoff = delay * 2u32.saturating_pow(attempt.min(31));
                attempt += 1;
                tracing::warn!("render attempt {attempt} failed: {err}; retrying in {backoff:?}");
                tokio::time::sleep(backoff).await;
            }
            Err(err) => {
                tracing::error!("rendering {url} failed after {} attempts: {err}", retries + 1);
                return Err(err);
            }
        }
    }
}

async fn render_inner(url: &str, options: &RenderOptions, spinner: &ProgressBar) -> Result<String> {
    let chrome_path = find_chromium(options.browser_path.as_ref()).ok_or_else(|| {
        Error::Render("no Chromium binary found; set AA_BROWSER_PATH".to_string())
    })?;

    spinner.set_message("Launching browser...");
    let config = BrowserConfig::builder()
        .chrome_executable(chrome_path)
        .arg("--headless=new")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .build()
        .map_err(|e| Error::Render(format!("failed to build browser config: {e}")))?;

    let (browser, mut handler) = Browser::launch(config)
        .await
        .map_err(|e| Error::Render(format!("failed to launch Chromium: {e}")))?;

    // Drive CDP events until the browser connection closes
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            let _ = event;
        }
    });

    let outcome = snapshot_page(&browser, url, options, spinner).await;
    drop(browser);
    outcome
}

async fn snapshot_page(
    browser: &Browser,
    url: &str,
    options: &RenderOptions,
    spinner: &ProgressBar,
) -> Result<String> {
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| Error::Render(format!("failed to create page: {e}")))?;

    spinner.set_message("Navigating to page...");
    match tokio::time::timeout(options.nav_timeout, page.goto(url)).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => return Err(Error::Render(format!("navigation failed: {e}"))),
        Err(_) => {
            return Err(Error::Render(format!(
                "navigation timed out after {:?}",
                options.nav_timeout
            )));
        }
    }

    spinner.set_message("Waiting for page to load...");
    let _ = page.wait_for_navigation().await;
    tokio::time::sleep(options.settle).await;

    if options.click_header_buttons {
        spinner.set_message("Clicking headers...");
        click_header_buttons(&page).await;
    }

    spinner.set_message("Extracting HTML...");
    let evaluated = page
        .evaluate("document.documentElement.outerHTML")
        .await
        .map_err(|e| Error::Render(format!("failed to read rendered DOM: {e}")))?;
    let html: String = evaluated
        .into_value()
        .map_err(|e| Error::Render(format!("failed to convert rendered DOM: {e:?}")))?;

    let _ = page.close().await;
    Ok(html)
}

/// Click every header button currently on the page.
///
/// Individual clicks can fail when a button is hidden or detaches during a
/// re-render; those failures are logged and skipped.
async fn click_header_buttons(page: &Page) {
    match page.find_elements(HEADER_BUTTON_SELECTOR).await {
        Ok(buttons) => {
            tracing::debug!("clicking {} header buttons", buttons.len());
            for button in buttons {
                if let Err(err) = button.click().await {
                    tracing::debug!("header button click failed: {err}");
                }
            }
        }
        Err(err) => tracing::debug!("header button lookup failed: {err}"),
    }
}
