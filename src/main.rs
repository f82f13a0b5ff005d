//! Command-line scraper: fetch the leaderboard page, extract the table,
//! write it to CSV. Falls back to a headless-browser snapshot when the
//! static HTML carries no table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aa_leaderboard::fetch::FetchClient;
use aa_leaderboard::settings::Settings;
use aa_leaderboard::{export, parse_leaderboard, LeaderboardTable};

/// Scrape the Artificial Analysis LLM leaderboard to CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: String,

    /// Page to scrape; overrides the configured target_url.
    #[arg(long)]
    url: Option<String>,

    /// Output CSV path; overrides the configured output_csv_path.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Use only the static HTML, never a browser.
    #[arg(long)]
    static_only: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut overrides: Vec<(&str, String)> = Vec::new();
    if let Some(url) = &args.url {
        overrides.push(("target_url", url.clone()));
    }
    if let Some(output) = &args.output {
        overrides.push(("output_csv_path", output.to_string_lossy().into_owned()));
    }
    let settings = Settings::load(&args.config, &overrides)?;

    let client = FetchClient::new(settings.request_timeout());
    let html = client
        .fetch_html(&settings.target_url, settings.retries, settings.retry_delay())
        .await
        .context("fetching the page")?;

    let mut table = parse_leaderboard(&html);
    if table.is_empty() && !args.static_only {
        tracing::info!("static HTML had no leaderboard table; trying a rendered snapshot");
        table = rendered_fallback(&settings).await?;
    }
    if table.is_empty() {
        anyhow::bail!(
            "no leaderboard data could be extracted from {}",
            settings.target_url
        );
    }

    export::write_csv_file(&settings.output_csv_path, &table).context("writing the CSV file")?;
    tracing::info!("finished; {} data rows extracted", table.data_rows().len());
    Ok(())
}

#[cfg(feature = "browser")]
async fn rendered_fallback(settings: &Settings) -> anyhow::Result<LeaderboardTable> {
    use aa_leaderboard::render::{fetch_rendered_with_retries, RenderOptions};

    let options = RenderOptions {
        settle: settings.render_settle(),
        click_header_buttons: settings.click_header_buttons,
        ..RenderOptions::default()
    };
    let html = fetch_rendered_with_retries(
        &settings.target_url,
        &options,
        settings.retries,
        settings.retry_delay(),
    )
    .await
    .context("rendering the page")?;
    Ok(parse_leaderboard(&html))
}

#[cfg(not(feature = "browser"))]
async fn rendered_fallback(_settings: &Settings) -> anyhow::Result<LeaderboardTable> {
    tracing::warn!("built without the browser feature; cannot render client-side pages");
    Ok(LeaderboardTable::default())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
