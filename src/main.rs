//! # Text Headlines
//!
//! A command-line news reader that fetches paginated top headlines from a
//! NewsAPI-compatible endpoint, merges every page into one deduplicated,
//! order-preserving collection, and renders the result as a text front page.
//!
//! ## Features
//!
//! - Paginated fetching with end-of-data detection (an empty page stops the run)
//! - Whole-record de-duplication across and within pages, first-seen order kept
//! - A sticky error state: any fetch failure ends the run and is rendered,
//!   never retried
//! - Optional JSON digest output and opening an article in the browser
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=YOUR_KEY text_headlines -c us -p 5
//! ```
//!
//! ## Architecture
//!
//! The application is a single sequential pipeline:
//! 1. **Fetching**: one page per iteration through [`feed::HeadlineFeed`],
//!    each iteration standing in for one need-more-data signal
//! 2. **Rendering**: the accumulated state becomes a text front page on stdout
//! 3. **Output**: optionally write the JSON digest and open one article URL

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod feed;
mod models;
mod outputs;
mod utils;

use api::NewsApiClient;
use cli::Cli;
use feed::HeadlineFeed;
use models::HeadlineDigest;
use outputs::{json, text};
use utils::{ensure_writable_dir, open_article_url};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("text_headlines starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.country, ?args.base_url, ?args.max_pages, "Parsed CLI arguments");

    // Early check: ensure the JSON output dir is writable before fetching
    if let Some(ref dir) = args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch pages sequentially ----
    let client = NewsApiClient::new(&args.base_url, args.api_key.clone(), args.country.clone())?;
    let mut feed = HeadlineFeed::new(client);

    let mut pages_requested = 0u32;
    while pages_requested < args.max_pages && !feed.last_page_reached() && !feed.has_errored() {
        feed.fetch_next_page().await;
        pages_requested += 1;
    }

    info!(
        pages_requested,
        articles = feed.articles().len(),
        loading = feed.is_loading(),
        errored = feed.has_errored(),
        exhausted = feed.last_page_reached(),
        "Fetch loop finished"
    );

    // ---- Render the front page ----
    let front_page = text::render_front_page(
        feed.articles(),
        feed.last_page_reached(),
        feed.has_errored(),
    );
    print!("{front_page}");

    // ---- JSON digest ----
    if let Some(ref dir) = args.json_output_dir {
        let digest = HeadlineDigest {
            local_date: Local::now().date_naive().to_string(),
            local_time: Local::now().time().to_string(),
            country: args.country.clone(),
            pages_fetched: feed.page_number() - 1,
            articles: feed.articles().to_vec(),
        };
        if let Err(e) = json::write_digest(&digest, dir).await {
            error!(error = %e, "Failed to write JSON digest");
        }
    }

    // ---- Open a selected article ----
    if let Some(open_index) = args.open {
        let target = open_index
            .checked_sub(1)
            .and_then(|i| feed.articles().get(i))
            .and_then(|a| a.url.as_deref());
        match target {
            Some(url) => open_article_url(url),
            None => warn!(open_index, "No article with a URL at that index"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
