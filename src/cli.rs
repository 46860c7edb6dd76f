//! Command-line interface definitions for Text Headlines.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the Text Headlines application.
///
/// # Examples
///
/// ```sh
/// # Basic usage; the key can also come from the environment
/// text_headlines --api-key YOUR_KEY
///
/// # German headlines, up to 10 pages, with a JSON digest
/// NEWS_API_KEY=YOUR_KEY text_headlines -c de -p 10 -j ./json
///
/// # Open the third article in the browser after rendering
/// text_headlines --api-key YOUR_KEY --open 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Two-letter country code for the headlines query
    #[arg(short, long, default_value = "us")]
    pub country: String,

    /// API key for the headlines endpoint
    #[arg(short = 'k', long, env = "NEWS_API_KEY")]
    pub api_key: String,

    /// Base URL of the news API
    #[arg(long, default_value = "https://newsapi.org/v2")]
    pub base_url: String,

    /// Maximum number of page fetches in one run
    #[arg(short = 'p', long, default_value_t = 5)]
    pub max_pages: u32,

    /// Optional output directory for the JSON digest
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Open the Nth rendered article (1-based) with the system URL handler
    #[arg(long)]
    pub open: Option<usize>,
}
