//! HTTP fetch boundary for the paginated headlines endpoint.
//!
//! This module owns the single request/parse step the feed is built on. It
//! uses a trait-based design so the backend can be swapped or faked:
//! - [`FetchPage`]: core trait, one page request per call
//! - [`NewsApiClient`]: implementation backed by the live news API
//!
//! The body is read as text first and parsed with `serde_json` afterwards so
//! a malformed payload can be logged with a bounded preview before the error
//! propagates.
//!
//! There is no retry here: a failed page fetch is reported once and the
//! caller converts it to terminal state.

use crate::models::{Article, HeadlinesResponse};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Trait for fetching one page of headlines.
///
/// Implementors take a 1-based page number and return the articles of that
/// page. An empty vector is a valid result and means the page exists but
/// holds no articles.
pub trait FetchPage {
    /// Fetch the articles of page `page`.
    ///
    /// # Errors
    ///
    /// Any transport, status, or parse failure. Callers are expected to
    /// collapse all of these into a single error condition.
    async fn fetch_page(&self, page: u32) -> Result<Vec<Article>, Box<dyn Error>>;
}

/// Client for a NewsAPI-compatible headlines endpoint.
///
/// Holds the connection pool plus the query parameters that stay fixed for
/// the lifetime of a run: base URL, API key, and country code.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
    country: String,
}

impl NewsApiClient {
    /// Create a client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://newsapi.org/v2`
    /// * `api_key` - static API key passed as a query parameter
    /// * `country` - two-letter country code for the headlines query
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, api_key: String, country: String) -> Result<Self, Box<dyn Error>> {
        Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            country,
        })
    }

    /// Build the request URL for one page.
    fn page_url(&self, page: u32) -> String {
        format!(
            "{}/top-headlines?country={}&apiKey={}&page={}",
            self.base_url, self.country, self.api_key, page
        )
    }
}

impl FetchPage for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(page = page, country = %self.country))]
    async fn fetch_page(&self, page: u32) -> Result<Vec<Article>, Box<dyn Error>> {
        let url = self.page_url(page);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("headlines request failed with HTTP {status}").into());
        }

        let body = response.text().await?;
        let articles = parse_headlines(&body).map_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Headlines response did not parse"
            );
            e
        })?;

        info!(page, count = articles.len(), "Fetched headlines page");
        Ok(articles)
    }
}

/// Parse one headlines response body.
///
/// Checks the embedded `status` field before trusting the payload: the API
/// reports failures inside a 2xx response as `"status": "error"` with a
/// `code`/`message` pair.
///
/// # Errors
///
/// Returns an error for malformed JSON, a non-`"ok"` status, or a
/// well-formed `"ok"` response with no `articles` array.
pub fn parse_headlines(body: &str) -> Result<Vec<Article>, Box<dyn Error>> {
    let response: HeadlinesResponse = serde_json::from_str(body)?;
    debug!(
        status = %response.status,
        total_results = ?response.totalResults,
        "Parsed headlines envelope"
    );

    if response.status != "ok" {
        let code = response.code.unwrap_or_else(|| "unknown".to_string());
        let message = response.message.unwrap_or_default();
        return Err(format!(
            "headlines API returned status {:?} ({code}): {message}",
            response.status
        )
        .into());
    }

    response
        .articles
        .ok_or_else(|| Box::<dyn Error>::from("headlines response missing articles"))
}
