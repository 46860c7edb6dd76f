//! Data models for headlines fetched from the remote news API.
//!
//! This module defines the structures used throughout the application:
//! - [`Article`]: One news item exactly as the API returns it
//! - [`ArticleSource`]: The nested publisher object inside an article
//! - [`HeadlinesResponse`]: The top-level envelope of one paginated response
//! - [`HeadlineDigest`]: The accumulated result written to the JSON output
//!
//! The wire structs use camelCase field names to match the JSON schema of the
//! news API, hence the `#[allow(non_snake_case)]` attributes.

use serde::{Deserialize, Serialize};

/// The publisher of an article, as nested under the `source` key.
///
/// Both fields are nullable on the wire; independent outlets frequently
/// come back with `"id": null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ArticleSource {
    /// Stable identifier of the outlet, when the API knows one.
    pub id: Option<String>,
    /// Human-readable outlet name, e.g. `"Reuters"`.
    pub name: Option<String>,
}

/// One news item as returned by the headlines endpoint.
///
/// Every display field is optional because the live API returns `null` for
/// any of them (removed articles even null out `title`). The fields are
/// wire-exact; an accumulated collection re-serializes without loss.
///
/// Equality and hashing span every field; de-duplication of the accumulated
/// collection relies on that. Two articles that share a title but differ in
/// any other field are distinct.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Article {
    /// The publisher of the article.
    #[serde(default)]
    pub source: ArticleSource,
    /// The byline, when present.
    pub author: Option<String>,
    /// The headline. Used as the render key for the text front page.
    pub title: Option<String>,
    /// Short teaser text.
    pub description: Option<String>,
    /// Leading portion of the article body.
    pub content: Option<String>,
    /// Publication timestamp, ISO-8601 / RFC 3339.
    pub publishedAt: Option<String>,
    /// Link to the full article.
    pub url: Option<String>,
    /// Link to the article's lead image.
    pub urlToImage: Option<String>,
}

/// Top-level envelope of one paginated headlines response.
///
/// Successful responses carry `"status": "ok"` and an `articles` array;
/// error responses carry `"status": "error"` plus `code` and `message` and
/// no articles at all. `articles` stays an `Option` so the two can be told
/// apart after parsing.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlinesResponse {
    /// `"ok"` or `"error"`.
    pub status: String,
    /// Total matching articles across all pages, on successful responses.
    pub totalResults: Option<u64>,
    /// Machine-readable error code, on error responses.
    pub code: Option<String>,
    /// Human-readable error detail, on error responses.
    pub message: Option<String>,
    /// The articles for this page.
    pub articles: Option<Vec<Article>>,
}

/// The accumulated fetch result, written as the JSON output of one run.
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlineDigest {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run in `HH:MM:SS.microseconds` format.
    pub local_time: String,
    /// Country code the headlines were requested for.
    pub country: String,
    /// Number of non-empty pages that were merged into `articles`.
    pub pages_fetched: u32,
    /// The deduplicated articles in first-seen order.
    pub articles: Vec<Article>,
}
