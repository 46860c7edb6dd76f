//! Utility functions for date formatting, logging, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Publication-timestamp formatting for the text front page
//! - String truncation for logging response bodies
//! - File system validation for the JSON output directory
//! - Link opening via the platform's URL handler

use chrono::DateTime;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Format an RFC 3339 publication timestamp for display.
///
/// Produces a human-oriented form like `August 7, 2026 9:15 AM`. A missing
/// or unparseable timestamp is passed through unchanged so the front page
/// still shows whatever the API sent.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_published_at("2026-08-07T09:15:00Z"), "August 7, 2026 9:15 AM");
/// assert_eq!(format_published_at("yesterday-ish"), "yesterday-ish");
/// ```
pub fn format_published_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%B %-d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The original string if shorter than `max`, otherwise a truncated version
/// with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Open an article URL with the platform's URL handler.
///
/// Failure is logged, never raised.
pub fn open_article_url(url: &str) {
    match open::that(url) {
        Ok(()) => info!(%url, "Opened article URL"),
        Err(e) => warn!(%url, error = %e, "Don't know how to open this URL"),
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
