//! JSON digest output.
//!
//! This module serializes the accumulated headlines of one run to a JSON
//! file for consumption by external clients.
//!
//! # Output Structure
//!
//! Files are organized by date, one file per country:
//! ```text
//! json_output_dir/
//! └── 2026-08-07/
//!     ├── us.json
//!     └── de.json
//! ```
//! A later run for the same date and country overwrites the earlier file.

use crate::models::HeadlineDigest;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`HeadlineDigest`] to a JSON file with a date-based directory
/// structure.
///
/// Creates the necessary directories and writes the serialized digest to
/// `{json_output_dir}/{local_date}/{country}.json`.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, or the file write
/// fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_digest(
    digest: &HeadlineDigest,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(digest)?;

    let full_json_dir = format!("{}/{}", json_output_dir, digest.local_date);
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{}/{}.json", full_json_dir, digest.country);
    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename,
        article_count = digest.articles.len(),
        "Wrote JSON digest"
    );

    Ok(())
}
