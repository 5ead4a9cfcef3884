//! JSON output of a processed feed.

use crate::feed::Feed;
use chrono::NaiveDate;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `feed` to `{json_output_dir}/{date}/feed.json`.
///
/// Creates the dated directory if needed and returns the path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir, %date))]
pub async fn write_feed(
    feed: &Feed,
    json_output_dir: &str,
    date: NaiveDate,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(feed)?;

    let full_json_dir = format!("{}/{}", json_output_dir.trim_end_matches('/'), date);
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{}/feed.json", full_json_dir);
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote feed JSON");

    Ok(output_json_filename)
}
