//! Small string and file system helpers shared across the crate.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Shorten `s` to at most `max` bytes for a log field or error message.
///
/// The cut never splits a UTF-8 character; the number of bytes dropped is
/// appended so the reader knows the value was clipped.
///
/// ```
/// use atlantis_news::utils::truncate_for_log;
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(20), 10), "aaaaaaaaaa…(+10 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let cut = (0..=max)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Turn a lowercase gazetteer entry into a display name (`pune` → `Pune`).
///
/// ```
/// use atlantis_news::utils::upcase;
/// assert_eq!(upcase("delhi"), "Delhi");
/// assert_eq!(upcase(""), "");
/// ```
pub fn upcase(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Make sure the JSON output directory can be written to before any
/// network requests are spent on a feed.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let marker = Path::new(path).join(".atlantis_write_check");
    fs::write(&marker, b"").await?;
    let _ = fs::remove_file(&marker).await;
    info!("JSON output directory is writable");
    Ok(())
}
