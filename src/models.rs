//! Data models for news articles as received from the search endpoint and
//! as processed by the pipeline.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`NewsApiResponse`] / [`RawArticle`]: the wire shape of the news-search endpoint
//! - [`Article`]: one processed article carrying its [`Category`] and location
//! - [`Category`]: the closed set of feed categories
//!
//! Wire types use camelCase field names to match the endpoint's JSON, hence
//! the `#[serde(rename_all = "camelCase")]` attributes.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image shown for articles that arrive without one.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNjQwIiBoZWlnaHQ9IjM2MCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjMUYyOTM3Ii8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtc2l6ZT0iMjQiIGZpbGw9IiM2NEI1RjYiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGRvbWluYW50LWJhc2VsaW5lPSJtaWRkbGUiPkF0bGFudGlzIE5ld3M8L3RleHQ+PC9zdmc+";

/// Location assigned when no known city is mentioned.
pub const DEFAULT_LOCATION: &str = "India";

/// Top-level body returned by the news-search endpoint.
///
/// On failure the endpoint still answers with JSON, setting `status` to
/// `"error"` and filling `code` and `message` instead of `articles`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One article exactly as the endpoint describes it. Every field may be
/// missing or `null`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<RawSource>,
}

/// Publisher block nested in a [`RawArticle`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawSource {
    pub name: Option<String>,
}

/// The fixed set of feed categories.
///
/// `All` doubles as the "no keyword matched" label and as the filter that
/// selects every article.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    City,
    Health,
    Transport,
    Emergency,
    Events,
}

impl Category {
    /// Every category, in the order the feed presents its filter chips.
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::City,
        Category::Health,
        Category::Transport,
        Category::Emergency,
        Category::Events,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::City => "city",
            Category::Health => "health",
            Category::Transport => "transport",
            Category::Emergency => "emergency",
            Category::Events => "events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A news article after it has passed through the pipeline.
///
/// `category` and `location` are filled in by the classifier;
/// `relevance_score` only when the ranking stage ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub published_at: String,
    pub source_name: String,
    pub category: Category,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl Article {
    /// Build an unclassified article from its wire form.
    ///
    /// Returns `None` when the title is missing or empty, since the title
    /// is the article's identity.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = raw.title.filter(|t| !t.is_empty())?;
        Some(Self {
            title,
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            image_url: raw.url_to_image.filter(|u| !u.is_empty()),
            published_at: raw.published_at.unwrap_or_default(),
            source_name: raw.source.and_then(|s| s.name).unwrap_or_default(),
            category: Category::All,
            location: DEFAULT_LOCATION.to_string(),
            relevance_score: None,
        })
    }

    /// Lowercased `title + " " + description`, the text every keyword
    /// pass runs over.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }

    /// The article image, or the placeholder when it has none.
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Parsed publication time, if the timestamp is valid RFC 3339.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Publication date formatted for display (`DD/MM/YYYY`). Falls back to
    /// the raw value when it cannot be parsed.
    pub fn display_date(&self) -> String {
        match self.published() {
            Some(dt) => dt.format("%d/%m/%Y").to_string(),
            None => self.published_at.clone(),
        }
    }
}
