//! Article processing stages.
//!
//! Raw search results flow through these stages in order, each a pure
//! function over the previous stage's output:
//!
//! 1. [`dedupe`]: collapse articles sharing a title
//! 2. [`classify`]: assign a category and a location
//! 3. [`rank`]: optional relevance scoring and sort
//!
//! [`process`] runs the whole chain and caps the result.

pub mod classify;
pub mod dedupe;
pub mod rank;

use crate::config::NewsConfig;
use crate::models::{Article, RawArticle};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Run de-duplication, classification and (when enabled) ranking, then
/// keep at most `config.max_articles` articles.
#[instrument(level = "info", skip_all, fields(input = raw.len(), rank = config.rank))]
pub fn process(raw: Vec<RawArticle>, config: &NewsConfig, now: DateTime<Utc>) -> Vec<Article> {
    let unique = dedupe::dedupe(raw);
    let classified: Vec<Article> = unique.into_iter().map(classify::classify).collect();
    let mut articles = if config.rank {
        rank::rank(classified, now)
    } else {
        classified
    };
    articles.truncate(config.max_articles);
    info!(count = articles.len(), "Processed articles");
    articles
}
