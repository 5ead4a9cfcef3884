//! The news feed as presented to a reader.
//!
//! A [`Feed`] owns the processed articles of one fetch cycle plus the
//! currently selected category. Filtering and paging only ever read the
//! article set; switching categories never loses articles.
//!
//! [`load_feed`] is the entry point: it runs fetch and processing, and
//! substitutes the fixed [`fallback_articles`] when the fetch fails.

use crate::api::{NewsSource, fetch_all};
use crate::config::NewsConfig;
use crate::models::{Article, Category};
use crate::pipeline;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Where a feed's articles came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrigin {
    Live,
    Fallback,
}

/// Processed articles plus the active category filter.
#[derive(Debug, Clone, Serialize)]
pub struct Feed {
    articles: Vec<Article>,
    active: Category,
    origin: FeedOrigin,
}

/// One page of the filtered feed.
#[derive(Debug)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    pub total_articles: usize,
    pub articles: Vec<&'a Article>,
}

impl Feed {
    pub fn live(articles: Vec<Article>) -> Self {
        Self {
            articles,
            active: Category::All,
            origin: FeedOrigin::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            articles: fallback_articles(),
            active: Category::All,
            origin: FeedOrigin::Fallback,
        }
    }

    pub fn origin(&self) -> FeedOrigin {
        self.origin
    }

    pub fn active(&self) -> Category {
        self.active
    }

    /// Every article, regardless of the active filter.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Make `category` the active filter.
    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    /// Articles matching the active category; all of them for `All`.
    pub fn filtered(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| self.active == Category::All || a.category == self.active)
            .collect()
    }

    /// Page `number` (1-based) of the filtered view, `per_page` articles
    /// each. Pages past the end are empty; `per_page` of zero is treated
    /// as one.
    pub fn page(&self, number: usize, per_page: usize) -> Page<'_> {
        let per_page = per_page.max(1);
        let number = number.max(1);
        let filtered = self.filtered();
        let total_articles = filtered.len();
        let total_pages = total_articles.div_ceil(per_page);
        let articles = filtered
            .into_iter()
            .skip((number - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();
        Page {
            number,
            total_pages,
            total_articles,
            articles,
        }
    }
}

/// The fixed sample articles shown when the live fetch fails.
pub fn fallback_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Smart City Initiative Launches in Delhi".to_string(),
            description: "New smart city project aims to improve urban infrastructure..."
                .to_string(),
            url: "#".to_string(),
            image_url: Some(
                "https://via.placeholder.com/640x360?text=Smart+City+Delhi".to_string(),
            ),
            published_at: "2025-01-15T09:00:00Z".to_string(),
            source_name: "Indian Express".to_string(),
            category: Category::City,
            location: "Delhi".to_string(),
            relevance_score: None,
        },
        Article {
            title: "Mumbai Metro Line Opens to Commuters".to_string(),
            description: "The new line is expected to ease daily traffic congestion across the suburbs."
                .to_string(),
            url: "#".to_string(),
            image_url: None,
            published_at: "2025-01-14T07:30:00Z".to_string(),
            source_name: "Mumbai Mirror".to_string(),
            category: Category::Transport,
            location: "Mumbai".to_string(),
            relevance_score: None,
        },
        Article {
            title: "Bangalore Hospitals Adopt Digital Health Records".to_string(),
            description: "Public hospitals move patient files online to cut waiting times."
                .to_string(),
            url: "#".to_string(),
            image_url: None,
            published_at: "2025-01-13T12:00:00Z".to_string(),
            source_name: "Deccan Herald".to_string(),
            category: Category::Health,
            location: "Bangalore".to_string(),
            relevance_score: None,
        },
    ]
}

/// Fetch, process and wrap articles in a [`Feed`].
///
/// Any fetch failure is logged and answered with [`Feed::fallback`]; the
/// caller always gets something to render.
#[instrument(level = "info", skip_all, fields(queries = config.queries.len()))]
pub async fn load_feed<S: NewsSource>(source: &S, config: &NewsConfig, now: DateTime<Utc>) -> Feed {
    match fetch_all(source, &config.queries).await {
        Ok(raw) => {
            let articles = pipeline::process(raw, config, now);
            info!(count = articles.len(), "Live feed ready");
            Feed::live(articles)
        }
        Err(e) => {
            warn!(error = %e, "News fetch failed; using fallback articles");
            Feed::fallback()
        }
    }
}
