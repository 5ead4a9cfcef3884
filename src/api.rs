//! News-search API access.
//!
//! This module issues the outbound queries that feed the pipeline. It is
//! split along a trait seam so the pipeline never depends on HTTP directly:
//! - [`NewsSource`]: core trait answering one free-text query
//! - [`NewsApiClient`]: `reqwest` implementation against a NewsAPI-style endpoint
//! - [`fetch_all`]: fans one request out per query and joins them
//!
//! # Failure Policy
//!
//! The batch is all-or-nothing. The first failing query fails the whole
//! fetch and the caller substitutes the fallback feed. There is no retry.

use crate::config::{ConfigError, NewsConfig};
use crate::models::{NewsApiResponse, RawArticle};
use crate::utils::truncate_for_log;
use futures::future::try_join_all;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Errors raised while fetching articles.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no news API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("news API answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("news API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can answer a news search query.
///
/// Implementors return the raw article records for one query. The pipeline
/// only ever talks to this trait, which lets tests swap in fixed data.
pub trait NewsSource {
    /// Run a single search and return the articles it produced.
    async fn search(&self, query: &str) -> Result<Vec<RawArticle>, FetchError>;
}

/// Client for a NewsAPI-compatible `everything` endpoint.
///
/// Every request shares the API key and the common parameters from
/// [`NewsConfig`]: sort order, language, page size and page number.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    sort_by: String,
    language: String,
    page_size: u32,
    page: u32,
}

impl NewsApiClient {
    /// Build a client from configuration.
    ///
    /// A missing key is accepted here; every search then fails with
    /// [`FetchError::MissingApiKey`] so the feed falls back to sample data.
    pub fn new(config: &NewsConfig, api_key: Option<String>) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(config.endpoint.clone()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            sort_by: config.sort_by.clone(),
            language: config.language.clone(),
            page_size: config.page_size,
            page: config.page,
        })
    }
}

impl NewsSource for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(%query))]
    async fn search(&self, query: &str) -> Result<Vec<RawArticle>, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let t0 = Instant::now();

        let page_size = self.page_size.to_string();
        let page = self.page.to_string();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", query),
                ("apiKey", api_key),
                ("sortBy", self.sort_by.as_str()),
                ("language", self.language.as_str()),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis();

        let parsed = serde_json::from_str::<NewsApiResponse>(&body);
        if let Ok(ref resp) = parsed {
            if resp.status == "error" {
                let code = resp.code.clone().unwrap_or_default();
                let message = resp.message.clone().unwrap_or_default();
                warn!(%code, %message, elapsed_ms, "News API returned an error");
                return Err(FetchError::Api { code, message });
            }
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), elapsed_ms, "News API request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body, 200),
            });
        }

        let resp = parsed?;
        debug!(
            count = resp.articles.len(),
            total_results = ?resp.total_results,
            elapsed_ms,
            "News API query answered"
        );
        Ok(resp.articles)
    }
}

/// Run every query against `source` concurrently and concatenate the
/// results in query order.
///
/// # Errors
///
/// Returns the first error produced by any query; partial results are
/// discarded.
#[instrument(level = "info", skip_all, fields(queries = queries.len()))]
pub async fn fetch_all<S: NewsSource>(
    source: &S,
    queries: &[String],
) -> Result<Vec<RawArticle>, FetchError> {
    let t0 = Instant::now();
    let batches = try_join_all(queries.iter().map(|q| source.search(q))).await?;
    let articles: Vec<RawArticle> = batches.into_iter().flatten().collect();
    info!(
        count = articles.len(),
        elapsed_ms = t0.elapsed().as_millis(),
        "Fetched raw articles"
    );
    Ok(articles)
}
