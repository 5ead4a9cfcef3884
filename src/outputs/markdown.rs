//! Markdown rendering of a feed page.
//!
//! ```text
//! # Latest News: transport (page 1 of 2)
//!
//! ## Mumbai Metro Line Opens to Commuters
//! *Mumbai Mirror · Mumbai · 14/01/2025 · transport*
//!
//! The new line is expected to ease daily traffic congestion...
//!
//! [Read more](#)
//! ```

use crate::feed::{Feed, FeedOrigin};
use crate::models::Article;
use std::fmt::Write;

/// Render page `page` of the feed's filtered view.
pub fn feed_page_to_markdown(feed: &Feed, page: usize, per_page: usize) -> String {
    let page = feed.page(page, per_page);
    let mut md = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        md,
        "# Latest News: {} (page {} of {})\n",
        feed.active(),
        page.number,
        page.total_pages.max(1)
    );

    if feed.origin() == FeedOrigin::Fallback {
        let _ = writeln!(md, "> Live news is unavailable right now; showing sample stories.\n");
    }

    if page.articles.is_empty() {
        let _ = writeln!(md, "_No articles in this category._");
        return md;
    }

    for article in page.articles {
        md.push_str(&article_to_markdown(article));
        md.push('\n');
    }
    md
}

fn article_to_markdown(article: &Article) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "## {}", article.title);

    let mut meta = vec![];
    if !article.source_name.is_empty() {
        meta.push(article.source_name.clone());
    }
    meta.push(article.location.clone());
    meta.push(article.display_date());
    meta.push(article.category.to_string());
    if let Some(score) = article.relevance_score {
        meta.push(format!("relevance {:.2}", score));
    }
    let _ = writeln!(md, "*{}*\n", meta.join(" · "));

    if !article.description.is_empty() {
        let _ = writeln!(md, "{}\n", article.description);
    }
    let _ = writeln!(md, "![{}]({})\n", article.title, article.image_or_placeholder());
    if !article.url.is_empty() {
        let _ = writeln!(md, "[Read more]({})", article.url);
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PLACEHOLDER_IMAGE};

    #[test]
    fn test_fallback_page() {
        let feed = Feed::fallback();
        let md = feed_page_to_markdown(&feed, 1, 10);

        assert!(md.starts_with("# Latest News: all (page 1 of 1)"));
        assert!(md.contains("showing sample stories"));
        assert!(md.contains("## Smart City Initiative Launches in Delhi"));
        assert!(md.contains("*Indian Express · Delhi · 15/01/2025 · city*"));
        assert!(md.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_filtered_page() {
        let mut feed = Feed::fallback();
        feed.select(Category::Transport);
        let md = feed_page_to_markdown(&feed, 1, 10);

        assert!(md.contains("## Mumbai Metro Line Opens to Commuters"));
        assert!(!md.contains("## Smart City Initiative Launches in Delhi"));
    }

    #[test]
    fn test_empty_category() {
        let mut feed = Feed::fallback();
        feed.select(Category::Events);
        let md = feed_page_to_markdown(&feed, 1, 10);

        assert!(md.contains("(page 1 of 1)"));
        assert!(md.contains("_No articles in this category._"));
    }

    #[test]
    fn test_relevance_shown_when_ranked() {
        let mut article = crate::feed::fallback_articles().remove(0);
        article.relevance_score = Some(0.8);
        let md = article_to_markdown(&article);
        assert!(md.contains("relevance 0.80"));
    }
}
