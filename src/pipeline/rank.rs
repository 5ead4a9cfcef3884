//! Relevance ranking by keyword hits and recency.
//!
//! ```text
//! score = clamp(min(1, 0.2 * keyword_hits) + max(0, 1 - days_old / 30), 0, 1)
//! ```

use crate::models::Article;
use chrono::{DateTime, Utc};

const RELEVANCE_KEYWORDS: &[&str] = &[
    "smart city",
    "technology",
    "innovation",
    "urban",
    "development",
];

const KEYWORD_WEIGHT: f64 = 0.2;
const RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Relevance of one article at time `now`, always within `[0, 1]`.
///
/// Articles whose timestamp cannot be parsed get no recency credit.
pub fn relevance(article: &Article, now: DateTime<Utc>) -> f64 {
    let text = article.search_text();
    let hits = RELEVANCE_KEYWORDS
        .iter()
        .filter(|k| text.contains(*k))
        .count();
    let keyword_score = (hits as f64 * KEYWORD_WEIGHT).min(1.0);

    let recency = article
        .published()
        .map(|published| {
            let days_old = (now - published).num_seconds() as f64 / 86_400.0;
            (1.0 - days_old / RECENCY_WINDOW_DAYS).max(0.0)
        })
        .unwrap_or(0.0);

    (keyword_score + recency).clamp(0.0, 1.0)
}

/// Score every article and sort by descending relevance.
///
/// The sort is stable: equally scored articles keep their relative order.
pub fn rank(articles: Vec<Article>, now: DateTime<Utc>) -> Vec<Article> {
    let mut scored: Vec<Article> = articles
        .into_iter()
        .map(|mut a| {
            a.relevance_score = Some(relevance(&a, now));
            a
        })
        .collect();
    scored.sort_by(|a, b| {
        let a = a.relevance_score.unwrap_or(0.0);
        let b = b.relevance_score.unwrap_or(0.0);
        b.total_cmp(&a)
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::raw;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn article(title: &str, description: &str, published: DateTime<Utc>) -> Article {
        let mut a = Article::from_raw(raw(title, description)).unwrap();
        a.published_at = published.to_rfc3339();
        a
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_keywords_only() {
        let a = article("Urban development", "", now() - Duration::days(60));
        assert!(approx(relevance(&a, now()), 0.4));
    }

    #[test]
    fn test_recency_only() {
        let a = article("Cricket", "", now() - Duration::days(15));
        assert!(approx(relevance(&a, now()), 0.5));

        let old = article("Cricket", "", now() - Duration::days(45));
        assert!(approx(relevance(&old, now()), 0.0));
    }

    #[test]
    fn test_score_is_clamped() {
        let all_keywords = "smart city technology innovation urban development";
        let fresh = article(all_keywords, all_keywords, now());
        assert!(approx(relevance(&fresh, now()), 1.0));

        // Timestamps in the future would push recency above one
        let future = article("Cricket", "", now() + Duration::days(90));
        assert!(approx(relevance(&future, now()), 1.0));
    }

    #[test]
    fn test_unparseable_date_scores_keywords_only() {
        let mut a = article("Innovation hub", "", now());
        a.published_at = "not a date".to_string();
        assert!(approx(relevance(&a, now()), 0.2));
    }

    #[test]
    fn test_score_always_in_range() {
        for days in [-400, -1, 0, 1, 29, 30, 31, 1000] {
            for text in ["", "urban", "smart city technology innovation urban development"] {
                let a = article(&format!("t {text}"), text, now() - Duration::days(days));
                let s = relevance(&a, now());
                assert!((0.0..=1.0).contains(&s), "score {s} out of range");
            }
        }
    }

    #[test]
    fn test_rank_sorts_descending_and_stable() {
        let stale = now() - Duration::days(60);
        let articles = vec![
            article("first tie", "", stale),
            article("urban", "", stale),
            article("second tie", "", stale),
            article("urban technology", "", stale),
        ];

        let ranked = rank(articles, now());
        let titles: Vec<_> = ranked.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["urban technology", "urban", "first tie", "second tie"]
        );
        assert!(ranked.iter().all(|a| a.relevance_score.is_some()));
    }
}
