//! Keyword classification of articles into a category and a location.
//!
//! Both passes are ordered rule tables evaluated top to bottom over the
//! lowercased `title + " " + description`. The first rule with a substring
//! hit wins; there is no scoring between rules.

use crate::models::{Article, Category, DEFAULT_LOCATION};
use crate::utils::upcase;

/// Category keyword groups in priority order.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Emergency, &["emergency", "accident"]),
    (Category::Transport, &["transport", "traffic"]),
    (Category::Events, &["event", "festival"]),
    (Category::Health, &["health", "hospital"]),
    (Category::City, &["city", "urban"]),
];

/// Known cities, checked in order.
const CITIES: &[&str] = &[
    "delhi",
    "mumbai",
    "bangalore",
    "kolkata",
    "chennai",
    "hyderabad",
    "pune",
    "ahmedabad",
    "jaipur",
];

/// Category of already-lowercased text; `All` when nothing matches.
pub fn categorize(text: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::All)
}

/// First known city mentioned in already-lowercased text, capitalized.
pub fn detect_location(text: &str) -> String {
    CITIES
        .iter()
        .find(|city| text.contains(*city))
        .map(|city| upcase(city))
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string())
}

/// Fill in `category` and `location` on one article.
pub fn classify(mut article: Article) -> Article {
    let text = article.search_text();
    article.category = categorize(&text);
    article.location = detect_location(&text);
    article
}
