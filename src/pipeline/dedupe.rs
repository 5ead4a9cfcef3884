//! Title-based de-duplication.
//!
//! Overlapping search queries routinely return the same story more than
//! once. Two articles are the same story when their titles are exactly
//! equal (case-sensitive); nothing else about them is compared.

use crate::models::{Article, RawArticle};
use itertools::Itertools;
use tracing::debug;

/// Keep one article per distinct title, in order of first occurrence.
///
/// The first record seen for a title is the one kept, content included;
/// later copies are discarded rather than overwriting it. Records with a
/// missing or empty title are dropped.
pub fn dedupe(raw: Vec<RawArticle>) -> Vec<Article> {
    let input = raw.len();
    let unique: Vec<Article> = raw
        .into_iter()
        .filter_map(Article::from_raw)
        .unique_by(|a| a.title.clone())
        .collect();
    debug!(input, output = unique.len(), "De-duplicated articles");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::raw;
    use std::collections::HashSet;

    #[test]
    fn test_empty_input() {
        assert!(dedupe(vec![]).is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let articles = dedupe(vec![
            raw("A", "first"),
            raw("B", "only"),
            raw("A", "second"),
        ]);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[0].description, "first");
        assert_eq!(articles[1].title, "B");
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let articles = dedupe(vec![raw("Delhi", "x"), raw("delhi", "x")]);
        assert_eq!(articles.len(), 2);
    }

    #[test]
    fn test_drops_missing_and_empty_titles() {
        let mut untitled = raw("", "no title");
        untitled.title = None;
        let articles = dedupe(vec![raw("", "empty"), untitled, raw("Kept", "")]);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Kept");
    }

    #[test]
    fn test_output_titles_unique_and_not_longer() {
        let input: Vec<RawArticle> = ["a", "b", "a", "c", "b", "a", "d", ""]
            .iter()
            .map(|t| raw(t, ""))
            .collect();
        let len = input.len();
        let articles = dedupe(input);

        assert!(articles.len() <= len);
        let titles: HashSet<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles.len(), articles.len());
        let order: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }
}
