//! Command-line interface definitions for Atlantis News.
//!
//! Global options can be given before or after the subcommand. The news API
//! key is normally taken from the `NEWS_API_KEY` environment variable.

use crate::models::Category;
use clap::{Args, Parser, Subcommand};

/// Command-line arguments for the Atlantis News application.
///
/// # Examples
///
/// ```sh
/// # Latest smart-city news, first page
/// atlantis_news feed
///
/// # Ranked transport stories, written to ./json as well
/// atlantis_news feed --category transport --rank -j ./json
///
/// # Talk to the FAQ assistant
/// atlantis_news chat
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// News search API key
    #[arg(long, env = "NEWS_API_KEY", global = true, hide_env_values = true)]
    pub news_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch, classify and show the news feed
    Feed(FeedArgs),
    /// Chat with the FAQ assistant on stdin
    Chat,
    /// List emergency service numbers
    Emergency,
    /// Validate and submit an FIR report from a YAML or JSON file
    Fir {
        /// Path to the report file
        path: String,
    },
}

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Only show articles in this category
    #[arg(long, value_enum, default_value_t = Category::All)]
    pub category: Category,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Articles per page
    #[arg(long, default_value_t = 6)]
    pub page_size: usize,

    /// Sort by relevance (overrides the config file)
    #[arg(long)]
    pub rank: bool,

    /// Also write the whole feed as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_defaults() {
        let cli = Cli::parse_from(["atlantis_news", "feed"]);
        match cli.command {
            Command::Feed(args) => {
                assert_eq!(args.category, Category::All);
                assert_eq!(args.page, 1);
                assert_eq!(args.page_size, 6);
                assert!(!args.rank);
                assert!(args.json_output_dir.is_none());
            }
            other => panic!("expected feed, got {other:?}"),
        }
    }

    #[test]
    fn test_feed_flags() {
        let cli = Cli::parse_from([
            "atlantis_news",
            "feed",
            "--category",
            "transport",
            "-p",
            "2",
            "--rank",
            "-j",
            "/tmp/json",
            "--config",
            "atlantis.yaml",
        ]);
        assert_eq!(cli.config.as_deref(), Some("atlantis.yaml"));
        match cli.command {
            Command::Feed(args) => {
                assert_eq!(args.category, Category::Transport);
                assert_eq!(args.page, 2);
                assert!(args.rank);
                assert_eq!(args.json_output_dir.as_deref(), Some("/tmp/json"));
            }
            other => panic!("expected feed, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Cli::try_parse_from(["atlantis_news", "feed", "--category", "sports"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fir_path() {
        let cli = Cli::parse_from(["atlantis_news", "fir", "report.yaml"]);
        assert!(matches!(cli.command, Command::Fir { ref path } if path == "report.yaml"));
    }
}
