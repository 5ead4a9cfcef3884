//! Command-line entry point for Atlantis News.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... atlantis_news feed --category city
//! atlantis_news chat
//! atlantis_news fir report.yaml
//! ```

use atlantis_news::api::NewsApiClient;
use atlantis_news::chat::{ChatSession, Speaker};
use atlantis_news::cli::{Cli, Command, FeedArgs};
use atlantis_news::config::AppConfig;
use atlantis_news::emergency::{EmergencyService, fir::FirReport, fir::FirError};
use atlantis_news::feed::load_feed;
use atlantis_news::outputs::{json, markdown};
use atlantis_news::utils::ensure_writable_dir;
use chrono::{Local, Utc};
use clap::Parser;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.config, command = ?args.command, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    match args.command {
        Command::Feed(feed_args) => run_feed(config, args.news_api_key, feed_args).await?,
        Command::Chat => run_chat().await?,
        Command::Emergency => print_emergency_directory(),
        Command::Fir { path } => run_fir(&path)?,
    }

    let elapsed = start_time.elapsed();
    debug!(?elapsed, "Execution complete");
    Ok(())
}

#[instrument(level = "info", skip_all, fields(category = %feed_args.category, page = feed_args.page))]
async fn run_feed(
    mut config: AppConfig,
    api_key: Option<String>,
    feed_args: FeedArgs,
) -> Result<(), Box<dyn Error>> {
    if feed_args.rank {
        config.news.rank = true;
    }

    // Check the output directory before spending any requests
    if let Some(dir) = &feed_args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "JSON output directory is not writable");
            return Err(e);
        }
    }

    let client = NewsApiClient::new(&config.news, api_key)?;
    let mut feed = load_feed(&client, &config.news, Utc::now()).await;
    feed.select(feed_args.category);
    info!(
        origin = ?feed.origin(),
        total = feed.articles().len(),
        shown = feed.filtered().len(),
        "Feed loaded"
    );

    print!(
        "{}",
        markdown::feed_page_to_markdown(&feed, feed_args.page, feed_args.page_size)
    );

    if let Some(dir) = &feed_args.json_output_dir {
        let path = json::write_feed(&feed, dir, Local::now().date_naive()).await?;
        info!(%path, "Feed written");
    }
    Ok(())
}

async fn run_chat() -> Result<(), Box<dyn Error>> {
    let mut session = ChatSession::new();
    session.open();
    print_last(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "quit" | "exit" => break,
            "reset" => {
                session.reset();
                session.open();
                print_last(&session);
            }
            _ => {
                if let Some(reply) = session.send(&line).await {
                    println!("{}\n", reply.text);
                }
            }
        }
    }
    info!(messages = session.transcript().len(), "Chat closed");
    Ok(())
}

fn print_last(session: &ChatSession) {
    if let Some(message) = session
        .transcript()
        .iter()
        .rev()
        .find(|m| m.speaker == Speaker::Assistant)
    {
        println!("{}\n", message.text);
    }
}

fn print_emergency_directory() {
    for service in EmergencyService::ALL {
        println!(
            "{:<10} {:>4}  {}",
            service.to_string(),
            service.number(),
            service.tel_link()
        );
    }
}

fn run_fir(path: &str) -> Result<(), Box<dyn Error>> {
    let report = FirReport::from_file(path)?;
    match report.submit() {
        Ok(ack) => {
            println!("{ack}");
            Ok(())
        }
        Err(FirError::Invalid(problems)) => {
            eprintln!("The report could not be submitted:");
            for problem in &problems {
                eprintln!("  - {problem}");
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
