use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use keysum::config::Config;
use keysum::nlp::english::EnglishModel;
use keysum::output::terminal::display_report;
use keysum::source::{self, fetch::HttpFetcher};
use keysum::summary::summarize;

/// keysum: keyword and SVO summaries for documents.
///
/// Reads a local PDF, a remote PDF, or an HTML page and prints its most
/// frequent keywords, the subject-verb-object triples found in it, and which
/// triples mention each keyword.
#[derive(Parser)]
#[command(name = "keysum", version, about)]
struct Cli {
    /// Path to a local .pdf file, or an http(s) URL (PDF or HTML page)
    file_path_or_url: String,

    /// Number of keywords to rank (default: 10, or KEYSUM_TOP_N)
    #[arg(long)]
    top_n: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr; stdout is the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("keysum=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let top_n = cli.top_n.unwrap_or(config.top_n);

    let model = EnglishModel::new();
    info!("Loaded English language model");

    let fetcher = HttpFetcher::new(&config.user_agent, config.http_timeout)?
        .with_progress(std::io::stderr().is_terminal());

    let text = match source::load(&fetcher, &cli.file_path_or_url).await {
        Ok(text) => text,
        Err(e) => {
            debug!(error = ?e, "Loader returned no text");
            println!("{}", e.to_string().red());
            return Ok(());
        }
    };

    let summary = summarize(&model, &text, top_n)?;
    display_report(&summary);

    Ok(())
}
