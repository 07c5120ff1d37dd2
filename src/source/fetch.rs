// HTTP fetcher: the network collaborator behind remote sources.
//
// The loader only needs "GET this URL, give me the body or tell me why not".
// Keeping that behind a trait lets tests feed canned bodies and errors
// without a network.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::error::LoadError;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "keysum/0.1 (document summarizer)";

/// Trait for fetching a remote document body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the full response body. Non-success statuses
    /// and transport failures are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError>;

    /// GET `url` and decode the body as text, using the charset the server
    /// declares in `Content-Type` (UTF-8 when absent).
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

/// reqwest-backed fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
    show_progress: bool,
}

impl HttpFetcher {
    /// Build a fetcher. `timeout` of `None` leaves requests unbounded.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            show_progress: false,
        }
    }

    /// Show a spinner on stderr while downloading.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn spinner(&self, url: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner} {msg}")
                .expect("valid template"),
        );
        pb.set_message(format!("Downloading {url}"));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Send the GET and reject non-success statuses.
    async fn send(&self, url: &str) -> Result<reqwest::Response, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| http_error(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let body = self
            .send(url)
            .await?
            .bytes()
            .await
            .map_err(|source| http_error(url, source))?;
        Ok(body.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String, LoadError> {
        self.send(url)
            .await?
            .text()
            .await
            .map_err(|source| http_error(url, source))
    }
}

fn http_error(url: &str, source: reqwest::Error) -> LoadError {
    LoadError::Http {
        url: url.to_string(),
        source,
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        debug!(url, "HTTP GET");
        let pb = self.spinner(url);
        let result = self.get_body(url).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        if let Ok(body) = &result {
            info!(url, bytes = body.len(), "Downloaded document");
        }
        result
    }

    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        debug!(url, "HTTP GET (text)");
        let pb = self.spinner(url);
        let result = self.get_text(url).await;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        if let Ok(text) = &result {
            info!(url, chars = text.len(), "Downloaded page");
        }
        result
    }
}
