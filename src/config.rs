use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::source::fetch::DEFAULT_USER_AGENT;
use crate::summary::DEFAULT_TOP_N;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many keywords to rank and map (KEYSUM_TOP_N, default 10)
    pub top_n: usize,
    /// User-Agent for remote fetches (KEYSUM_USER_AGENT)
    pub user_agent: String,
    /// Request timeout (KEYSUM_HTTP_TIMEOUT_SECS). Unset means no timeout,
    /// so an unresponsive server blocks the run.
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let top_n = match lookup("KEYSUM_TOP_N") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("KEYSUM_TOP_N must be a non-negative integer, got {raw:?}"))?,
            None => defaults.top_n,
        };

        let http_timeout = match lookup("KEYSUM_HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().with_context(|| {
                    format!("KEYSUM_HTTP_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
                })?;
                Some(Duration::from_secs(secs))
            }
            None => defaults.http_timeout,
        };

        Ok(Self {
            top_n,
            user_agent: lookup("KEYSUM_USER_AGENT").unwrap_or(defaults.user_agent),
            http_timeout,
        })
    }
}
