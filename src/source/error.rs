// Loader failures, each with a one-line message for the user.

use std::path::PathBuf;

use thiserror::Error;

/// Why a document produced no text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported format: {0} (expected an http(s) URL or a local .pdf file)")]
    Unsupported(String),

    #[error("File not found: {}. Check the path and try again.", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("No text could be extracted from the document")]
    Empty,
}
