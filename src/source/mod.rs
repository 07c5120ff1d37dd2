// Source loading: turn a path or URL into raw document text.
//
// A location is classified once into a `SourceKind`, then dispatched with an
// exhaustive match. Every failure comes back as a `LoadError` so the caller
// can report it and stop; nothing here prints.

pub mod error;
pub mod fetch;
pub mod html;
pub mod pdf;

use std::path::Path;

use tracing::{debug, info};

use error::LoadError;
use fetch::Fetcher;

/// How a location string will be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind<'a> {
    /// URL ending in `.pdf`
    RemotePdf(&'a str),
    /// Any other URL, fetched and parsed as HTML
    RemoteHtml(&'a str),
    /// Local path ending in `.pdf`
    LocalPdf(&'a Path),
    /// Local path without a `.pdf` suffix
    Unsupported(&'a str),
}

/// Classify a location by its scheme prefix and `.pdf` suffix.
///
/// The prefix test is a bare `http`, which covers both `http://` and
/// `https://`. The suffix test is case-sensitive.
pub fn classify(location: &str) -> SourceKind<'_> {
    let remote = location.starts_with("http");
    let pdf = location.ends_with(".pdf");

    match (remote, pdf) {
        (true, true) => SourceKind::RemotePdf(location),
        (true, false) => SourceKind::RemoteHtml(location),
        (false, true) => SourceKind::LocalPdf(Path::new(location)),
        (false, false) => SourceKind::Unsupported(location),
    }
}

/// Load the text behind `location`.
///
/// The returned text is normalized rather than raw: every whitespace run is
/// collapsed to one space and the ends are trimmed. It is never empty; a
/// document with no extractable text is `LoadError::Empty`. HTML pages are
/// decoded with the charset the server declares.
pub async fn load(fetcher: &dyn Fetcher, location: &str) -> Result<String, LoadError> {
    let kind = classify(location);
    debug!(?kind, "Classified source");

    let raw = match kind {
        SourceKind::RemotePdf(url) => pdf::extract_pdf_text(&fetcher.fetch(url).await?)?,
        SourceKind::RemoteHtml(url) => html::extract_html_text(&fetcher.fetch_text(url).await?),
        SourceKind::LocalPdf(path) => pdf::read_local_pdf(path)?,
        SourceKind::Unsupported(location) => {
            return Err(LoadError::Unsupported(location.to_string()))
        }
    };

    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        return Err(LoadError::Empty);
    }

    info!(chars = text.len(), "Loaded document text");
    Ok(text)
}

/// Replace every run of whitespace with a single space and trim the ends.
/// PDF text in particular arrives with hard line breaks mid-sentence.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_remote_pdf() {
        assert_eq!(
            classify("https://example.com/paper.pdf"),
            SourceKind::RemotePdf("https://example.com/paper.pdf")
        );
    }

    #[test]
    fn test_classify_remote_html() {
        assert_eq!(
            classify("http://example.com/article"),
            SourceKind::RemoteHtml("http://example.com/article")
        );
    }

    #[test]
    fn test_classify_local_pdf() {
        assert_eq!(
            classify("docs/report.pdf"),
            SourceKind::LocalPdf(Path::new("docs/report.pdf"))
        );
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(classify("notes.txt"), SourceKind::Unsupported("notes.txt"));
        // suffix check is case-sensitive
        assert_eq!(classify("REPORT.PDF"), SourceKind::Unsupported("REPORT.PDF"));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a\n b\t\tc  "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
