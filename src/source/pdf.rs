// PDF text extraction.
//
// Pages are decoded in page-number order and concatenated. There is no
// per-page recovery: one bad page fails the whole document.

use std::io::ErrorKind;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::error::LoadError;

/// Extract the text of every page from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, LoadError> {
    let doc = Document::load_mem(bytes)?;

    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in pages.keys() {
        text.push_str(&doc.extract_text(&[*page_num])?);
    }

    debug!(pages = pages.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}

/// Read a local PDF file and extract its text.
pub fn read_local_pdf(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    extract_pdf_text(&bytes)
}
