// Text normalization: drop stop words and non-alphabetic tokens.

use anyhow::Result;

use crate::nlp::doc::{ParsedDoc, Token};
use crate::nlp::traits::LanguageModel;

/// Whether a token counts as content for keyword purposes.
pub fn is_content(token: &Token) -> bool {
    token.is_alpha && !token.is_stop
}

/// Parse `text` and return its content words joined by single spaces,
/// in original order.
pub fn normalize(model: &dyn LanguageModel, text: &str) -> Result<String> {
    let doc = model.parse(text)?;
    Ok(normalize_doc(&doc))
}

pub fn normalize_doc(doc: &ParsedDoc) -> String {
    doc.tokens()
        .iter()
        .filter(|t| is_content(t))
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
