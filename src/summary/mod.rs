// Lexical summary: keywords, SVO triples, and the keyword map.
//
// Two passes run over the same input: SVO extraction needs the raw text with
// all its function words, while keyword ranking runs over the normalized
// text. The keyword map joins the two results.

pub mod keyword_map;
pub mod keywords;
pub mod normalize;
pub mod svo;

use anyhow::Result;
use tracing::info;

use crate::nlp::traits::LanguageModel;
use keyword_map::{build_keyword_map, KeywordMap};
use keywords::{rank_keywords, KeywordEntry};
use normalize::normalize;
use svo::{extract_svos, SvoTriple};

/// Default number of keywords to rank and map.
pub const DEFAULT_TOP_N: usize = 10;

/// Everything the report printer needs, computed in one forward pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Top keywords, highest frequency first
    pub keywords: Vec<KeywordEntry>,
    /// SVO triples in document order
    pub svos: Vec<SvoTriple>,
    pub keyword_map: KeywordMap,
}

impl Summary {
    /// Keyword terms in rank order.
    pub fn terms(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.term.as_str()).collect()
    }

    /// One-sentence templated summary interpolating the keyword terms.
    pub fn headline(&self) -> String {
        format!(
            "This text is mainly about: {}.",
            self.terms().join(", ")
        )
    }
}

/// Run the full summary pipeline over raw document text.
pub fn summarize(model: &dyn LanguageModel, text: &str, top_n: usize) -> Result<Summary> {
    let normalized = normalize(model, text)?;
    let svos = extract_svos(model, text)?;
    let keywords = rank_keywords(model, &normalized, top_n)?;
    let keyword_map = build_keyword_map(&keywords, &svos);

    info!(
        chars = text.len(),
        keywords = keywords.len(),
        svos = svos.len(),
        "Summarized text"
    );

    Ok(Summary {
        keywords,
        svos,
        keyword_map,
    })
}
