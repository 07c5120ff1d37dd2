// Frequency-based keyword ranking.
//
// Counts are case-sensitive on surface text. Ties keep first-seen order: the
// counts are collected in insertion order and then stable-sorted by
// descending frequency.

use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;

use super::normalize::is_content;
use crate::nlp::traits::LanguageModel;

/// A ranked keyword and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub term: String,
    /// Occurrence count, always at least 1
    pub frequency: usize,
}

/// Tokenize `text`, keep alphabetic non-stop tokens, and return the `top_n`
/// most frequent ones.
pub fn rank_keywords(
    model: &dyn LanguageModel,
    text: &str,
    top_n: usize,
) -> Result<Vec<KeywordEntry>> {
    let doc = model.parse(text)?;
    let terms = doc
        .tokens()
        .iter()
        .filter(|t| is_content(t))
        .map(|t| t.text.as_str());

    let ranked = rank_terms(terms, top_n);
    if let Some(top) = ranked.first() {
        debug!(
            keywords = ranked.len(),
            top_keyword = %top.term,
            top_frequency = top.frequency,
            "Ranked keywords"
        );
    }
    Ok(ranked)
}

/// Count terms and return the `top_n` most frequent, ties in first-seen order.
pub fn rank_terms<'a>(terms: impl IntoIterator<Item = &'a str>, top_n: usize) -> Vec<KeywordEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<KeywordEntry> = Vec::new();

    for term in terms {
        match positions.get(term) {
            Some(&i) => entries[i].frequency += 1,
            None => {
                positions.insert(term, entries.len());
                entries.push(KeywordEntry {
                    term: term.to_string(),
                    frequency: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(top_n);
    entries
}
