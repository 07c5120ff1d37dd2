// Keyword map: link each ranked keyword to the SVO triples that mention it.
//
// Matching is a substring test on the subject, verb and object fields, so a
// keyword can pick up triples where it only appears inside a longer word. A
// triple may appear under several keywords.

use super::keywords::KeywordEntry;
use super::svo::SvoTriple;

/// Ordered keyword → related triples mapping. Every ranked keyword has an
/// entry, possibly with no triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMap {
    entries: Vec<(String, Vec<SvoTriple>)>,
}

impl KeywordMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keywords in rank order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Related triples for a keyword, or `None` if it isn't a key.
    pub fn get(&self, keyword: &str) -> Option<&[SvoTriple]> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, svos)| svos.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SvoTriple])> {
        self.entries
            .iter()
            .map(|(k, svos)| (k.as_str(), svos.as_slice()))
    }
}

/// Build the keyword map from ranked keywords and extracted triples.
pub fn build_keyword_map(keywords: &[KeywordEntry], svos: &[SvoTriple]) -> KeywordMap {
    let entries = keywords
        .iter()
        .map(|keyword| {
            let related: Vec<SvoTriple> = svos
                .iter()
                .filter(|svo| svo.mentions(&keyword.term))
                .cloned()
                .collect();
            (keyword.term.clone(), related)
        })
        .collect();

    KeywordMap { entries }
}
