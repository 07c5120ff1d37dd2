// Subject-verb-object extraction over a dependency parse.
//
// For every sentence root, the subject is the first immediate left child
// labelled nsubj/nsubjpass and the object is the first immediate right child
// labelled dobj/pobj/attr. Roots missing either side are skipped, so a
// document yields at most one triple per root. Deeper structure (clauses
// hanging off conjuncts, agents under prepositions) is not searched.

use std::fmt;

use anyhow::Result;
use tracing::debug;

use crate::nlp::doc::{DepLabel, ParsedDoc};
use crate::nlp::traits::LanguageModel;

/// Dependency labels that mark a root's subject.
pub const SUBJECT_LABELS: [DepLabel; 2] = [DepLabel::Nsubj, DepLabel::NsubjPass];

/// Dependency labels that mark a root's object.
pub const OBJECT_LABELS: [DepLabel; 3] = [DepLabel::Dobj, DepLabel::Pobj, DepLabel::Attr];

/// A (subject, verb, object) triple taken from one root verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SvoTriple {
    pub subject: String,
    pub verb: String,
    pub object: String,
}

impl SvoTriple {
    pub fn new(subject: &str, verb: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            verb: verb.to_string(),
            object: object.to_string(),
        }
    }

    /// Substring test against all three fields. "cat" matches "category".
    pub fn mentions(&self, term: &str) -> bool {
        self.subject.contains(term) || self.verb.contains(term) || self.object.contains(term)
    }
}

impl fmt::Display for SvoTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} → {}", self.subject, self.verb, self.object)
    }
}

/// Parse raw text and extract its SVO triples in document order.
pub fn extract_svos(model: &dyn LanguageModel, text: &str) -> Result<Vec<SvoTriple>> {
    let doc = model.parse(text)?;
    Ok(svos_from_doc(&doc))
}

/// Extract SVO triples from an already-parsed document.
pub fn svos_from_doc(doc: &ParsedDoc) -> Vec<SvoTriple> {
    let mut roots = 0usize;
    let svos: Vec<SvoTriple> = doc
        .roots()
        .inspect(|_| roots += 1)
        .filter_map(|root| {
            let subject = doc
                .lefts(root)
                .find(|t| SUBJECT_LABELS.contains(&t.dep))?;
            let object = doc
                .rights(root)
                .find(|t| OBJECT_LABELS.contains(&t.dep))?;
            let verb = &doc.tokens()[root];
            Some(SvoTriple::new(&subject.text, &verb.text, &object.text))
        })
        .collect();

    debug!(roots, triples = svos.len(), "Extracted SVO triples");
    svos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::doc::Token;

    fn tok(text: &str, dep: DepLabel, head: usize) -> Token {
        Token::new(text, false, dep, head)
    }

    #[test]
    fn test_transitive_root_yields_triple() {
        // The cat chased the mouse .
        let doc = ParsedDoc::new(vec![
            tok("The", DepLabel::Det, 1),
            tok("cat", DepLabel::Nsubj, 2),
            tok("chased", DepLabel::Root, 2),
            tok("the", DepLabel::Det, 4),
            tok("mouse", DepLabel::Dobj, 2),
            tok(".", DepLabel::Punct, 2),
        ]);
        assert_eq!(
            svos_from_doc(&doc),
            vec![SvoTriple::new("cat", "chased", "mouse")]
        );
    }

    #[test]
    fn test_root_without_object_is_skipped() {
        // Dogs bark .
        let doc = ParsedDoc::new(vec![
            tok("Dogs", DepLabel::Nsubj, 1),
            tok("bark", DepLabel::Root, 1),
            tok(".", DepLabel::Punct, 1),
        ]);
        assert!(svos_from_doc(&doc).is_empty());
    }

    #[test]
    fn test_first_subject_and_object_win() {
        // A B saw C D  (two subjects on the left, two objects on the right)
        let doc = ParsedDoc::new(vec![
            tok("Alice", DepLabel::Nsubj, 2),
            tok("Bob", DepLabel::Nsubj, 2),
            tok("saw", DepLabel::Root, 2),
            tok("Carol", DepLabel::Dobj, 2),
            tok("Dave", DepLabel::Attr, 2),
        ]);
        assert_eq!(
            svos_from_doc(&doc),
            vec![SvoTriple::new("Alice", "saw", "Carol")]
        );
    }

    #[test]
    fn test_subject_on_the_right_does_not_count() {
        // "chased cat mouse" with the nsubj placed after the root
        let doc = ParsedDoc::new(vec![
            tok("chased", DepLabel::Root, 0),
            tok("cat", DepLabel::Nsubj, 0),
            tok("mouse", DepLabel::Dobj, 0),
        ]);
        assert!(svos_from_doc(&doc).is_empty());
    }

    #[test]
    fn test_grandchild_object_is_not_searched() {
        // The report was written by experts : "experts" hangs off "by"
        let doc = ParsedDoc::new(vec![
            tok("The", DepLabel::Det, 1),
            tok("report", DepLabel::NsubjPass, 3),
            tok("was", DepLabel::AuxPass, 3),
            tok("written", DepLabel::Root, 3),
            tok("by", DepLabel::Prep, 3),
            tok("experts", DepLabel::Pobj, 4),
        ]);
        assert!(svos_from_doc(&doc).is_empty());
    }

    #[test]
    fn test_display_uses_arrows() {
        let t = SvoTriple::new("cat", "chased", "mouse");
        assert_eq!(t.to_string(), "cat → chased → mouse");
    }

    #[test]
    fn test_mentions_is_substring_match() {
        let t = SvoTriple::new("category", "lists", "items");
        assert!(t.mentions("cat"));
        assert!(t.mentions("list"));
        assert!(!t.mentions("dog"));
    }
}
