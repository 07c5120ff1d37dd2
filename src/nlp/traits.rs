// Language model trait: the injected parsing collaborator.
//
// The model is built once in `main` and passed by reference to every stage
// that needs a parse. Tests substitute a stub that returns a hand-built tree.

use super::doc::ParsedDoc;
use anyhow::Result;

/// Trait for turning raw text into a dependency-parsed document.
pub trait LanguageModel {
    /// Tokenize and parse `text`. Tokens come back in document order.
    fn parse(&self, text: &str) -> Result<ParsedDoc>;
}
