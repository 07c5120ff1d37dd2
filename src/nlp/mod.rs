// Language model layer: tokenization, stop words, and dependency parsing.
//
// Everything downstream consumes a `ParsedDoc` produced through the
// `LanguageModel` trait, so the parser can be swapped or stubbed in tests.

pub mod doc;
pub mod english;
pub mod lexicon;
pub mod traits;
