// Parsed document model: tokens plus their dependency arcs.
//
// Each token records the index of its syntactic head. A sentence root points
// at itself. Left and right children are derived from position: a child that
// precedes its head is a left dependent, one that follows is a right dependent.

use std::fmt;

/// Dependency relation between a token and its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepLabel {
    Root,
    Nsubj,
    NsubjPass,
    Aux,
    AuxPass,
    Neg,
    Det,
    Amod,
    Compound,
    Nummod,
    Dobj,
    Attr,
    Prep,
    Pobj,
    Advmod,
    Cc,
    Conj,
    Punct,
    Dep,
}

impl DepLabel {
    /// The conventional lowercase label ("nsubj", "dobj", ...). Root is "ROOT".
    pub fn as_str(&self) -> &'static str {
        match self {
            DepLabel::Root => "ROOT",
            DepLabel::Nsubj => "nsubj",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::Aux => "aux",
            DepLabel::AuxPass => "auxpass",
            DepLabel::Neg => "neg",
            DepLabel::Det => "det",
            DepLabel::Amod => "amod",
            DepLabel::Compound => "compound",
            DepLabel::Nummod => "nummod",
            DepLabel::Dobj => "dobj",
            DepLabel::Attr => "attr",
            DepLabel::Prep => "prep",
            DepLabel::Pobj => "pobj",
            DepLabel::Advmod => "advmod",
            DepLabel::Cc => "cc",
            DepLabel::Conj => "conj",
            DepLabel::Punct => "punct",
            DepLabel::Dep => "dep",
        }
    }
}

impl fmt::Display for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single token with its lexical flags and dependency arc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text exactly as it appeared in the input
    pub text: String,
    /// True when every character is alphabetic (and the token is non-empty)
    pub is_alpha: bool,
    /// True when the lowercased text is on the model's stop-word list
    pub is_stop: bool,
    pub dep: DepLabel,
    /// Index of the syntactic head within the document; roots point at themselves
    pub head: usize,
}

impl Token {
    /// Build a token, deriving the alphabetic flag from the text.
    pub fn new(text: &str, is_stop: bool, dep: DepLabel, head: usize) -> Self {
        Self {
            text: text.to_string(),
            is_alpha: !text.is_empty() && text.chars().all(char::is_alphabetic),
            is_stop,
            dep,
            head,
        }
    }
}

/// An ordered, read-only sequence of parsed tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    tokens: Vec<Token>,
}

impl ParsedDoc {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Indices of all sentence roots, in document order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.dep == DepLabel::Root)
            .map(|(i, _)| i)
    }

    /// Immediate children of token `index` that precede it.
    pub fn lefts(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        let end = index.min(self.tokens.len());
        self.tokens[..end]
            .iter()
            .filter(move |t| t.head == index)
    }

    /// Immediate children of token `index` that follow it.
    pub fn rights(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        let start = (index + 1).min(self.tokens.len());
        self.tokens[start..]
            .iter()
            .filter(move |t| t.head == index)
    }
}
