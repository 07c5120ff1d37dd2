// Built-in English language model.
//
// A rule-based stand-in for a statistical parser. Text is split into
// sentences and words on unicode boundaries, stop-word flags come from the
// `stop-words` NLTK English list, and each sentence gets a shallow dependency
// parse: subject noun phrase, auxiliary chain, main verb, then complements.
// Tokens the parser can't place hang off the sentence root as `dep`.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::doc::{DepLabel, ParsedDoc, Token};
use super::lexicon;
use super::traits::LanguageModel;

/// English tokenizer and shallow dependency parser.
pub struct EnglishModel {
    stop_words: HashSet<String>,
}

impl EnglishModel {
    /// Build the model, loading the NLTK English stop-word list (function
    /// words only).
    pub fn new() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self {
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Case-insensitive stop-word check.
    pub fn is_stop(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

impl Default for EnglishModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel for EnglishModel {
    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        let mut tokens = Vec::new();
        let mut sentence_count = 0usize;

        for sentence in text.unicode_sentences() {
            let words: Vec<&str> = sentence
                .split_word_bounds()
                .filter(|w| !w.trim().is_empty())
                .collect();
            if words.is_empty() {
                continue;
            }

            let offset = tokens.len();
            let arcs = SentenceParser::new(&words).parse();
            for (word, (dep, head)) in words.iter().zip(arcs) {
                tokens.push(Token::new(word, self.is_stop(word), dep, offset + head));
            }
            sentence_count += 1;
        }

        debug!(
            tokens = tokens.len(),
            sentences = sentence_count,
            "Parsed text"
        );
        Ok(ParsedDoc::new(tokens))
    }
}

/// Coarse word class, enough to find phrase boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Det,
    Pron,
    ObjPron,
    Prep,
    Aux,
    Neg,
    Cc,
    Adv,
    Num,
    Punct,
    Open,
}

fn tag(word: &str) -> Tag {
    if !word.chars().any(char::is_alphanumeric) {
        Tag::Punct
    } else if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        Tag::Num
    } else if lexicon::NEGATIONS.contains(&word) {
        Tag::Neg
    } else if lexicon::is_auxiliary(word) {
        Tag::Aux
    } else if lexicon::DETERMINERS.contains(&word) {
        Tag::Det
    } else if lexicon::SUBJECT_PRONOUNS.contains(&word) {
        Tag::Pron
    } else if lexicon::OBJECT_PRONOUNS.contains(&word) {
        Tag::ObjPron
    } else if lexicon::PREPOSITIONS.contains(&word) {
        Tag::Prep
    } else if lexicon::COORDINATORS.contains(&word) {
        Tag::Cc
    } else if lexicon::is_adverb(word) {
        Tag::Adv
    } else {
        Tag::Open
    }
}

/// The skeleton of a clause: who does what.
#[derive(Debug)]
struct Clause {
    subject: usize,
    /// Index where the subject noun phrase starts (determiners, modifiers)
    phrase_start: usize,
    verb: usize,
    copula: bool,
    passive: bool,
}

/// Parses one sentence into `(label, head)` arcs with sentence-local indices.
struct SentenceParser {
    lower: Vec<String>,
    tags: Vec<Tag>,
    arcs: Vec<(DepLabel, usize)>,
}

impl SentenceParser {
    fn new(words: &[&str]) -> Self {
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let tags = lower.iter().map(|w| tag(w)).collect();
        Self {
            lower,
            tags,
            arcs: vec![(DepLabel::Dep, 0); words.len()],
        }
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn word(&self, i: usize) -> &str {
        &self.lower[i]
    }

    fn tag_at(&self, i: usize) -> Option<Tag> {
        self.tags.get(i).copied()
    }

    fn parse(mut self) -> Vec<(DepLabel, usize)> {
        let start = self.skip_preamble();
        match self.find_clause(start) {
            Some(clause) => self.attach_clause(&clause, start),
            None => self.attach_fragment(),
        }
        self.arcs
    }

    /// Skip leading adverbs, conjunctions and prepositional phrases
    /// ("However, ...", "In the morning the cat ...").
    fn skip_preamble(&self) -> usize {
        let n = self.len();
        let mut i = 0;
        loop {
            while i < n && matches!(self.tags[i], Tag::Adv | Tag::Cc | Tag::Punct) {
                i += 1;
            }
            if self.tag_at(i) != Some(Tag::Prep) {
                return i;
            }
            // the prepositional object, then an optional comma
            i = self.phrase_end(i + 1, n);
            if i < n && self.word(i) == "," {
                i += 1;
            }
        }
    }

    /// End (exclusive) of the noun phrase starting at `i`.
    fn phrase_end(&self, i: usize, limit: usize) -> usize {
        let mut j = i;
        if j < limit && matches!(self.tags[j], Tag::Pron | Tag::ObjPron) {
            return j + 1;
        }
        if j < limit && self.tags[j] == Tag::Det {
            j += 1;
        }
        while j < limit && matches!(self.tags[j], Tag::Open | Tag::Num) {
            j += 1;
        }
        j.max((i + 1).min(limit))
    }

    fn find_clause(&self, start: usize) -> Option<Clause> {
        let n = self.len();
        let s = start;
        match self.tag_at(s)? {
            Tag::Pron => self.predicate_after(s, s, s + 1),
            Tag::Det | Tag::Open | Tag::Num => {
                let run_start = if self.tags[s] == Tag::Det { s + 1 } else { s };
                let mut run_end = run_start;
                while run_end < n && matches!(self.tags[run_end], Tag::Open | Tag::Num) {
                    run_end += 1;
                }
                let run_len = run_end - run_start;

                // bare determiner used as a pronoun: "This is ...", "That shows ..."
                if run_len == 0 {
                    return self.predicate_after(s, s, s + 1);
                }
                if self.tags[s] == Tag::Det
                    && lexicon::DEMONSTRATIVES.contains(&self.word(s))
                    && lexicon::is_verb_form(self.word(run_start))
                {
                    return Some(self.simple_clause(s, s, run_start));
                }

                // noun phrase followed by an auxiliary chain
                let mut after = run_end;
                while after < n && self.tags[after] == Tag::Adv {
                    after += 1;
                }
                if matches!(self.tag_at(after), Some(Tag::Aux | Tag::Neg)) {
                    return self.predicate_after(run_end - 1, s, run_end);
                }

                // verb buried in the run: "The big cat chased ...", "Cats chase mice"
                if let Some(k) =
                    (run_start + 1..run_end).find(|&k| lexicon::is_verb_form(self.word(k)))
                {
                    return Some(self.simple_clause(k - 1, s, k));
                }
                if run_len >= 2
                    && matches!(
                        self.tag_at(run_end),
                        Some(Tag::Det | Tag::Pron | Tag::ObjPron | Tag::Prep)
                    )
                {
                    return Some(self.simple_clause(run_end - 2, s, run_end - 1));
                }

                self.predicate_after(run_end - 1, s, run_end)
            }
            _ => None,
        }
    }

    fn simple_clause(&self, subject: usize, phrase_start: usize, verb: usize) -> Clause {
        Clause {
            subject,
            phrase_start,
            verb,
            copula: false,
            passive: false,
        }
    }

    /// Find the predicate that follows a subject ending at `from - 1`.
    fn predicate_after(&self, subject: usize, phrase_start: usize, from: usize) -> Option<Clause> {
        let n = self.len();
        let mut i = from;
        while i < n && self.tags[i] == Tag::Adv {
            i += 1;
        }

        match self.tag_at(i)? {
            Tag::Aux | Tag::Neg => {
                let mut chain = Vec::new();
                while i < n && matches!(self.tags[i], Tag::Aux | Tag::Neg | Tag::Adv) {
                    chain.push(i);
                    i += 1;
                }

                if i < n && self.tags[i] == Tag::Open && lexicon::is_verb_form(self.word(i)) {
                    let passive = chain.iter().any(|&a| lexicon::is_be(self.word(a)))
                        && lexicon::is_participle(self.word(i));
                    return Some(Clause {
                        subject,
                        phrase_start,
                        verb: i,
                        copula: false,
                        passive,
                    });
                }

                // copular clause: the last auxiliary heads the predicate
                let verb = *chain.iter().rev().find(|&&a| self.tags[a] == Tag::Aux)?;
                Some(Clause {
                    subject,
                    phrase_start,
                    verb,
                    copula: true,
                    passive: false,
                })
            }
            Tag::Open if lexicon::is_verb_form(self.word(i)) => {
                Some(self.simple_clause(subject, phrase_start, i))
            }
            _ => None,
        }
    }

    fn attach_clause(&mut self, clause: &Clause, start: usize) {
        let root = clause.verb;
        self.arcs[root] = (DepLabel::Root, root);

        self.attach_complements(0, start, root, false, false);

        let subject_label = if clause.passive {
            DepLabel::NsubjPass
        } else {
            DepLabel::Nsubj
        };
        self.arcs[clause.subject] = (subject_label, root);
        for m in clause.phrase_start..clause.subject {
            self.arcs[m] = (self.modifier_label(m), clause.subject);
        }

        for i in clause.subject + 1..root {
            let label = match self.tags[i] {
                Tag::Neg => DepLabel::Neg,
                Tag::Adv => DepLabel::Advmod,
                Tag::Aux if clause.passive && lexicon::is_be(self.word(i)) => DepLabel::AuxPass,
                Tag::Aux => DepLabel::Aux,
                Tag::Punct => DepLabel::Punct,
                _ => DepLabel::Dep,
            };
            self.arcs[i] = (label, root);
        }

        let n = self.len();
        self.attach_complements(root + 1, n, root, true, clause.copula);
    }

    fn modifier_label(&self, i: usize) -> DepLabel {
        match self.tags[i] {
            Tag::Det => DepLabel::Det,
            Tag::Num => DepLabel::Nummod,
            Tag::Adv => DepLabel::Advmod,
            _ if lexicon::is_adjective(self.word(i)) => DepLabel::Amod,
            _ => DepLabel::Compound,
        }
    }

    /// Attach tokens in `from..to` under `governor`. With `objects` set, the
    /// first bare noun phrase becomes the object (`attr` after a copula).
    fn attach_complements(
        &mut self,
        from: usize,
        to: usize,
        governor: usize,
        objects: bool,
        copula: bool,
    ) {
        let mut gov = governor;
        let mut object_taken = !objects;
        let mut prep: Option<usize> = None;
        let mut last_np: Option<usize> = None;
        let mut after_cc = false;
        let mut i = from;

        while i < to {
            match self.tags[i] {
                Tag::Punct => {
                    self.arcs[i] = (DepLabel::Punct, governor);
                    if matches!(self.word(i), "," | ";" | ":") {
                        prep = None;
                    }
                    i += 1;
                }
                Tag::Prep => {
                    let head = if self.word(i) == "of" {
                        last_np.unwrap_or(gov)
                    } else {
                        gov
                    };
                    self.arcs[i] = (DepLabel::Prep, head);
                    prep = Some(i);
                    i += 1;
                }
                Tag::Adv => {
                    self.arcs[i] = (DepLabel::Advmod, gov);
                    i += 1;
                }
                Tag::Neg => {
                    self.arcs[i] = (DepLabel::Neg, gov);
                    i += 1;
                }
                Tag::Aux => {
                    self.arcs[i] = (DepLabel::Dep, gov);
                    i += 1;
                }
                Tag::Cc => {
                    self.arcs[i] = (DepLabel::Cc, gov);
                    after_cc = true;
                    i += 1;
                    // coordinated verb: "... and ate the cheese"
                    if objects
                        && i < to
                        && self.tags[i] == Tag::Open
                        && lexicon::is_verb_form(self.word(i))
                    {
                        self.arcs[i] = (DepLabel::Conj, governor);
                        gov = i;
                        object_taken = false;
                        prep = None;
                        after_cc = false;
                        i += 1;
                    }
                }
                Tag::Det | Tag::Pron | Tag::ObjPron | Tag::Open | Tag::Num => {
                    let end = self.phrase_end(i, to);
                    let head = end - 1;
                    for m in i..head {
                        self.arcs[m] = (self.modifier_label(m), head);
                    }

                    self.arcs[head] = if let Some(p) = prep.take() {
                        (DepLabel::Pobj, p)
                    } else if !object_taken {
                        object_taken = true;
                        let label = if copula && gov == governor {
                            DepLabel::Attr
                        } else {
                            DepLabel::Dobj
                        };
                        (label, gov)
                    } else if after_cc {
                        (DepLabel::Conj, last_np.unwrap_or(gov))
                    } else {
                        (DepLabel::Dep, gov)
                    };

                    last_np = Some(head);
                    after_cc = false;
                    i = end;
                }
            }
        }
    }

    /// No clause found: hang everything off the first content word.
    fn attach_fragment(&mut self) {
        let n = self.len();
        let root = (0..n)
            .find(|&i| self.tags[i] == Tag::Open)
            .or_else(|| (0..n).find(|&i| self.tags[i] != Tag::Punct))
            .unwrap_or(0);

        for i in 0..n {
            self.arcs[i] = if i == root {
                (DepLabel::Root, root)
            } else if self.tags[i] == Tag::Punct {
                (DepLabel::Punct, root)
            } else {
                (DepLabel::Dep, root)
            };
        }
    }
}
