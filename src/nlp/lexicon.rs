// Closed-class word lists and verb morphology for the English parser.
//
// The lists cover the function words the parser needs to find clause
// boundaries. Open-class words (nouns, verbs, adjectives) are guessed from
// suffixes plus a short list of common verbs. All lookups expect lowercase.

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "every", "each", "no", "all", "both", "many", "much", "several",
    "few", "another", "such",
];

/// Determiners that can stand alone as a subject ("This shows ...").
pub const DEMONSTRATIVES: &[&str] = &["this", "that", "these", "those"];

pub const SUBJECT_PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "who", "someone", "everyone", "nobody",
    "something", "everything", "nothing",
];

pub const OBJECT_PRONOUNS: &[&str] = &["me", "him", "us", "them", "whom", "myself", "themselves"];

pub const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "to", "from", "into", "onto", "over",
    "under", "after", "before", "through", "between", "among", "against", "during", "without",
    "within", "across", "along", "around", "behind", "beyond", "near", "since", "toward",
    "towards", "upon", "via", "per", "than",
];

pub const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

pub const NEGATIONS: &[&str] = &["not", "n't", "never"];

const BE_FORMS: &[&str] = &["be", "am", "is", "are", "was", "were", "been", "being"];

const OTHER_AUXILIARIES: &[&str] = &[
    "has", "have", "had", "having", "do", "does", "did", "will", "would", "can", "could", "shall",
    "should", "may", "might", "must", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
    "hadn't", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't", "cannot", "couldn't",
    "shouldn't", "mustn't",
];

const ADVERBS: &[&str] = &[
    "also", "often", "always", "usually", "sometimes", "already", "still", "just", "even", "only",
    "very", "too", "then", "now", "here", "there", "however", "therefore", "thus", "soon",
    "again", "ever", "almost", "quite", "rather", "perhaps",
];

const ADJECTIVES: &[&str] = &[
    "big", "small", "large", "new", "old", "good", "bad", "great", "high", "low", "long",
    "short", "young", "little", "important", "different", "main", "major", "key", "first",
    "last", "next", "other", "same", "own", "whole",
];

/// Common verbs in base form. Inflected forms are matched by stripping suffixes.
const VERBS: &[&str] = &[
    "make", "take", "give", "get", "see", "know", "find", "use", "need", "want", "like", "love",
    "hate", "show", "provide", "include", "help", "build", "create", "describe", "explain",
    "offer", "support", "require", "allow", "contain", "produce", "present", "study", "analyze",
    "discuss", "improve", "reduce", "increase", "develop", "affect", "cause", "reach", "chase",
    "eat", "read", "write", "hold", "keep", "bring", "buy", "play", "watch", "change", "lead",
    "follow", "call", "ask", "tell", "say", "think", "become", "begin", "run", "meet", "pay",
    "send", "win", "lose", "drive", "grow", "draw", "hear", "feel", "leave", "mean", "spend",
    "teach", "choose", "bark", "sleep", "live", "work", "open", "close", "visit", "enjoy",
    "form", "serve", "apply", "define", "identify", "measure", "propose", "examine", "review",
    "report", "test", "solve", "design", "manage", "control", "protect", "prevent", "generate",
    "extract", "process", "compute", "store", "return", "receive", "deliver", "share", "learn",
];

const IRREGULAR_PAST: &[&str] = &[
    "made", "took", "gave", "got", "saw", "knew", "found", "went", "came", "said", "told",
    "thought", "became", "began", "ran", "wrote", "ate", "built", "brought", "bought", "held",
    "kept", "left", "lost", "met", "paid", "sent", "stood", "taught", "won", "chose", "drove",
    "flew", "grew", "drew", "fell", "felt", "heard", "led", "meant", "spent", "slept", "sold",
];

const IRREGULAR_PARTICIPLES: &[&str] = &[
    "written", "given", "taken", "seen", "known", "done", "made", "built", "found", "held",
    "kept", "left", "lost", "paid", "sent", "told", "brought", "bought", "taught", "thought",
    "shown", "chosen", "driven", "grown", "drawn", "eaten", "begun", "run", "won", "sold",
    "led", "met", "said", "heard", "felt", "spent", "become", "fallen", "flown", "gone",
];

pub fn is_be(word: &str) -> bool {
    BE_FORMS.contains(&word)
}

pub fn is_auxiliary(word: &str) -> bool {
    is_be(word) || OTHER_AUXILIARIES.contains(&word)
}

pub fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(&word) || (word.len() > 4 && word.ends_with("ly"))
}

pub fn is_adjective(word: &str) -> bool {
    const SUFFIXES: &[&str] = &["able", "ible", "al", "ful", "ous", "ive", "less", "ic", "ish"];
    ADJECTIVES.contains(&word)
        || (word.len() > 4 && SUFFIXES.iter().any(|s| word.ends_with(s)))
}

/// Past participle, as used after a form of "be" in passive clauses.
pub fn is_participle(word: &str) -> bool {
    IRREGULAR_PARTICIPLES.contains(&word)
        || (word.len() > 4 && (word.ends_with("ed") || word.ends_with("en")))
}

/// Whether the word looks like an inflected or base-form verb.
pub fn is_verb_form(word: &str) -> bool {
    if VERBS.contains(&word)
        || IRREGULAR_PAST.contains(&word)
        || IRREGULAR_PARTICIPLES.contains(&word)
    {
        return true;
    }
    if (word.len() > 4 && word.ends_with("ed")) || (word.len() > 5 && word.ends_with("ing")) {
        return true;
    }

    let known = |stem: &str| VERBS.contains(&stem);
    if let Some(stem) = word.strip_suffix("ies") {
        return known(&format!("{stem}y"));
    }
    word.strip_suffix("es").is_some_and(known) || word.strip_suffix('s').is_some_and(known)
}
