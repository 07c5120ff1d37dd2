// keysum: keyword and subject-verb-object summaries for documents
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: load text, parse it, summarize it, print the report.

pub mod config;
pub mod nlp;
pub mod output;
pub mod source;
pub mod summary;
