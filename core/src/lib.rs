//! TF-IDF document ranking with temporal answer extraction.
//!
//! Documents are ranked against a fixed set of query terms by their average
//! TF-IDF score, and the best matches are scanned for years, month names and
//! weekday names that answer a "when" question.

pub mod answer;
pub mod config;
pub mod documents;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod scoring;
pub mod source;
pub mod temporal;
pub mod terms;
pub mod tokenizer;

pub use answer::{Answer, AnswerExtractor, DocumentAnswer, TemporalToken};
pub use config::EngineConfig;
pub use documents::{Document, DocumentStore};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
pub use source::{FileSource, LineSource, MemorySource};
pub use temporal::TemporalKind;
pub use terms::{QueryTerm, TermIndex};

/// Slot of a query term in every document's term-frequency vector.
pub type TermId = usize;
/// Position of a document in input order.
pub type DocId = usize;
