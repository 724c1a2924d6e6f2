use serde::Serialize;
use std::fmt;
use std::io;

use crate::config::EngineConfig;
use crate::documents::Document;
use crate::source::LineSource;
use crate::temporal::{classify, TemporalKind};
use crate::tokenizer::tokenize;
use crate::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalToken {
    pub text: String,
    pub kind: TemporalKind,
}

/// Temporal tokens of one relevant document, in reading order.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnswer {
    pub name: String,
    pub score: f64,
    pub tokens: Vec<TemporalToken>,
    /// The document could not be re-read, so `tokens` is empty.
    pub unreadable: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "documents", rename_all = "snake_case")]
pub enum Answer {
    NoRelevantDocument,
    Found(Vec<DocumentAnswer>),
}

impl Answer {
    pub fn documents(&self) -> &[DocumentAnswer] {
        match self {
            Answer::NoRelevantDocument => &[],
            Answer::Found(docs) => docs.as_slice(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::NoRelevantDocument => writeln!(f, "no relevant document found for the query"),
            Answer::Found(docs) => {
                for doc in docs {
                    let words: Vec<&str> = doc.tokens.iter().map(|t| t.text.as_str()).collect();
                    writeln!(f, "{}: {}", doc.name, words.join(","))?;
                }
                Ok(())
            }
        }
    }
}

/// Temporal tokens of `lines`, in order.
pub fn temporal_tokens<S: AsRef<str>>(lines: &[S]) -> Vec<TemporalToken> {
    let mut out = Vec::new();
    for line in lines {
        let tokens = tokenize(line.as_ref());
        for word in tokens.iter() {
            if let Some(kind) = classify(word) {
                out.push(TemporalToken { text: word.to_string(), kind });
            }
        }
    }
    out
}

/// Scans the top-ranked documents for temporal tokens.
#[derive(Debug, Clone)]
pub struct AnswerExtractor {
    pub max_documents: usize,
    pub threshold: f64,
}

impl AnswerExtractor {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self { max_documents: config.max_search_documents, threshold: config.relevance_threshold }
    }

    /// `ranked` must be in descending score order; `sources[doc.id]` is each
    /// document's text. Stops at the first document under the threshold.
    pub fn extract(&self, ranked: &[Document], sources: &mut [Box<dyn LineSource>]) -> Answer {
        let mut found = Vec::new();
        for doc in ranked.iter().take(self.max_documents) {
            if doc.average_tfidf < self.threshold {
                break;
            }
            let lines = match sources.get_mut(doc.id) {
                Some(src) => src.lines(),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "no source for document")),
            };
            let answer = match lines {
                Ok(lines) => DocumentAnswer {
                    name: doc.name.clone(),
                    score: doc.average_tfidf,
                    tokens: temporal_tokens(&lines),
                    unreadable: false,
                },
                Err(source) => {
                    let err = Error::Resource { name: doc.name.clone(), source };
                    tracing::warn!(error = %err, "no answers from unreadable document");
                    DocumentAnswer { name: doc.name.clone(), score: doc.average_tfidf, tokens: Vec::new(), unreadable: true }
                }
            };
            found.push(answer);
        }
        if found.is_empty() {
            Answer::NoRelevantDocument
        } else {
            Answer::Found(found)
        }
    }
}
