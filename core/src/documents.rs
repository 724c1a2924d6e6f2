use serde::Serialize;

use crate::{DocId, TermId};

/// Per-document counts gathered in the ingestion pass.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Input position; also the index of the document's line source.
    pub id: DocId,
    pub name: String,
    /// Every token seen, matching or not.
    pub word_count: u32,
    /// Raw counts, one slot per query term.
    pub term_frequency: Vec<u32>,
    pub average_tfidf: f64,
}

impl Document {
    fn new(id: DocId, name: String, term_count: usize) -> Self {
        Self { id, name, word_count: 0, term_frequency: vec![0; term_count], average_tfidf: 0.0 }
    }

    pub fn is_degenerate(&self) -> bool {
        self.word_count == 0
    }
}

/// Documents in input order until ranked, then in rank order.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    docs: Vec<Document>,
    term_count: usize,
}

impl DocumentStore {
    /// Reserve room for `document_count` documents. The zeroed `term_count`
    /// slots of each document are created when [`open`](Self::open) adds it.
    pub fn allocate(document_count: usize, term_count: usize) -> Self {
        Self { docs: Vec::with_capacity(document_count), term_count }
    }

    /// Add a document and return its id.
    pub fn open(&mut self, name: impl Into<String>) -> DocId {
        let id = self.docs.len();
        self.docs.push(Document::new(id, name.into(), self.term_count));
        id
    }

    /// Count one token of document `doc`. `hits` are the term slots the token matched.
    pub fn record_token(&mut self, doc: DocId, hits: &[TermId]) {
        let Some(pos) = self.position(doc) else {
            tracing::warn!(doc, "token recorded for unknown document; ignored");
            return;
        };
        let d = &mut self.docs[pos];
        d.word_count += 1;
        for &slot in hits {
            d.term_frequency[slot] += 1;
        }
    }

    // Ids equal positions until the store is ranked.
    fn position(&self, doc: DocId) -> Option<usize> {
        match self.docs.get(doc) {
            Some(d) if d.id == doc => Some(doc),
            _ => self.docs.iter().position(|d| d.id == doc),
        }
    }

    pub fn term_count(&self) -> usize {
        self.term_count
    }

    pub fn get(&self, doc: DocId) -> Option<&Document> {
        self.position(doc).map(|pos| &self.docs[pos])
    }

    pub fn as_slice(&self) -> &[Document] {
        &self.docs
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Document] {
        &mut self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
