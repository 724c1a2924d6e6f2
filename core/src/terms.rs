use serde::Serialize;
use std::collections::HashMap;

use crate::TermId;

/// One query term and its corpus statistics.
#[derive(Debug, Clone, Serialize)]
pub struct QueryTerm {
    /// Uppercase form; tokens are compared against this exactly.
    pub text: String,
    /// Number of documents containing the term at least once.
    pub document_frequency: u32,
    #[serde(skip)]
    seen_in_current_document: bool,
}

impl QueryTerm {
    fn new(text: String) -> Self {
        Self { text, document_frequency: 0, seen_in_current_document: false }
    }

    pub fn seen_in_current_document(&self) -> bool {
        self.seen_in_current_document
    }
}

/// Query terms in registration order, with a lookup from text to slots.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    terms: Vec<QueryTerm>,
    lookup: HashMap<String, Vec<TermId>>,
    dedupe: bool,
}

impl TermIndex {
    /// An index that ignores repeated registrations when `dedupe` is set.
    pub fn new(dedupe: bool) -> Self {
        Self { dedupe, ..Self::default() }
    }

    /// Register a term in uppercase form. Returns its slot, or `None` when the
    /// term was a duplicate and deduplication is on.
    pub fn register(&mut self, term: &str) -> Option<TermId> {
        let text = term.to_uppercase();
        let slots = self.lookup.entry(text.clone()).or_default();
        if self.dedupe && !slots.is_empty() {
            return None;
        }
        let id = self.terms.len();
        slots.push(id);
        self.terms.push(QueryTerm::new(text));
        Some(id)
    }

    /// Slots whose term equals `token`. More than one only when duplicates are kept.
    pub fn slots_for(&self, token: &str) -> &[TermId] {
        self.lookup.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn reset_document_flags(&mut self) {
        for term in &mut self.terms {
            term.seen_in_current_document = false;
        }
    }

    pub fn mark_seen(&mut self, id: TermId) {
        if let Some(term) = self.terms.get_mut(id) {
            term.seen_in_current_document = true;
        }
    }

    /// Flag every slot matching `token` as seen and return those slots.
    pub fn mark_token(&mut self, token: &str) -> &[TermId] {
        let Some(slots) = self.lookup.get(token) else {
            return &[];
        };
        for &id in slots {
            self.terms[id].seen_in_current_document = true;
        }
        slots
    }

    /// Zero every document frequency and flag before a fresh ingestion pass.
    pub fn reset_frequencies(&mut self) {
        for term in &mut self.terms {
            term.document_frequency = 0;
            term.seen_in_current_document = false;
        }
    }

    /// Count the current document once for every term seen in it.
    pub fn commit_document_frequencies(&mut self) {
        for term in &mut self.terms {
            if term.seen_in_current_document {
                term.document_frequency += 1;
            }
        }
    }

    pub fn get(&self, id: TermId) -> Option<&QueryTerm> {
        self.terms.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
