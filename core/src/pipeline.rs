use crate::answer::{Answer, AnswerExtractor};
use crate::config::EngineConfig;
use crate::documents::{Document, DocumentStore};
use crate::rank;
use crate::scoring;
use crate::source::LineSource;
use crate::terms::{QueryTerm, TermIndex};
use crate::tokenizer::tokenize;
use crate::{Error, Result};

/// Owns the query terms, the document statistics and the run settings.
///
/// The passes run in order: [`ingest`](Self::ingest), [`score`](Self::score),
/// [`rank`](Self::rank), then [`answer`](Self::answer). [`Pipeline::run`]
/// does all of them. Ingesting again starts the statistics over, and
/// [`answer`](Self::answer) ranks first when the documents are not ranked yet.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: EngineConfig,
    terms: TermIndex,
    documents: DocumentStore,
    degenerate: Vec<String>,
    ranked: bool,
}

impl Pipeline {
    /// Register `queries` in order. At least one term must survive registration.
    pub fn new<I, S>(queries: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let mut terms = TermIndex::new(config.dedupe_queries);
        for q in queries {
            if terms.register(q.as_ref()).is_none() {
                tracing::debug!(term = q.as_ref(), "dropped duplicate query term");
            }
        }
        if terms.is_empty() {
            return Err(Error::NoQueries);
        }
        Ok(Self { config, terms, documents: DocumentStore::default(), degenerate: Vec::new(), ranked: false })
    }

    /// Frequency pass: word counts, term frequencies and document frequencies.
    pub fn ingest(&mut self, sources: &mut [Box<dyn LineSource>]) -> Result<()> {
        if sources.is_empty() {
            return Err(Error::NoDocuments);
        }
        self.terms.reset_frequencies();
        self.degenerate.clear();
        self.ranked = false;
        self.documents = DocumentStore::allocate(sources.len(), self.terms.len());
        for src in sources.iter_mut() {
            let doc = self.documents.open(src.name());
            let lines = src
                .lines()
                .map_err(|source| Error::Resource { name: src.name().to_string(), source })?;
            self.terms.reset_document_flags();
            for line in &lines {
                let tokens = tokenize(line);
                for word in tokens.iter() {
                    let hits = self.terms.mark_token(word);
                    self.documents.record_token(doc, hits);
                }
            }
            self.terms.commit_document_frequencies();
        }
        tracing::info!(num_docs = self.documents.len(), num_terms = self.terms.len(), "ingested documents");
        Ok(())
    }

    pub fn score(&mut self) {
        self.degenerate = scoring::score_documents(&mut self.documents, &self.terms, self.config.disable_df);
        self.ranked = false;
    }

    pub fn rank(&mut self) {
        rank::rank(&mut self.documents);
        self.ranked = true;
    }

    /// Answer pass over the ranked documents. `sources` must be in input order.
    pub fn answer(&mut self, sources: &mut [Box<dyn LineSource>]) -> Answer {
        if !self.ranked {
            self.rank();
        }
        AnswerExtractor::from_config(&self.config).extract(self.documents.as_slice(), sources)
    }

    /// Every pass, start to finish.
    pub fn run<I, S>(queries: I, sources: &mut [Box<dyn LineSource>], config: EngineConfig) -> Result<(Self, Answer)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pipeline = Self::new(queries, config)?;
        pipeline.ingest(sources)?;
        pipeline.score();
        pipeline.rank();
        let answer = pipeline.answer(sources);
        tracing::info!(relevant = answer.documents().len(), "answer extraction complete");
        Ok((pipeline, answer))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn terms(&self) -> &TermIndex {
        &self.terms
    }

    /// Documents in their current order (ranked once [`rank`](Self::rank) ran).
    pub fn documents(&self) -> &[Document] {
        self.documents.as_slice()
    }

    pub fn degenerate_documents(&self) -> &[String] {
        &self.degenerate
    }

    pub fn word_counts(&self) -> Vec<(&str, u32)> {
        self.documents().iter().map(|d| (d.name.as_str(), d.word_count)).collect()
    }

    /// Raw term frequencies per document, each row in query order.
    pub fn term_frequencies(&self) -> Vec<(&str, Vec<(&str, u32)>)> {
        self.documents()
            .iter()
            .map(|d| {
                let row = self.terms.iter().map(|t| t.text.as_str()).zip(d.term_frequency.iter().copied()).collect();
                (d.name.as_str(), row)
            })
            .collect()
    }

    pub fn document_frequencies(&self) -> Vec<(&str, u32)> {
        self.terms.iter().map(|t: &QueryTerm| (t.text.as_str(), t.document_frequency)).collect()
    }

    pub fn average_tfidf(&self) -> Vec<(&str, f64)> {
        self.documents().iter().map(|d| (d.name.as_str(), d.average_tfidf)).collect()
    }
}
