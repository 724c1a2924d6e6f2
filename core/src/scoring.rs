//! Smoothed TF-IDF scoring.
//!
//! `tf = count / word_count`, `idf = ln(N) - ln(df) + 1`, and a document's
//! score is the mean TF-IDF over all query terms.

use crate::documents::DocumentStore;
use crate::terms::TermIndex;
use crate::{Error, Result};

/// IDF for a term found in `document_frequency` of `total_documents` documents.
/// Exactly 1.0 when `disable_df` is set or the term never occurs.
pub fn idf(document_frequency: u32, total_documents: usize, disable_df: bool) -> f64 {
    if disable_df || document_frequency == 0 {
        return 1.0;
    }
    (total_documents as f64).ln() - (document_frequency as f64).ln() + 1.0
}

/// TF-IDF of one term in one document. Fails with [`Error::DegenerateDocument`]
/// when the document has no words.
pub fn tfidf(
    name: &str,
    term_frequency: u32,
    word_count: u32,
    document_frequency: u32,
    total_documents: usize,
    disable_df: bool,
) -> Result<f64> {
    if word_count == 0 {
        return Err(Error::DegenerateDocument { name: name.to_string() });
    }
    let ntf = term_frequency as f64 / word_count as f64;
    Ok(ntf * idf(document_frequency, total_documents, disable_df))
}

/// Fill in `average_tfidf` for every document. Degenerate documents score 0
/// and their names are returned.
pub fn score_documents(store: &mut DocumentStore, terms: &TermIndex, disable_df: bool) -> Vec<String> {
    let total = store.len();
    let term_count = terms.len();
    let mut degenerate = Vec::new();
    if term_count == 0 {
        return degenerate;
    }
    for doc in store.as_mut_slice() {
        let mut sum = 0.0;
        let mut failed = None;
        for (term, &tf) in terms.iter().zip(&doc.term_frequency) {
            match tfidf(&doc.name, tf, doc.word_count, term.document_frequency, total, disable_df) {
                Ok(v) => sum += v,
                Err(e) => {
                    failed = Some(e);
                    break;
                }
            }
        }
        doc.average_tfidf = match failed {
            Some(e) => {
                tracing::warn!(document = %doc.name, error = %e, "scoring document as 0");
                degenerate.push(doc.name.clone());
                0.0
            }
            None => sum / term_count as f64,
        };
        tracing::debug!(document = %doc.name, score = doc.average_tfidf, "scored");
    }
    degenerate
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn idf_smoothing() {
        assert!((idf(1, 2, false) - (2f64.ln() + 1.0)).abs() < EPS);
        assert!((idf(2, 2, false) - 1.0).abs() < EPS);
        assert!(idf(1, 10, false) > idf(5, 10, false));
    }

    #[test]
    fn idf_neutral_cases() {
        assert_eq!(idf(0, 5, false), 1.0);
        assert_eq!(idf(3, 5, true), 1.0);
    }

    #[test]
    fn tfidf_normalizes_by_word_count() {
        let v = tfidf("a", 2, 3, 1, 2, false).unwrap();
        assert!((v - (2.0 / 3.0) * (2f64.ln() + 1.0)).abs() < EPS);
        assert_eq!(tfidf("a", 0, 3, 0, 2, false).unwrap(), 0.0);
    }

    #[test]
    fn tfidf_rejects_empty_document() {
        let err = tfidf("empty.txt", 0, 0, 0, 1, false).unwrap_err();
        assert!(matches!(err, Error::DegenerateDocument { ref name } if name == "empty.txt"));
    }

    #[test]
    fn averages_over_terms_and_zeroes_degenerate() {
        let mut terms = TermIndex::new(true);
        terms.register("cat");
        terms.register("dog");
        let mut store = DocumentStore::allocate(2, 2);
        let a = store.open("a");
        store.open("empty");
        store.record_token(a, &[0]);
        store.record_token(a, &[]);
        terms.reset_document_flags();
        terms.mark_seen(0);
        terms.commit_document_frequencies();

        let degenerate = score_documents(&mut store, &terms, false);
        assert_eq!(degenerate, vec!["empty".to_string()]);
        let docs = store.as_slice();
        let expected = (0.5 * (2f64.ln() + 1.0) + 0.0) / 2.0;
        assert!((docs[0].average_tfidf - expected).abs() < EPS);
        assert_eq!(docs[1].average_tfidf, 0.0);
    }
}
