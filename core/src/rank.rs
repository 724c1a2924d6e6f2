use std::cmp::Ordering;

use crate::documents::{Document, DocumentStore};

/// Descending by score; equal scores keep input order.
fn by_score_desc(a: &Document, b: &Document) -> Ordering {
    b.average_tfidf.total_cmp(&a.average_tfidf).then(a.id.cmp(&b.id))
}

/// Reorder the store by descending average TF-IDF.
pub fn rank(store: &mut DocumentStore) {
    store.as_mut_slice().sort_by(by_score_desc);
}

/// True when every adjacent pair is in descending score order.
pub fn is_ranked(docs: &[Document]) -> bool {
    docs.windows(2).all(|w| w[0].average_tfidf >= w[1].average_tfidf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(scores: &[f64]) -> DocumentStore {
        let mut store = DocumentStore::allocate(scores.len(), 1);
        for (i, _) in scores.iter().enumerate() {
            store.open(format!("d{i}"));
        }
        for (doc, &s) in store.as_mut_slice().iter_mut().zip(scores) {
            doc.average_tfidf = s;
        }
        store
    }

    #[test]
    fn sorts_descending() {
        let mut store = store_with(&[0.1, 0.7, 0.0, 0.3]);
        rank(&mut store);
        let ids: Vec<usize> = store.as_slice().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2]);
        assert!(is_ranked(store.as_slice()));
    }

    #[test]
    fn ties_keep_input_order() {
        let mut store = store_with(&[0.2, 0.5, 0.2, 0.5, 0.2]);
        rank(&mut store);
        let ids: Vec<usize> = store.as_slice().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn lookup_by_id_survives_ranking() {
        let mut store = store_with(&[0.1, 0.9]);
        rank(&mut store);
        assert_eq!(store.get(0).unwrap().name, "d0");
        assert_eq!(store.as_slice()[0].name, "d1");
    }
}
