//! Term-weight vectors memoized per catalog snapshot

use std::sync::{Arc, Mutex};
use storefront_catalog::Corpus;
use storefront_index::{TfidfMatrix, TfidfVectorizer};

/// Holds the vectors of the most recent snapshot seen.
///
/// Entries are keyed by the process-wide snapshot id, so one cache can serve
/// several catalog handles. A different id, or a row count that disagrees
/// with the corpus, rebuilds and replaces the entry.
#[derive(Debug, Default)]
pub struct VectorCache {
    entry: Mutex<Option<(u64, Arc<TfidfMatrix>)>>,
}

impl VectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_snapshot(&self) -> Option<u64> {
        let guard = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|(id, _)| *id)
    }

    pub fn get_or_build(
        &self,
        snapshot_id: u64,
        corpus: &Corpus,
        vectorizer: &TfidfVectorizer,
    ) -> Arc<TfidfMatrix> {
        let mut guard = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        if let Some((cached, matrix)) = guard.as_ref() {
            if *cached == snapshot_id && matrix.len() == corpus.len() {
                tracing::debug!(snapshot_id, "vector cache hit");
                return Arc::clone(matrix);
            }
        }

        tracing::debug!(snapshot_id, items = corpus.len(), "vector cache miss");
        let matrix = Arc::new(vectorizer.fit_transform(&corpus.tags()));
        *guard = Some((snapshot_id, Arc::clone(&matrix)));
        matrix
    }

    pub fn clear(&self) {
        let mut guard = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}
