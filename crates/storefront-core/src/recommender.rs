//! Content-based similar-item ranking

use crate::cache::VectorCache;
use crate::config::StorefrontConfig;
use crate::error::{RecommendError, Result};
use serde::Serialize;
use std::sync::Arc;
use storefront_catalog::{Corpus, Item, Snapshot};
use storefront_index::{TfidfMatrix, TfidfVectorizer};

/// One ranked item with its display attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Row index in the corpus
    pub index: usize,
    pub name: String,
    pub review_count: u64,
    pub brand: String,
    pub image_url: String,
    pub rating: f64,
    pub score: f64,
}

impl Recommendation {
    fn new(index: usize, item: &Item, score: f64) -> Self {
        Self {
            index,
            name: item.name.clone(),
            review_count: item.review_count,
            brand: item.brand.clone(),
            image_url: item.image_url.clone(),
            rating: item.rating,
            score,
        }
    }
}

/// Rank the `top_n` items most similar to `query_name`, using default settings
pub fn recommend(corpus: &Corpus, query_name: &str, top_n: usize) -> Result<Vec<Recommendation>> {
    Recommender::default().recommend(corpus, query_name, top_n)
}

/// Convert a caller-supplied signed count, rejecting zero and negatives
pub fn top_n_from_signed(top_n: i64) -> Result<usize> {
    match usize::try_from(top_n) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RecommendError::InvalidArgument(format!(
            "top_n must be positive, got {top_n}"
        ))),
    }
}

#[derive(Debug)]
pub struct Recommender {
    vectorizer: TfidfVectorizer,
    cache: Option<VectorCache>,
}

impl Recommender {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new().with_stop_words(config.use_stop_words),
            cache: config.cache_vectors.then(VectorCache::new),
        }
    }

    /// Rank against `corpus`, rebuilding every vector for this call
    pub fn recommend(
        &self,
        corpus: &Corpus,
        query_name: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        let query = resolve(corpus, query_name, top_n)?;
        let matrix = self.vectorizer.fit_transform(&corpus.tags());
        rank(corpus, &matrix, query, top_n)
    }

    /// Rank against a published snapshot, reusing cached vectors for that
    /// snapshot when caching is enabled
    pub fn recommend_snapshot(
        &self,
        snapshot: &Snapshot,
        query_name: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        let Some(cache) = &self.cache else {
            return self.recommend(&snapshot.corpus, query_name, top_n);
        };
        let query = resolve(&snapshot.corpus, query_name, top_n)?;
        let matrix: Arc<TfidfMatrix> =
            cache.get_or_build(snapshot.id, &snapshot.corpus, &self.vectorizer);
        rank(&snapshot.corpus, &matrix, query, top_n)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(&StorefrontConfig::default())
    }
}

/// Validate arguments and find the query row, before any vector work
fn resolve(corpus: &Corpus, query_name: &str, top_n: usize) -> Result<usize> {
    if top_n == 0 {
        return Err(RecommendError::InvalidArgument(
            "top_n must be positive, got 0".to_string(),
        ));
    }
    if corpus.is_empty() {
        return Err(RecommendError::EmptyCorpus);
    }
    corpus.position(query_name).ok_or_else(|| {
        tracing::debug!(query = query_name, "item not in catalog");
        RecommendError::NotFound(query_name.to_string())
    })
}

fn rank(
    corpus: &Corpus,
    matrix: &TfidfMatrix,
    query: usize,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    // Vectors must describe this exact corpus; never score against another one
    let query_row = matrix
        .row(query)
        .filter(|_| matrix.len() == corpus.len())
        .ok_or_else(|| {
            let name = corpus.get(query).map(|item| item.name.clone()).unwrap_or_default();
            RecommendError::NotFound(name)
        })?;

    let mut scored: Vec<(usize, &Item, f64)> = corpus
        .iter()
        .zip(matrix.rows())
        .enumerate()
        .filter(|&(idx, _)| idx != query)
        .map(|(idx, (item, row))| (idx, item, query_row.dot(row)))
        .collect();

    // Stable sort: equal scores keep corpus order
    scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_n);

    tracing::debug!(query, returned = scored.len(), "ranked similar items");

    Ok(scored
        .into_iter()
        .map(|(idx, item, score)| Recommendation::new(idx, item, score))
        .collect())
}
