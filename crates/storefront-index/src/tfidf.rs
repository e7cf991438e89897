//! Smoothed TF-IDF vectorizer over item tag text

use crate::tokenize::tokenize;
use std::collections::{BTreeSet, HashMap};

/// Sparse term-weight vector, entries sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(term_id, weight)` pairs; zero weights are dropped
    pub fn new(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(id, _)| id);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, term_id: usize) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Merge-join dot product. Summation runs in term-id order, so
    /// `a.dot(b)` and `b.dot(a)` are bit-identical.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Fits a vocabulary and IDF table on a corpus and emits one L2-normalized
/// row per document
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    drop_stop_words: bool,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            drop_stop_words: true,
        }
    }

    pub fn with_stop_words(mut self, drop_stop_words: bool) -> Self {
        self.drop_stop_words = drop_stop_words;
        self
    }

    pub fn fit_transform(&self, documents: &[&str]) -> TfidfMatrix {
        if documents.is_empty() {
            return TfidfMatrix::default();
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc, self.drop_stop_words))
            .collect();

        // Sorted vocabulary keeps term ids stable across runs
        let vocab_set: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: Vec<String> = vocab_set.into_iter().map(str::to_string).collect();
        let term_ids: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let mut counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut tf: HashMap<usize, usize> = HashMap::new();
            for token in tokens {
                *tf.entry(term_ids[token.as_str()]).or_insert(0) += 1;
            }
            for &id in tf.keys() {
                doc_freq[id] += 1;
            }
            counts.push(tf);
        }

        let doc_count = documents.len();
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((doc_count + 1) as f64 / (df + 1) as f64).ln() + 1.0)
            .collect();

        let rows = counts
            .into_iter()
            .map(|tf| {
                let mut row = SparseVector::new(
                    tf.into_iter()
                        .map(|(id, count)| (id, count as f64 * idf[id]))
                        .collect(),
                );
                row.normalize();
                row
            })
            .collect();

        tracing::debug!(
            documents = doc_count,
            vocabulary = vocabulary.len(),
            "fitted tf-idf"
        );

        TfidfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized term-weight rows in corpus order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_id(term).map(|id| self.idf[id])
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    /// Weight of `term` in document `index`, zero when absent
    pub fn weight(&self, index: usize, term: &str) -> f64 {
        match (self.row(index), self.term_id(term)) {
            (Some(row), Some(id)) => row.get(id),
            _ => 0.0,
        }
    }
}
