//! Cosine similarity over term-weight rows

use crate::tfidf::{SparseVector, TfidfMatrix};

/// Cosine similarity for arbitrary (not necessarily normalized) vectors.
/// Zero vectors are similar to nothing.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        a.dot(b) / (norm_a * norm_b)
    }
}

/// Dense, symmetric N x N similarity table
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.size && j < self.size).then(|| self.values[i * self.size + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.size).then(|| &self.values[i * self.size..(i + 1) * self.size])
    }
}

impl TfidfMatrix {
    /// Similarity of document `index` to every document, in corpus order.
    /// Rows are already unit length, so this is a plain dot product.
    pub fn similarity_row(&self, index: usize) -> Option<Vec<f64>> {
        let query = self.row(index)?;
        Some(self.rows().iter().map(|row| query.dot(row)).collect())
    }

    pub fn similarity_matrix(&self) -> SimilarityMatrix {
        let size = self.len();
        let mut values = vec![0.0; size * size];
        let rows = self.rows();
        for i in 0..size {
            for j in i..size {
                let sim = rows[i].dot(&rows[j]);
                values[i * size + j] = sim;
                values[j * size + i] = sim;
            }
        }
        SimilarityMatrix { size, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::TfidfVectorizer;

    fn sample() -> TfidfMatrix {
        TfidfVectorizer::new().fit_transform(&[
            "red shoe leather",
            "red shoe canvas",
            "blue hat wool",
            "red shoe leather",
            "",
        ])
    }

    #[test]
    fn test_cosine_similarity() {
        let a = SparseVector::new(vec![(0, 3.0)]);
        let b = SparseVector::new(vec![(0, 1.0)]);
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-12);

        let c = SparseVector::new(vec![(1, 1.0)]);
        assert_eq!(cosine(&a, &c), 0.0); // orthogonal
        assert_eq!(cosine(&a, &SparseVector::default()), 0.0);
    }

    #[test]
    fn test_similarity_row_orders_by_overlap() {
        let matrix = sample();
        let row = matrix.similarity_row(0).unwrap();

        assert!((row[0] - 1.0).abs() < 1e-12);
        assert_eq!(row[3], row[0]);
        assert!(row[1] > 0.0 && row[1] < row[3]);
        assert_eq!(row[2], 0.0);
        assert_eq!(row[4], 0.0);
        assert!(matrix.similarity_row(99).is_none());
    }

    #[test]
    fn test_matrix_symmetric_and_bounded() {
        let sims = sample().similarity_matrix();
        assert_eq!(sims.size(), 5);
        for i in 0..5 {
            for j in 0..5 {
                let v = sims.get(i, j).unwrap();
                assert_eq!(v, sims.get(j, i).unwrap());
                assert!((-1e-12..=1.0 + 1e-12).contains(&v));
            }
        }
        assert!((sims.get(2, 2).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(sims.get(4, 4), Some(0.0));
        assert_eq!(sims.get(5, 0), None);
    }

    #[test]
    fn test_matrix_row_matches_similarity_row() {
        let matrix = sample();
        let sims = matrix.similarity_matrix();
        assert_eq!(sims.row(1).unwrap(), matrix.similarity_row(1).unwrap().as_slice());
    }
}
