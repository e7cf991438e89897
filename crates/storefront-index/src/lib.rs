//! TF-IDF vectorization and cosine similarity for item tag text

mod similarity;
mod tfidf;
mod tokenize;

pub use similarity::{cosine, SimilarityMatrix};
pub use tfidf::{SparseVector, TfidfMatrix, TfidfVectorizer};
pub use tokenize::{is_stop_word, tokenize, STOP_WORDS};
