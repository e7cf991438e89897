//! Recommendation outcomes the caller is expected to render, not crash on

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("catalog is empty")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, RecommendError>;
