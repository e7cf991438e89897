//! Similar-item recommendation over a product catalog

mod cache;
mod config;
mod display;
mod error;
mod recommender;
mod trending;

pub use cache::VectorCache;
pub use config::StorefrontConfig;
pub use display::{truncate, ItemView};
pub use error::{RecommendError, Result};
pub use recommender::{recommend, top_n_from_signed, Recommendation, Recommender};
pub use trending::trending;
