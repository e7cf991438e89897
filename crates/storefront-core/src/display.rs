//! Presentation helpers for recommendation and listing rows

use crate::recommender::Recommendation;
use serde::Serialize;
use storefront_catalog::Item;

const ELLIPSIS: &str = "...";

/// Bound a display string to `length` characters, appending `...` when cut
pub fn truncate(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Row handed to the storefront renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub brand: String,
    pub review_count: u64,
    pub rating: f64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ItemView {
    pub fn from_item(item: &Item, name_len: usize) -> Self {
        Self {
            name: truncate(&item.name, name_len),
            brand: item.brand.clone(),
            review_count: item.review_count,
            rating: item.rating,
            image_url: item.image_url.clone(),
            score: None,
        }
    }

    pub fn from_recommendation(rec: &Recommendation, name_len: usize) -> Self {
        Self {
            name: truncate(&rec.name, name_len),
            brand: rec.brand.clone(),
            review_count: rec.review_count,
            rating: rec.rating,
            image_url: rec.image_url.clone(),
            score: Some(rec.score),
        }
    }
}
