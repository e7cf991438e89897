//! Trending listing for the storefront home page

use storefront_catalog::{Corpus, Item};

/// The first `limit` rows of a trending-products snapshot, in dataset order
pub fn trending(corpus: &Corpus, limit: usize) -> &[Item] {
    corpus.head(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_keeps_dataset_order() {
        let corpus: Corpus = (0..12)
            .map(|i| Item::new(format!("item{i}"), ""))
            .collect();
        let top = trending(&corpus, 8);
        assert_eq!(top.len(), 8);
        assert_eq!(top[0].name, "item0");
        assert_eq!(top[7].name, "item7");
    }

    #[test]
    fn test_trending_short_catalog() {
        let corpus = Corpus::new(vec![Item::new("only", "")]);
        assert_eq!(trending(&corpus, 8).len(), 1);
    }
}
