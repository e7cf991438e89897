//! Catalog item and corpus types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product row as supplied by the catalog store.
///
/// Field names on the wire follow the storefront's tabular dataset
/// (`Name`, `Tags`, `ReviewCount`, ...), so CSV and JSONL snapshots share
/// one schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Tags", default)]
    pub tags: String,
    #[serde(rename = "ReviewCount", default)]
    pub review_count: u64,
    #[serde(rename = "Brand", default)]
    pub brand: String,
    #[serde(rename = "ImageURL", default)]
    pub image_url: String,
    #[serde(rename = "Rating", default)]
    pub rating: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: tags.into(),
            ..Default::default()
        }
    }
}

/// How loaders treat rows whose `Name` repeats an earlier row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every row; name lookups resolve to the first occurrence
    #[default]
    FirstWins,
    /// Fail the load on the first repeated name
    Reject,
}

/// Ordered, index-addressable item sequence.
///
/// The row index is the item's identity for similarity computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    items: Vec<Item>,
}

impl Corpus {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Index of the first item named exactly `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Tag text of every item, in corpus order
    pub fn tags(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.tags.as_str()).collect()
    }

    /// First `n` items in corpus order
    pub fn head(&self, n: usize) -> &[Item] {
        &self.items[..n.min(self.items.len())]
    }

    /// Names occurring more than once, with their occurrence counts, in order
    /// of first appearance
    pub fn duplicate_names(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for item in &self.items {
            let count = counts.entry(item.name.as_str()).or_insert(0);
            if *count == 0 {
                order.push(item.name.as_str());
            }
            *count += 1;
        }
        order
            .into_iter()
            .filter_map(|name| {
                let count = counts[name];
                (count > 1).then(|| (name.to_string(), count))
            })
            .collect()
    }
}

impl From<Vec<Item>> for Corpus {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Corpus {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        Corpus::new(vec![
            Item::new("A", "red shoe"),
            Item::new("B", "blue hat"),
            Item::new("A", "green scarf"),
        ])
    }

    #[test]
    fn test_position_returns_first_match() {
        let corpus = sample();
        assert_eq!(corpus.position("A"), Some(0));
        assert_eq!(corpus.position("B"), Some(1));
        assert_eq!(corpus.position("Z"), None);
    }

    #[test]
    fn test_head_clamps_to_len() {
        let corpus = sample();
        assert_eq!(corpus.head(2).len(), 2);
        assert_eq!(corpus.head(10).len(), 3);
        assert!(Corpus::default().head(8).is_empty());
    }

    #[test]
    fn test_duplicate_names() {
        let corpus = sample();
        assert_eq!(corpus.duplicate_names(), vec![("A".to_string(), 2)]);
    }

    #[test]
    fn test_item_json_uses_dataset_columns() {
        let item = Item {
            name: "Lipstick".to_string(),
            tags: "red matte".to_string(),
            review_count: 12,
            brand: "Acme".to_string(),
            image_url: "https://img/1.png".to_string(),
            rating: 4.5,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Name"], "Lipstick");
        assert_eq!(json["ReviewCount"], 12);
        assert_eq!(json["ImageURL"], "https://img/1.png");
    }

    #[test]
    fn test_item_json_missing_fields_default() {
        let parsed: Item = serde_json::from_str(r#"{"Name":"Soap"}"#).unwrap();
        assert_eq!(parsed.name, "Soap");
        assert!(parsed.tags.is_empty());
        assert_eq!(parsed.review_count, 0);
        assert_eq!(parsed.rating, 0.0);
    }
}
