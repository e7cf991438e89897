//! Catalog loading errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate item name {name:?} at row {row} (first seen at row {first_row})")]
    DuplicateName {
        name: String,
        first_row: usize,
        row: usize,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
