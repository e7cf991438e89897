//! Catalog store boundary: items, corpus snapshots and their on-disk formats

mod error;
mod io;
mod paths;
mod snapshot;
mod types;

pub use error::{CatalogError, Result};
pub use io::{
    atomic_write, export_jsonl, load_corpus, load_csv, load_jsonl, read_csv, read_jsonl,
};
pub use paths::Paths;
pub use snapshot::{CatalogHandle, Snapshot};
pub use types::{Corpus, DuplicatePolicy, Item};
