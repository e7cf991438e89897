//! Versioned, shareable catalog snapshots

use crate::error::Result;
use crate::io::load_corpus;
use crate::types::{Corpus, DuplicatePolicy};
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

static NEXT_SNAPSHOT_ID: AtomicU64 = AtomicU64::new(1);

fn next_snapshot_id() -> u64 {
    NEXT_SNAPSHOT_ID.fetch_add(1, Ordering::Relaxed)
}

/// An immutable corpus tagged with the version it was published under
#[derive(Debug)]
pub struct Snapshot {
    /// Unique across every handle in the process
    pub id: u64,
    /// Counts publishes within one handle, starting at 1
    pub version: u64,
    pub loaded_at: DateTime<Utc>,
    pub corpus: Corpus,
}

/// Holds the current catalog snapshot.
///
/// Readers take an `Arc<Snapshot>` and keep it for the whole request, so a
/// concurrent `replace` never exposes a half-loaded catalog to them.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<Snapshot>>,
}

impl CatalogHandle {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot {
                id: next_snapshot_id(),
                version: 1,
                loaded_at: Utc::now(),
                corpus,
            })),
        }
    }

    /// Load the initial snapshot from disk
    pub fn load(path: &Path, policy: DuplicatePolicy) -> Result<Self> {
        Ok(Self::new(load_corpus(path, policy)?))
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    pub fn version(&self) -> u64 {
        self.snapshot().version
    }

    /// Publish a new corpus, returning its version
    pub fn replace(&self, corpus: Corpus) -> u64 {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let version = guard.version + 1;
        *guard = Arc::new(Snapshot {
            id: next_snapshot_id(),
            version,
            loaded_at: Utc::now(),
            corpus,
        });
        tracing::info!(version, items = guard.corpus.len(), "published catalog snapshot");
        version
    }

    /// Re-read the catalog from disk. On failure the current snapshot stays in place.
    pub fn reload(&self, path: &Path, policy: DuplicatePolicy) -> Result<u64> {
        let corpus = load_corpus(path, policy)?;
        Ok(self.replace(corpus))
    }
}
