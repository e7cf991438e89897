//! Path resolution for storefront data and configuration files

use std::path::PathBuf;

/// Resolves standard paths under `~/.storefront`
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at the user's home directory
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_root(home.join(".storefront")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Get models directory holding the catalog snapshots
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("models")
    }

    /// Default full catalog used for similar-item queries
    pub fn catalog_file(&self) -> PathBuf {
        self.models_dir().join("clean_data.csv")
    }

    /// Default trending-products listing
    pub fn trending_file(&self) -> PathBuf {
        self.models_dir().join("trending_products.csv")
    }
}
