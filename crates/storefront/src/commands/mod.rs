pub mod export;
pub mod inspect;
pub mod recommend;
pub mod trending;
pub mod version;

use anyhow::Context as _;
use std::path::{Path, PathBuf};
use storefront_catalog::{Corpus, Paths};
use storefront_core::StorefrontConfig;

/// Resolved configuration shared by commands
pub struct Context {
    pub config: StorefrontConfig,
}

impl Context {
    pub fn load(config_path: Option<&str>) -> anyhow::Result<Self> {
        let config_file = resolve_path(config_path, || Ok(Paths::new()?.config_file()))?;
        let config = StorefrontConfig::load(&config_file)?;
        tracing::debug!(config = %config_file.display(), "loaded configuration");
        Ok(Self { config })
    }

    /// Load the catalog at `arg`, or at the `default` location under the home directory
    pub fn load_catalog(
        &self,
        arg: Option<&str>,
        default: fn(&Paths) -> PathBuf,
    ) -> anyhow::Result<Corpus> {
        let path = resolve_path(arg, || Ok(default(&Paths::new()?)))?;
        load_catalog_file(&path, &self.config)
    }
}

/// An explicit path wins; the default resolver only runs when none was given
fn resolve_path(
    arg: Option<&str>,
    default: impl FnOnce() -> std::io::Result<PathBuf>,
) -> std::io::Result<PathBuf> {
    match arg {
        Some(path) => Ok(PathBuf::from(path)),
        None => default(),
    }
}

fn load_catalog_file(path: &Path, config: &StorefrontConfig) -> anyhow::Result<Corpus> {
    storefront_catalog::load_corpus(path, config.duplicate_policy)
        .with_context(|| format!("loading catalog {}", path.display()))
}

/// Fixed-width table of display rows
pub fn render_table(rows: &[storefront_core::ItemView]) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<35} {:<20} {:>6} reviews  {:.1}",
            i + 1,
            row.name,
            row.brand,
            row.review_count,
            row.rating
        ));
        if let Some(score) = row.score {
            out.push_str(&format!("  (similarity {:.3})", score));
        }
        out.push('\n');
    }
    out
}
