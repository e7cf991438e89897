use super::Context;
use anyhow::Context as _;
use std::path::Path;
use storefront_catalog::Paths;

pub fn run(ctx: &Context, catalog: Option<&str>, out: &str) -> anyhow::Result<()> {
    let corpus = ctx.load_catalog(catalog, Paths::catalog_file)?;
    let out = Path::new(out);
    storefront_catalog::export_jsonl(out, &corpus)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Exported {} items to {}", corpus.len(), out.display());
    Ok(())
}
