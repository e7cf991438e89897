use super::{render_table, Context};
use storefront_catalog::{CatalogHandle, Paths};
use storefront_core::{top_n_from_signed, ItemView, Recommender, StorefrontConfig};

pub fn run(
    ctx: &Context,
    name: &str,
    catalog: Option<&str>,
    top_n: Option<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let corpus = ctx.load_catalog(catalog, Paths::catalog_file)?;
    let handle = CatalogHandle::new(corpus);
    println!("{}", render(&ctx.config, &handle, name, top_n, json)?);
    Ok(())
}

/// Rank and format; recoverable outcomes become a "no recommendations" message
fn render(
    config: &StorefrontConfig,
    handle: &CatalogHandle,
    name: &str,
    top_n: Option<i64>,
    json: bool,
) -> anyhow::Result<String> {
    let recommender = Recommender::new(config);
    let requested = match top_n {
        Some(n) => top_n_from_signed(n),
        None => Ok(config.default_top_n),
    };
    let result = requested.and_then(|n| recommender.recommend_snapshot(&handle.snapshot(), name, n));

    let recs = match result {
        Ok(recs) => recs,
        Err(err) => {
            tracing::warn!(query = name, error = %err, "no recommendations");
            return Ok(if json {
                serde_json::json!({ "recommendations": [], "message": err.to_string() })
                    .to_string()
            } else {
                format!("No recommendations available: {err}")
            });
        }
    };

    let views: Vec<ItemView> = recs
        .iter()
        .map(|r| ItemView::from_recommendation(r, config.name_display_len))
        .collect();

    if json {
        Ok(serde_json::json!({ "recommendations": views }).to_string())
    } else if views.is_empty() {
        Ok("No recommendations available".to_string())
    } else {
        Ok(render_table(&views).trim_end().to_string())
    }
}
