use super::{render_table, Context};
use storefront_catalog::{Corpus, Paths};
use storefront_core::{trending, ItemView};

pub fn run(ctx: &Context, catalog: Option<&str>, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let corpus = ctx.load_catalog(catalog, Paths::trending_file)?;
    let limit = limit.unwrap_or(ctx.config.trending_limit);
    println!("{}", render(&corpus, limit, ctx.config.name_display_len, json)?);
    Ok(())
}

fn render(corpus: &Corpus, limit: usize, name_len: usize, json: bool) -> anyhow::Result<String> {
    let views: Vec<ItemView> = trending(corpus, limit)
        .iter()
        .map(|item| ItemView::from_item(item, name_len))
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&views)?);
    }
    if views.is_empty() {
        return Ok("No trending products".to_string());
    }
    Ok(render_table(&views).trim_end().to_string())
}
