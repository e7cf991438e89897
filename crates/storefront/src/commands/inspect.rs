use super::Context;
use storefront_catalog::{Corpus, Paths};
use storefront_index::TfidfVectorizer;

pub fn run(ctx: &Context, catalog: Option<&str>) -> anyhow::Result<()> {
    let corpus = ctx.load_catalog(catalog, Paths::catalog_file)?;
    let output = summarize(&corpus, ctx.config.use_stop_words);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn summarize(corpus: &Corpus, use_stop_words: bool) -> serde_json::Value {
    let matrix = TfidfVectorizer::new()
        .with_stop_words(use_stop_words)
        .fit_transform(&corpus.tags());

    let untagged: Vec<&str> = corpus
        .iter()
        .zip(matrix.rows())
        .filter(|(_, row)| row.is_zero())
        .map(|(item, _)| item.name.as_str())
        .collect();

    let duplicates: Vec<serde_json::Value> = corpus
        .duplicate_names()
        .into_iter()
        .map(|(name, count)| serde_json::json!({ "name": name, "count": count }))
        .collect();

    serde_json::json!({
        "items": corpus.len(),
        "vocabulary": matrix.vocabulary().len(),
        "untagged_items": untagged,
        "duplicate_names": duplicates,
    })
}
