//! Catalog snapshot loading (CSV, JSONL) and atomic file operations

use crate::error::{CatalogError, Result};
use crate::types::{Corpus, DuplicatePolicy, Item};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One CSV row. Blank numeric cells fall back to zero instead of failing.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Tags", default)]
    tags: String,
    #[serde(rename = "ReviewCount", default, deserialize_with = "csv::invalid_option")]
    review_count: Option<f64>,
    #[serde(rename = "Brand", default)]
    brand: String,
    #[serde(rename = "ImageURL", default)]
    image_url: String,
    #[serde(rename = "Rating", default, deserialize_with = "csv::invalid_option")]
    rating: Option<f64>,
}

impl From<CsvRow> for Item {
    fn from(row: CsvRow) -> Self {
        Item {
            name: row.name,
            tags: row.tags,
            review_count: row.review_count.unwrap_or(0.0).max(0.0).round() as u64,
            brand: row.brand,
            image_url: row.image_url,
            rating: row.rating.unwrap_or(0.0),
        }
    }
}

/// Load a catalog from a CSV file with a header row
pub fn load_csv(path: &Path, policy: DuplicatePolicy) -> Result<Corpus> {
    let file = File::open(path)?;
    let corpus = read_csv(file, policy)?;
    tracing::info!(path = %path.display(), items = corpus.len(), "loaded CSV catalog");
    Ok(corpus)
}

/// Parse a CSV catalog from any reader. Columns other than the item fields are ignored.
pub fn read_csv<R: Read>(reader: R, policy: DuplicatePolicy) -> Result<Corpus> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut items = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        items.push(Item::from(row?));
    }
    apply_policy(items, policy)
}

/// Load a catalog from a JSONL file, one item per line
pub fn load_jsonl(path: &Path, policy: DuplicatePolicy) -> Result<Corpus> {
    let file = File::open(path)?;
    let corpus = read_jsonl(BufReader::new(file), policy)?;
    tracing::info!(path = %path.display(), items = corpus.len(), "loaded JSONL catalog");
    Ok(corpus)
}

/// Parse JSONL items from a buffered reader. Blank lines are skipped.
pub fn read_jsonl<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<Corpus> {
    let mut items = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item: Item = serde_json::from_str(&line).map_err(|source| CatalogError::Json {
            line: idx + 1,
            source,
        })?;
        items.push(item);
    }
    apply_policy(items, policy)
}

/// Load a catalog, picking the format from the file extension (`.jsonl`/`.json` or CSV)
pub fn load_corpus(path: &Path, policy: DuplicatePolicy) -> Result<Corpus> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") | Some("json") => load_jsonl(path, policy),
        _ => load_csv(path, policy),
    }
}

/// Write the corpus as JSONL, atomically
pub fn export_jsonl(path: &Path, corpus: &Corpus) -> Result<()> {
    let mut out = String::new();
    for (idx, item) in corpus.iter().enumerate() {
        let json =
            serde_json::to_string(item).map_err(|source| CatalogError::Json { line: idx + 1, source })?;
        out.push_str(&json);
        out.push('\n');
    }
    atomic_write(path, out.as_bytes())?;
    Ok(())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

fn apply_policy(items: Vec<Item>, policy: DuplicatePolicy) -> Result<Corpus> {
    if policy == DuplicatePolicy::Reject {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (row, item) in items.iter().enumerate() {
            if let Some(&first_row) = seen.get(item.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name.clone(),
                    first_row,
                    row,
                });
            }
            seen.insert(item.name.as_str(), row);
        }
    }
    Ok(Corpus::new(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Unnamed: 0,ProdID,Rating,ReviewCount,Category,Brand,Name,ImageURL,Description,Tags
0,1,4.5,120,Beauty,Acme,Red Lipstick,https://img/1.png,desc,red matte lipstick
1,2,,,Beauty,,Blue Shampoo,,desc,
2,3,3.0,7.0,Beauty,Acme,Red Lipstick,https://img/3.png,desc,red gloss
";

    #[test]
    fn test_read_csv_maps_columns() {
        let corpus = read_csv(CSV.as_bytes(), DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(corpus.len(), 3);

        let first = corpus.get(0).unwrap();
        assert_eq!(first.name, "Red Lipstick");
        assert_eq!(first.tags, "red matte lipstick");
        assert_eq!(first.review_count, 120);
        assert_eq!(first.brand, "Acme");
        assert_eq!(first.rating, 4.5);

        assert_eq!(corpus.get(2).unwrap().review_count, 7);
    }

    #[test]
    fn test_read_csv_blank_cells_default() {
        let corpus = read_csv(CSV.as_bytes(), DuplicatePolicy::FirstWins).unwrap();
        let blank = corpus.get(1).unwrap();
        assert_eq!(blank.review_count, 0);
        assert_eq!(blank.rating, 0.0);
        assert!(blank.tags.is_empty());
        assert!(blank.brand.is_empty());
    }

    #[test]
    fn test_read_csv_reject_duplicates() {
        let err = read_csv(CSV.as_bytes(), DuplicatePolicy::Reject).unwrap_err();
        match err {
            CatalogError::DuplicateName {
                name,
                first_row,
                row,
            } => {
                assert_eq!(name, "Red Lipstick");
                assert_eq!(first_row, 0);
                assert_eq!(row, 2);
            }
            other => panic!("Expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_read_jsonl_reports_bad_line() {
        let input = "{\"Name\":\"A\",\"Tags\":\"x\"}\n\nnot json\n";
        let err = read_jsonl(input.as_bytes(), DuplicatePolicy::FirstWins).unwrap_err();
        assert!(matches!(err, CatalogError::Json { line: 3, .. }));
    }

    #[test]
    fn test_export_then_load_jsonl() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        let corpus = read_csv(CSV.as_bytes(), DuplicatePolicy::FirstWins).unwrap();

        export_jsonl(&path, &corpus).unwrap();
        let loaded = load_corpus(&path, DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(loaded, corpus);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_load_corpus_csv_by_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("clean_data.csv");
        std::fs::write(&path, CSV).unwrap();

        let corpus = load_corpus(&path, DuplicatePolicy::FirstWins).unwrap();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_csv(Path::new("/nonexistent/catalog.csv"), DuplicatePolicy::FirstWins)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_atomic_write() {
        let temp = tempfile::TempDir::new().unwrap();
        let test_file = temp.path().join("nested").join("out.txt");

        atomic_write(&test_file, b"Hello, world!").unwrap();
        assert_eq!(std::fs::read(&test_file).unwrap(), b"Hello, world!");
    }
}
