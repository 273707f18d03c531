use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::domain::model::PhoneQuery;
use crate::utils::error::Result;

/// Fallback lookup list used when no input file is given.
const DEFAULT_PHONES: &[&str] = &[
    "Samsung Galaxy S20",
    "Samsung Galaxy Note 10",
    "Google Pixel 4",
    "Google Pixel 4 XL",
    "Huawei P30 Pro",
    "OnePlus 7T",
    "Xiaomi Mi 10",
    "Sony Xperia 1 II",
];

#[derive(Debug, Deserialize)]
struct QueryRow {
    #[serde(
        rename = "phone",
        alias = "model",
        alias = "model_name",
        alias = "name"
    )]
    phone: String,
}

pub fn builtin_queries() -> Vec<PhoneQuery> {
    DEFAULT_PHONES
        .iter()
        .filter_map(|name| PhoneQuery::new(*name).ok())
        .collect()
}

/// Loads phone names from a `.csv` file (header row with a `phone`-like
/// column) or a plain-text file (one name per line). Blank and unusable
/// rows are skipped with a warning; the row order is preserved.
pub fn load_queries(path: &Path) -> Result<Vec<PhoneQuery>> {
    let is_csv = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("csv")
    );
    if is_csv {
        load_csv(path)
    } else {
        load_lines(path)
    }
}

fn load_csv(path: &Path) -> Result<Vec<PhoneQuery>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut queries = Vec::new();
    for result in reader.deserialize::<QueryRow>() {
        match result {
            Ok(row) => match PhoneQuery::new(row.phone) {
                Ok(query) => queries.push(query),
                Err(_) => tracing::warn!("Skipping row with empty phone name in {:?}", path),
            },
            Err(e) => tracing::warn!("Skipping unreadable row in {:?}: {}", path, e),
        }
    }

    tracing::info!("Loaded {} phone names from CSV {:?}", queries.len(), path);
    Ok(queries)
}

fn load_lines(path: &Path) -> Result<Vec<PhoneQuery>> {
    let content = std::fs::read_to_string(path)?;
    let queries: Vec<PhoneQuery> = content
        .lines()
        .filter_map(|line| PhoneQuery::new(line).ok())
        .collect();

    tracing::info!("Loaded {} phone names from {:?}", queries.len(), path);
    Ok(queries)
}
