//! CSV menu loading.
//!
//! Expected header: `Sandwich_Name,Ingredients,Menu_Index,Price,Flag`.
//! `Flag` may be blank or missing entirely; everything else is required.

use crate::domain::model::MenuRecord;
use crate::utils::error::{MenuError, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawMenuRow {
    #[serde(rename = "Sandwich_Name", default)]
    name: Option<String>,
    #[serde(rename = "Ingredients", default)]
    ingredients: Option<String>,
    #[serde(rename = "Menu_Index", default)]
    menu_index: Option<String>,
    #[serde(rename = "Price", default)]
    price: Option<String>,
    #[serde(rename = "Flag", default)]
    flag: Option<String>,
}

impl RawMenuRow {
    fn into_record(self, location: &str) -> Result<MenuRecord> {
        let name = required(self.name, "Sandwich_Name", location)?;
        let ingredients = required(self.ingredients, "Ingredients", location)?;

        let raw_index = required(self.menu_index, "Menu_Index", location)?;
        let menu_index = parse_menu_index(&raw_index, location)?;

        let raw_price = required(self.price, "Price", location)?;
        let price = raw_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| {
                MenuError::malformed(location, format!("Price '{}' is not a number", raw_price))
            })?;

        Ok(MenuRecord {
            name,
            ingredients,
            menu_index,
            price,
            flag: self.flag.unwrap_or_default(),
        })
    }
}

/// Whole numbers, including float spellings such as `1.0`. Range checks are
/// left to partitioning.
fn parse_menu_index(raw: &str, location: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if let Ok(index) = trimmed.parse::<i64>() {
        return Ok(index);
    }

    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(|| {
        MenuError::malformed(location, format!("Menu_Index '{}' is not a number", raw))
    })?;

    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return Err(MenuError::malformed(
            location,
            format!("Menu_Index '{}' is not a whole number", raw),
        ));
    }
    Ok(value as i64)
}

fn required(value: Option<String>, column: &str, location: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MenuError::malformed(location, format!("missing {}", column))),
    }
}

/// Parses every row of `source` into a record, in source order.
pub fn load_records<R: Read>(source: R) -> Result<Vec<MenuRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| MenuError::malformed("header", e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| {
            let location = e
                .position()
                .map(|p| format!("line {}", p.line()))
                .unwrap_or_else(|| "unknown line".to_string());
            MenuError::malformed(location, e.to_string())
        })?;

        let location = row
            .position()
            .map(|p| format!("line {}", p.line()))
            .unwrap_or_else(|| format!("row {}", records.len() + 1));

        let raw: RawMenuRow = row
            .deserialize(Some(&headers))
            .map_err(|e| MenuError::malformed(location.as_str(), e.to_string()))?;

        records.push(raw.into_record(&location)?);
    }

    tracing::debug!("Parsed {} menu rows", records.len());
    Ok(records)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<MenuRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        MenuError::malformed(path.display().to_string(), format!("cannot open: {}", e))
    })?;
    load_records(file)
}
