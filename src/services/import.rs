//! Spreadsheet row import
//!
//! Reads raw rows from CSV files or JSON arrays of objects (the shape a
//! spreadsheet-to-JSON export produces). Columns are found by header name,
//! in English or Spanish, ignoring case. A missing column simply leaves that
//! field empty on every row.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use clap::ValueEnum;
use csv::{ReaderBuilder, StringRecord};
use serde_json::Value;

use crate::error::{TallyError, TallyResult};
use crate::models::RawRecord;

const KIND_HEADERS: &[&str] = &["type", "tipo", "kind"];
const CATEGORY_HEADERS: &[&str] = &["category", "categoría", "categoria"];
const AMOUNT_HEADERS: &[&str] = &["amount", "monto"];

/// Supported input document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Infer the format from a file extension, defaulting to CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Column positions resolved from a CSV header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Index of the type column
    pub kind_column: Option<usize>,
    /// Index of the category column
    pub category_column: Option<usize>,
    /// Index of the amount column
    pub amount_column: Option<usize>,
}

impl ColumnMapping {
    /// Resolve columns from a header record
    pub fn from_headers(headers: &StringRecord) -> Self {
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|header| aliases.contains(&normalize_header(header).as_str()))
        };

        Self {
            kind_column: find(KIND_HEADERS),
            category_column: find(CATEGORY_HEADERS),
            amount_column: find(AMOUNT_HEADERS),
        }
    }

    /// Whether no known column was found
    pub fn is_empty(&self) -> bool {
        self.kind_column.is_none() && self.category_column.is_none() && self.amount_column.is_none()
    }

    fn record(&self, row: &StringRecord) -> RawRecord {
        let field = |column: Option<usize>| {
            column
                .and_then(|col| row.get(col))
                .map(|value| value.to_string())
        };

        RawRecord {
            kind: field(self.kind_column),
            category: field(self.category_column),
            amount: field(self.amount_column),
        }
    }
}

fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Read rows from a CSV document with a header row
///
/// Short rows are accepted; unreadable records are skipped with a warning.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> TallyResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| TallyError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let mapping = ColumnMapping::from_headers(&headers);
    if mapping.is_empty() {
        tracing::warn!(?headers, "no type, category or amount column found");
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(row) => records.push(mapping.record(&row)),
            Err(e) => tracing::warn!(row = idx, error = %e, "skipping unreadable CSV record"),
        }
    }

    Ok(records)
}

/// Read rows from a JSON array of objects
///
/// Keys are matched like CSV headers. Numbers and booleans are kept as text
/// so the categorizer applies a single parsing policy to every source.
pub fn read_json<R: Read>(reader: R) -> TallyResult<Vec<RawRecord>> {
    let document: Value = serde_json::from_reader(reader)
        .map_err(|e| TallyError::Import(format!("Failed to parse JSON rows: {}", e)))?;

    let Value::Array(rows) = document else {
        return Err(TallyError::Import(
            "Expected a JSON array of row objects".to_string(),
        ));
    };

    let records = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| match row {
            Value::Object(fields) => {
                let field = |aliases: &[&str]| {
                    fields
                        .iter()
                        .find(|(key, _)| aliases.contains(&normalize_header(key).as_str()))
                        .and_then(|(_, value)| value_text(value))
                };
                Some(RawRecord {
                    kind: field(KIND_HEADERS),
                    category: field(CATEGORY_HEADERS),
                    amount: field(AMOUNT_HEADERS),
                })
            }
            other => {
                tracing::warn!(row = idx, value = %other, "skipping non-object JSON row");
                None
            }
        })
        .collect();

    Ok(records)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Read rows from a file, inferring the format from its extension unless given
///
/// `delimiter` only applies to CSV input.
pub fn read_rows(
    path: &Path,
    format: Option<InputFormat>,
    delimiter: u8,
) -> TallyResult<Vec<RawRecord>> {
    let file = File::open(path).map_err(|e| {
        TallyError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    tracing::info!(path = %path.display(), ?format, "reading rows");

    match format {
        InputFormat::Csv => read_csv(reader, delimiter),
        InputFormat::Json => read_json(reader),
    }
}
