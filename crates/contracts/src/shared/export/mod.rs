//! Универсальная подготовка данных к экспорту (Excel/CSV, JSON, печать).
//!
//! This module only flattens records into rows of strings; writing the
//! actual file is the job of a serializer on the native side.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::record::{parse_number, Record};
use crate::shared::table::ColumnSpec;
use crate::shared::text::slugify;

/// Label of the first cell of the totals row
pub const TOTALS_LABEL: &str = "Total";

/// Формат файла экспорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Semicolon-separated CSV with BOM, opens directly in Excel
    Csv,
    Json,
    /// Paginated print table (printed to PDF from the browser)
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "csv" | "excel" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "html" | "pdf" => Some(ExportFormat::Html),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportColumn {
    pub label: String,
    /// Width hint copied from `ColumnSpec::width`; serializers decide what to do with it
    pub width: Option<u16>,
}

/// Flat table ready for a serializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTable {
    pub title: String,
    pub columns: Vec<ExportColumn>,
    pub rows: Vec<Vec<String>>,
    /// Present when at least one column is summable
    pub totals: Option<Vec<String>>,
}

impl ExportTable {
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the export table for `records` in the given order.
///
/// Every cell goes through the column's formatter; missing values and broken
/// nested paths become `N/A`. Records are only read.
pub fn build_export<'a, I>(records: I, columns: &[ColumnSpec], title: &str) -> ExportTable
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();

    let rows = records
        .iter()
        .map(|record| columns.iter().map(|column| column.display(record)).collect())
        .collect();

    ExportTable {
        title: title.to_string(),
        columns: columns
            .iter()
            .map(|column| ExportColumn {
                label: column.label.clone(),
                width: column.width,
            })
            .collect(),
        rows,
        totals: totals_row(&records, columns),
    }
}

fn totals_row(records: &[&Record], columns: &[ColumnSpec]) -> Option<Vec<String>> {
    if !columns.iter().any(|column| column.summable) {
        return None;
    }

    let mut row: Vec<String> = columns
        .iter()
        .map(|column| {
            if !column.summable {
                return String::new();
            }
            let sum: f64 = records
                .iter()
                .filter_map(|record| column.resolve(record))
                .filter_map(parse_number)
                .sum();
            column.format.unwrap_or_default().apply(&Value::from(sum))
        })
        .collect();

    if let Some(first) = row.first_mut() {
        if first.is_empty() {
            *first = TOTALS_LABEL.to_string();
        }
    }
    Some(row)
}

/// `<slug>_<YYYYMMDD_HHMMSS>.<ext>`, e.g. `vendas_marco_20240315_143000.csv`
pub fn export_file_name(title: &str, format: ExportFormat, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.{}",
        slugify(title),
        timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
