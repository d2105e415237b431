//! Export serializers: write an [`ExportTable`] to a file in the export directory

mod csv_writer;
mod error;
mod html_writer;
mod json_writer;

pub use csv_writer::CsvWriter;
pub use error::ExportError;
pub use html_writer::{escape_html, HtmlWriter};
pub use json_writer::JsonWriter;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use contracts::shared::export::{export_file_name, ExportFormat, ExportTable};

use crate::shared::config::ExportConfig;

/// Serializer of a flat export table
pub trait TableWriter {
    fn format(&self) -> ExportFormat;

    fn write_table(&self, table: &ExportTable, out: &mut dyn Write) -> Result<(), ExportError>;
}

/// Serializer for `format` configured from the `[export]` section
pub fn writer_for(
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<Box<dyn TableWriter>, ExportError> {
    Ok(match format {
        ExportFormat::Csv => Box::new(CsvWriter::new(config.csv_delimiter)?),
        ExportFormat::Json => Box::new(JsonWriter),
        ExportFormat::Html => Box::new(HtmlWriter::new(config.rows_per_page)),
    })
}

/// Writes `table` into `dir` as `<slug>_<timestamp>.<ext>` and returns the path.
///
/// The content goes to a hidden temporary file first and is renamed into place
/// only once fully written; on failure nothing is left in `dir`.
pub fn export_to_dir(
    table: &ExportTable,
    writer: &dyn TableWriter,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    if table.columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let mut buffer = Vec::new();
    writer.write_table(table, &mut buffer)?;

    fs::create_dir_all(dir)?;
    let file_name = export_file_name(&table.title, writer.format(), now);
    let target = dir.join(&file_name);
    let tmp = dir.join(format!(".{}.tmp", file_name));

    let result = fs::write(&tmp, &buffer).and_then(|_| fs::rename(&tmp, &target));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        tracing::error!("Export to {} failed: {}", target.display(), e);
        return Err(e.into());
    }

    tracing::info!(
        "Exported {} rows ({} bytes) to {}",
        table.rows.len(),
        buffer.len(),
        target.display()
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::export::ExportColumn;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn config() -> ExportConfig {
        ExportConfig {
            dir: "unused".to_string(),
            csv_delimiter: ';',
            rows_per_page: 40,
        }
    }

    fn table() -> ExportTable {
        ExportTable {
            title: "Clientes Ativos".to_string(),
            columns: vec![ExportColumn {
                label: "Nome".to_string(),
                width: None,
            }],
            rows: vec![vec!["Ana".to_string()]],
            totals: None,
        }
    }

    /// Fails after writing part of the output
    struct BrokenWriter;

    impl TableWriter for BrokenWriter {
        fn format(&self) -> ExportFormat {
            ExportFormat::Csv
        }

        fn write_table(&self, _: &ExportTable, out: &mut dyn Write) -> Result<(), ExportError> {
            out.write_all(b"partial")?;
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into())
        }
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_for(ExportFormat::Csv, &config()).unwrap();
        let path = export_to_dir(&table(), writer.as_ref(), dir.path(), now()).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "clientes_ativos_20240315_143000.csv"
        );
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Nome"));
        assert!(contents.contains("Ana"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_export_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_to_dir(&table(), &BrokenWriter, dir.path(), now()).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_no_columns() {
        let dir = tempfile::tempdir().unwrap();
        let mut empty = table();
        empty.columns.clear();
        let err = export_to_dir(&empty, &JsonWriter, dir.path(), now()).unwrap_err();
        assert!(matches!(err, ExportError::NoColumns));
    }

    #[test]
    fn test_writer_for_each_format() {
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Html] {
            assert_eq!(writer_for(format, &config()).unwrap().format(), format);
        }

        let mut bad = config();
        bad.csv_delimiter = 'ç';
        assert!(writer_for(ExportFormat::Csv, &bad).is_err());
    }
}
