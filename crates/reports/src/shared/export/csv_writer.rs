use std::io::Write;

use contracts::shared::export::{ExportFormat, ExportTable};

use super::{ExportError, TableWriter};

/// UTF-8 BOM so Excel detects the encoding of accented labels
const BOM: &str = "\u{FEFF}";

/// CSV for Excel: BOM, `;` by default, quoting only where needed
#[derive(Debug, Clone, Copy)]
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new(delimiter: char) -> Result<Self, ExportError> {
        if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
            return Err(ExportError::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter: delimiter as u8,
        })
    }
}

impl TableWriter for CsvWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write_table(&self, table: &ExportTable, out: &mut dyn Write) -> Result<(), ExportError> {
        out.write_all(BOM.as_bytes())?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);

        writer.write_record(table.headers())?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        if let Some(totals) = &table.totals {
            writer.write_record(totals)?;
        }
        writer.flush()?;
        Ok(())
    }
}
