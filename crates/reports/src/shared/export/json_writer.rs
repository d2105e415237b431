use std::io::Write;

use contracts::shared::export::{ExportColumn, ExportFormat, ExportTable};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{ExportError, TableWriter};

/// Array of objects keyed by column label; the totals row, if any, is the last element
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

/// One row serialized in column order
struct LabeledRow<'a> {
    columns: &'a [ExportColumn],
    cells: &'a [String],
}

impl Serialize for LabeledRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(&column.label, cell)?;
        }
        map.end()
    }
}

struct LabeledRows<'a>(&'a ExportTable);

impl Serialize for LabeledRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.0;
        let mut seq = serializer.serialize_seq(None)?;
        for cells in table.rows.iter().chain(table.totals.iter()) {
            seq.serialize_element(&LabeledRow {
                columns: &table.columns,
                cells,
            })?;
        }
        seq.end()
    }
}

impl TableWriter for JsonWriter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn write_table(&self, table: &ExportTable, out: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *out, &LabeledRows(table))?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
