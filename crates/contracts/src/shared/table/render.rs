use serde::Serialize;

use crate::enums::{Role, RowAction};
use crate::shared::list_query::SortState;
use crate::shared::record::Record;

use super::card::{CardDescriptor, CardField};
use super::column::ColumnSpec;
use super::permissions::PermissionTable;
use super::status_style::{status_style, StatusStyle};

/// Column header as the view shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedColumn {
    pub field: String,
    pub label: String,
    pub width: Option<u16>,
    pub sortable: bool,
    /// " ▲", " ▼" or " ⇅"; empty for unsortable columns
    pub sort_indicator: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub id: String,
    /// One formatted cell per visible column
    pub cells: Vec<String>,
    pub style: StatusStyle,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub columns: Vec<RenderedColumn>,
    pub rows: Vec<RenderedRow>,
}

/// Turns a page of records into rows for a given role
#[derive(Debug, Clone)]
pub struct TableRenderer<'a> {
    columns: &'a [ColumnSpec],
    permissions: &'a PermissionTable,
    status_field: &'a str,
}

impl<'a> TableRenderer<'a> {
    pub fn new(columns: &'a [ColumnSpec]) -> Self {
        Self {
            columns,
            permissions: PermissionTable::standard(),
            status_field: "status",
        }
    }

    pub fn with_permissions(mut self, permissions: &'a PermissionTable) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_status_field(mut self, status_field: &'a str) -> Self {
        self.status_field = status_field;
        self
    }

    pub fn visible_columns(&self, role: Role) -> Vec<&'a ColumnSpec> {
        self.columns
            .iter()
            .filter(|column| column.is_visible_to(role))
            .collect()
    }

    pub fn render_row(&self, record: &Record, role: Role) -> RenderedRow {
        let status = record.status(self.status_field);
        RenderedRow {
            id: record.id(),
            cells: self
                .visible_columns(role)
                .iter()
                .map(|column| column.display(record))
                .collect(),
            style: status_style(&status),
            actions: self.permissions.visible_actions(role, &status),
        }
    }

    pub fn render(&self, page: &[&Record], role: Role, sort: &SortState) -> RenderedTable {
        let columns = self
            .visible_columns(role)
            .into_iter()
            .map(|column| RenderedColumn {
                field: column.field.clone(),
                label: column.label.clone(),
                width: column.width,
                sortable: column.sortable,
                sort_indicator: if column.sortable {
                    sort.indicator(&column.field)
                } else {
                    ""
                },
            })
            .collect();

        RenderedTable {
            columns,
            rows: page.iter().map(|record| self.render_row(record, role)).collect(),
        }
    }

    /// Mobile card for one record: the first visible column is the title,
    /// the second the subtitle, the rest become label/value fields
    pub fn card(&self, record: &Record, role: Role) -> CardDescriptor {
        let row = self.render_row(record, role);
        let mut cells = self
            .visible_columns(role)
            .into_iter()
            .zip(row.cells)
            .map(|(column, value)| CardField {
                label: column.label.clone(),
                value,
            });

        let title = cells.next().map(|f| f.value).unwrap_or_else(|| row.id.clone());
        let subtitle = cells.next().map(|f| f.value);

        CardDescriptor {
            id: row.id,
            title,
            subtitle,
            fields: cells.collect(),
            style: row.style,
            actions: row.actions,
        }
    }

    pub fn cards(&self, page: &[&Record], role: Role) -> Vec<CardDescriptor> {
        page.iter().map(|record| self.card(record, role)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::ColumnFormat;
    use serde_json::json;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("customer.name", "Cliente"),
            ColumnSpec::new("total", "Valor").with_format(ColumnFormat::Money),
            ColumnSpec::new("cost", "Custo")
                .with_format(ColumnFormat::Money)
                .visible_to(&[Role::Admin]),
            ColumnSpec::new("status", "Status")
                .with_format(ColumnFormat::Status)
                .unsortable(),
        ]
    }

    fn sale() -> Record {
        Record::from_value(json!({
            "id": 42,
            "customer": { "name": "Ana Lima" },
            "total": 99.9,
            "cost": 40,
            "status": "completed"
        }))
        .unwrap()
    }

    #[test]
    fn test_render_hides_restricted_columns() {
        let cols = columns();
        let record = sale();
        let renderer = TableRenderer::new(&cols);

        let seller = renderer.render(&[&record], Role::Seller, &SortState::ascending("total"));
        let labels: Vec<&str> = seller.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Cliente", "Valor", "Status"]);
        assert_eq!(seller.columns[1].sort_indicator, " ▲");
        assert_eq!(seller.columns[2].sort_indicator, "");
        assert_eq!(seller.rows[0].cells, vec!["Ana Lima", "R$ 99,90", "Concluído"]);
        assert_eq!(seller.rows[0].actions, vec![RowAction::View]);

        let admin = renderer.render(&[&record], Role::Admin, &SortState::default());
        assert_eq!(admin.columns.len(), 4);
        assert_eq!(admin.rows[0].cells[2], "R$ 40,00");
        assert!(admin.rows[0].actions.contains(&RowAction::Return));
        assert_eq!(admin.rows[0].style.row_class, "row--completed");
    }

    #[test]
    fn test_card_descriptor() {
        let cols = columns();
        let record = sale();
        let card = TableRenderer::new(&cols).card(&record, Role::Manager);
        assert_eq!(card.id, "42");
        assert_eq!(card.title, "Ana Lima");
        assert_eq!(card.subtitle.as_deref(), Some("R$ 99,90"));
        assert_eq!(card.fields.len(), 1);
        assert_eq!(card.fields[0].label, "Status");
        assert_eq!(card.fields[0].value, "Concluído");
        assert_eq!(card.actions, vec![RowAction::View, RowAction::Return]);
    }

    #[test]
    fn test_card_without_columns_uses_id() {
        let record = sale();
        let card = TableRenderer::new(&[]).card(&record, Role::Viewer);
        assert_eq!(card.title, "42");
        assert!(card.subtitle.is_none());
        assert!(card.fields.is_empty());
    }
}
