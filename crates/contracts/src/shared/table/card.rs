use serde::Serialize;

use crate::enums::RowAction;

use super::status_style::StatusStyle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub label: String,
    pub value: String,
}

/// Карточка записи для мобильного списка.
///
/// Same data as a table row, laid out as title/subtitle/fields; built by
/// [`TableRenderer::card`](super::TableRenderer::card).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDescriptor {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub fields: Vec<CardField>,
    pub style: StatusStyle,
    pub actions: Vec<RowAction>,
}
