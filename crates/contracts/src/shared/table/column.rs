use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{RecordStatus, Role};
use crate::shared::document::{format_document, format_phone, strip_non_digits, DocumentKind};
use crate::shared::format::{format_date, format_datetime, format_decimal, format_money, format_percent};
use crate::shared::list_query::SortKind;
use crate::shared::record::{parse_date, parse_number, value_text, Record};

use super::status_style::status_style;

/// Placeholder for missing values (undefined field or broken nested path)
pub const MISSING_VALUE: &str = "N/A";

fn default_true() -> bool {
    true
}

/// Форматтер значения ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnFormat {
    #[default]
    Text,
    Number {
        decimals: u8,
    },
    /// `R$ 1.234,56`
    Money,
    Percent {
        decimals: u8,
    },
    Date,
    DateTime,
    /// CPF or CNPJ, chosen by digit count
    Document,
    Phone,
    /// Status code rendered as its badge label
    Status,
    YesNo,
}

impl ColumnFormat {
    /// Formats a present value. Values the formatter cannot interpret are
    /// shown as plain text rather than dropped.
    pub fn apply(&self, value: &Value) -> String {
        match self {
            ColumnFormat::Text => value_text(value),
            ColumnFormat::Number { decimals } => parse_number(value)
                .map(|n| format_decimal(n, *decimals))
                .unwrap_or_else(|| value_text(value)),
            ColumnFormat::Money => parse_number(value)
                .map(format_money)
                .unwrap_or_else(|| value_text(value)),
            ColumnFormat::Percent { decimals } => parse_number(value)
                .map(|n| format_percent(n, *decimals))
                .unwrap_or_else(|| value_text(value)),
            ColumnFormat::Date => parse_date(value)
                .map(|d| format_date(&d))
                .unwrap_or_else(|| value_text(value)),
            ColumnFormat::DateTime => parse_date(value)
                .map(|d| format_datetime(&d))
                .unwrap_or_else(|| value_text(value)),
            ColumnFormat::Document => {
                let raw = value_text(value);
                if strip_non_digits(&raw).is_empty() {
                    raw
                } else {
                    format_document(&raw, DocumentKind::detect(&raw))
                }
            }
            ColumnFormat::Phone => {
                let raw = value_text(value);
                if strip_non_digits(&raw).is_empty() {
                    raw
                } else {
                    format_phone(&raw)
                }
            }
            ColumnFormat::Status => {
                status_style(&RecordStatus::parse(&value_text(value))).badge_label
            }
            ColumnFormat::YesNo => {
                let truthy = match value {
                    Value::Bool(b) => *b,
                    Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
                    other => matches!(
                        value_text(other).trim().to_lowercase().as_str(),
                        "true" | "1" | "sim" | "yes" | "s"
                    ),
                };
                let label = if truthy { "Sim" } else { "Não" };
                label.to_string()
            }
        }
    }
}

/// Описание колонки таблицы.
///
/// Built once per table configuration and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Dot path into the record (`customer.name`, `financialSummary.totalPaid`)
    pub field: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColumnFormat>,
    #[serde(default)]
    pub sort: SortKind,
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Width hint in pixels, passed through to renderers and serializers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u16>,
    /// `None` = visible to every role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to: Option<Vec<Role>>,
    /// Included in the totals row of exports
    #[serde(default)]
    pub summable: bool,
}

impl ColumnSpec {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            format: None,
            sort: SortKind::Auto,
            sortable: true,
            width: None,
            visible_to: None,
            summable: false,
        }
    }

    /// Sets the formatter and the comparator that fits it
    pub fn with_format(mut self, format: ColumnFormat) -> Self {
        self.sort = match format {
            ColumnFormat::Number { .. } | ColumnFormat::Money | ColumnFormat::Percent { .. } => {
                SortKind::Number
            }
            ColumnFormat::Date | ColumnFormat::DateTime => SortKind::Date,
            ColumnFormat::Text
            | ColumnFormat::Document
            | ColumnFormat::Phone
            | ColumnFormat::Status
            | ColumnFormat::YesNo => SortKind::Text,
        };
        self.format = Some(format);
        self
    }

    pub fn with_sort(mut self, sort: SortKind) -> Self {
        self.sort = sort;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn visible_to(mut self, roles: &[Role]) -> Self {
        self.visible_to = Some(roles.to_vec());
        self
    }

    pub fn summable(mut self) -> Self {
        self.summable = true;
        self
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        self.visible_to
            .as_ref()
            .map_or(true, |roles| roles.contains(&role))
    }

    pub fn resolve<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        record.get(&self.field)
    }

    /// Display text of this column for `record`; missing values become [`MISSING_VALUE`]
    pub fn display(&self, record: &Record) -> String {
        match self.resolve(record) {
            Some(value) => self.format.unwrap_or_default().apply(value),
            None => MISSING_VALUE.to_string(),
        }
    }
}
