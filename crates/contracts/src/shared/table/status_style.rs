use serde::{Deserialize, Serialize};

use crate::enums::RecordStatus;

/// Badge variants of the UI kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Primary => "badge--primary",
            BadgeColor::Success => "badge--success",
            BadgeColor::Warning => "badge--warning",
            BadgeColor::Error => "badge--error",
            BadgeColor::Neutral => "badge--neutral",
        }
    }
}

/// Оформление строки и бейджа для статуса
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusStyle {
    pub row_class: String,
    pub badge_label: String,
    pub badge_color: BadgeColor,
}

const DEFAULT_ROW_CLASS: &str = "row--default";

/// (status code, row class, badge label, badge color)
const STATUS_STYLES: &[(&str, &str, &str, BadgeColor)] = &[
    ("pending", "row--pending", "Pendente", BadgeColor::Warning),
    ("in_progress", "row--in-progress", "Em andamento", BadgeColor::Primary),
    ("completed", "row--completed", "Concluído", BadgeColor::Success),
    ("returned", "row--returned", "Devolvido", BadgeColor::Warning),
    ("corrected", "row--corrected", "Corrigido", BadgeColor::Primary),
    ("canceled", "row--canceled", "Cancelado", BadgeColor::Error),
    ("paid", "row--paid", "Pago", BadgeColor::Success),
    ("active", "row--active", "Ativo", BadgeColor::Success),
    ("inactive", "row--inactive", "Inativo", BadgeColor::Neutral),
];

/// Style of `status`; unmapped statuses get the neutral style with the raw
/// code as label
pub fn status_style(status: &RecordStatus) -> StatusStyle {
    let code = status.code();
    match STATUS_STYLES.iter().find(|(known, ..)| *known == code) {
        Some((_, row_class, label, color)) => StatusStyle {
            row_class: row_class.to_string(),
            badge_label: label.to_string(),
            badge_color: *color,
        },
        None => StatusStyle {
            row_class: DEFAULT_ROW_CLASS.to_string(),
            badge_label: if code.is_empty() { "—" } else { code }.to_string(),
            badge_color: BadgeColor::Neutral,
        },
    }
}
