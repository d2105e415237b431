use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус записи (продажа, клиент, ...) в том виде, в котором его отдаёт REST API
///
/// Known tags get their own variant; anything else is kept verbatim in `Other`
/// so that unknown statuses still render (with the neutral style).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordStatus {
    Pending,
    InProgress,
    Completed,
    Returned,
    Corrected,
    Canceled,
    Paid,
    Active,
    Inactive,
    /// Record has no status field (customers, cost types, ...)
    Unset,
    Other(String),
}

impl RecordStatus {
    /// Парсинг из строки (регистр и разделители не важны)
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "" => RecordStatus::Unset,
            "pending" => RecordStatus::Pending,
            "in_progress" => RecordStatus::InProgress,
            "completed" => RecordStatus::Completed,
            "returned" => RecordStatus::Returned,
            "corrected" => RecordStatus::Corrected,
            "canceled" | "cancelled" => RecordStatus::Canceled,
            "paid" => RecordStatus::Paid,
            "active" => RecordStatus::Active,
            "inactive" => RecordStatus::Inactive,
            _ => RecordStatus::Other(normalized),
        }
    }

    /// Код статуса, как он приходит с сервера
    pub fn code(&self) -> &str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::InProgress => "in_progress",
            RecordStatus::Completed => "completed",
            RecordStatus::Returned => "returned",
            RecordStatus::Corrected => "corrected",
            RecordStatus::Canceled => "canceled",
            RecordStatus::Paid => "paid",
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Unset => "",
            RecordStatus::Other(code) => code,
        }
    }

    /// Все известные статусы (без `Unset` и `Other`)
    pub fn known() -> Vec<RecordStatus> {
        vec![
            RecordStatus::Pending,
            RecordStatus::InProgress,
            RecordStatus::Completed,
            RecordStatus::Returned,
            RecordStatus::Corrected,
            RecordStatus::Canceled,
            RecordStatus::Paid,
            RecordStatus::Active,
            RecordStatus::Inactive,
        ]
    }
}

impl From<String> for RecordStatus {
    fn from(raw: String) -> Self {
        RecordStatus::parse(&raw)
    }
}

impl From<RecordStatus> for String {
    fn from(status: RecordStatus) -> Self {
        status.code().to_string()
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
