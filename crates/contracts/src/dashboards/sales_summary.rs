use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::enums::{RecordStatus, Role};
use crate::shared::record::{parse_number, Record};
use crate::shared::table::status_style;

/// Sections of the home dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardSection {
    SalesOverview,
    Finance,
    Users,
}

impl DashboardSection {
    pub fn title(&self) -> &'static str {
        match self {
            DashboardSection::SalesOverview => "Visão geral de vendas",
            DashboardSection::Finance => "Financeiro",
            DashboardSection::Users => "Usuários",
        }
    }
}

/// Sections a role is allowed to see
pub fn dashboard_sections(role: Role) -> Vec<DashboardSection> {
    let mut sections = vec![DashboardSection::SalesOverview];
    if matches!(role, Role::Admin | Role::Finance) {
        sections.push(DashboardSection::Finance);
    }
    if role == Role::Admin {
        sections.push(DashboardSection::Users);
    }
    sections
}

/// Количество записей в одном статусе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: RecordStatus,
    pub label: String,
    pub count: usize,
}

/// Сводка для карточек дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_records: usize,
    /// Sorted by count (descending), then by label
    pub by_status: Vec<StatusCount>,
    /// Sum of the amount field over records where it parses
    pub total_amount: f64,
}

impl DashboardSummary {
    pub fn compute(records: &[Record], status_field: &str, amount_field: &str) -> Self {
        let mut counts: HashMap<RecordStatus, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.status(status_field)).or_insert(0) += 1;
        }

        let mut by_status: Vec<StatusCount> = counts
            .into_iter()
            .map(|(status, count)| StatusCount {
                label: status_style(&status).badge_label,
                status,
                count,
            })
            .collect();
        by_status.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        let total_amount = records
            .iter()
            .filter_map(|record| record.get(amount_field))
            .filter_map(parse_number)
            .sum();

        Self {
            total_records: records.len(),
            by_status,
            total_amount,
        }
    }

    pub fn count_of(&self, status: &RecordStatus) -> usize {
        self.by_status
            .iter()
            .find(|entry| &entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}
