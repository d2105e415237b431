use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::sort::SortKind;
use crate::enums::RecordStatus;
use crate::shared::record::{value_text, Record};
use crate::shared::text::contains_ignore_case;

/// Value of the status filter that disables it
pub const STATUS_ALL: &str = "all";

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Как сравнивать значение поля с фильтром
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive equality
    #[default]
    Exact,
    /// Case-insensitive substring
    Contains,
}

/// Фильтр по конкретному полю (например, имя клиента или тип услуги)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub value: String,
    #[serde(default)]
    pub mode: MatchMode,
}

impl FieldFilter {
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            mode: MatchMode::Exact,
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            mode: MatchMode::Contains,
        }
    }

    /// An empty value means "no filter"
    pub fn is_active(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(actual) = record.text(&self.field) else {
            return false;
        };
        let expected = self.value.trim();
        match self.mode {
            MatchMode::Exact => actual.trim().to_lowercase() == expected.to_lowercase(),
            MatchMode::Contains => contains_ignore_case(&actual, expected),
        }
    }
}

/// Состояние фильтров и пагинации списка.
///
/// Owned by the view and recomputed from scratch on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search_term: String,
    /// `"all"` or a status code
    pub status_filter: String,
    pub field_filters: Vec<FieldFilter>,
    /// 1-indexed
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: STATUS_ALL.to_string(),
            field_filters: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_filter = status.into();
        self
    }

    pub fn with_field_filter(mut self, filter: FieldFilter) -> Self {
        self.field_filters.push(filter);
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn is_status_filter_active(&self) -> bool {
        let status = self.status_filter.trim();
        !status.is_empty() && !status.eq_ignore_ascii_case(STATUS_ALL)
    }

    /// Page number moved back into `1..=total_pages` (the engine itself
    /// tolerates out-of-range pages; this is for navigation controls)
    pub fn clamp_page(&self, total_pages: usize) -> usize {
        self.page.clamp(1, total_pages.max(1))
    }

    /// Any change of the filters sends the user back to the first page
    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}

/// Per-list settings of the query engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Fields (dot paths) the free-text search looks at; empty = all top-level fields
    pub search_fields: Vec<String>,
    pub status_field: String,
    /// Search terms shorter than this (after trimming) are ignored
    pub min_search_len: usize,
    /// Comparator per sortable field; unlisted fields use `SortKind::Auto`
    pub sort_kinds: BTreeMap<String, SortKind>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            status_field: "status".to_string(),
            min_search_len: 1,
            sort_kinds: BTreeMap::new(),
        }
    }
}

impl QueryConfig {
    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn sort_kind(&self, field: &str) -> SortKind {
        self.sort_kinds.get(field).copied().unwrap_or_default()
    }

    fn is_search_active(&self, term: &str) -> bool {
        let len = term.chars().count();
        len > 0 && len >= self.min_search_len
    }
}

fn matches_search(record: &Record, term: &str, config: &QueryConfig) -> bool {
    if config.search_fields.is_empty() {
        return record
            .fields()
            .values()
            .any(|value| contains_ignore_case(&value_text(value), term));
    }
    config
        .search_fields
        .iter()
        .filter_map(|field| record.text(field))
        .any(|text| contains_ignore_case(&text, term))
}

/// A record passes when every active predicate passes
pub(crate) fn matches(record: &Record, filter: &FilterState, config: &QueryConfig) -> bool {
    let term = filter.search_term.trim();
    if config.is_search_active(term) && !matches_search(record, term, config) {
        return false;
    }

    if filter.is_status_filter_active()
        && record.status(&config.status_field) != RecordStatus::parse(&filter.status_filter)
    {
        return false;
    }

    filter.field_filters.iter().all(|f| f.matches(record))
}
