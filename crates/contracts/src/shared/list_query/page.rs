use serde::Serialize;
use std::ops::Range;

use crate::shared::record::Record;

/// Одна страница результата и счётчики для элементов пагинации
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<'a> {
    pub items: Vec<&'a Record>,
    /// Filtered count before pagination
    pub total_items: usize,
    /// Never less than 1
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ListPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "11-20 de 23", or "0 de 0" for an empty page
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 de {}", self.total_items);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} de {}", first, last, self.total_items)
    }
}

/// `ceil(total_items / page_size)`, at least 1; a zero page size counts as 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Index range of page `page` (1-indexed). Page 0 and pages past the end
/// give an empty range instead of an error.
pub fn page_bounds(total_items: usize, page: usize, page_size: usize) -> Range<usize> {
    let size = page_size.max(1);
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(size);
    if start >= total_items {
        return total_items..total_items;
    }
    let end = start.saturating_add(size).min(total_items);
    start..end
}
