//! Клиентская фильтрация, сортировка и пагинация списков.
//!
//! The engine is a pure function of `(records, filter, sort)`: it never
//! mutates the records, it returns references to them in the order the view
//! should render.

mod filter;
mod page;
mod sort;

pub use filter::{FieldFilter, FilterState, MatchMode, QueryConfig, DEFAULT_PAGE_SIZE, STATUS_ALL};
pub use page::{page_bounds, total_pages, ListPage};
pub use sort::{SortDirection, SortKind, SortState};

use crate::shared::record::Record;

/// Filtered and sorted records, without pagination (used by export)
pub fn run_unpaged<'a>(
    records: &'a [Record],
    filter: &FilterState,
    sort: &SortState,
    config: &QueryConfig,
) -> Vec<&'a Record> {
    let mut rows: Vec<&Record> = records
        .iter()
        .filter(|record| filter::matches(record, filter, config))
        .collect();

    if sort.is_active() {
        let kind = config
            .sort_kind(&sort.field)
            .resolve(rows.iter().map(|record| record.get(&sort.field)));
        // sort_by is a stable merge sort: records with equal keys keep
        // their input order in both directions.
        rows.sort_by(|a, b| {
            sort.direction
                .apply(kind.compare(a.get(&sort.field), b.get(&sort.field)))
        });
    }
    rows
}

/// Filters, sorts and cuts out the requested page.
///
/// Out-of-range pages come back empty with correct totals; clamping the page
/// number is left to the caller (`FilterState::clamp_page`).
pub fn run_query<'a>(
    records: &'a [Record],
    filter: &FilterState,
    sort: &SortState,
    config: &QueryConfig,
) -> ListPage<'a> {
    let rows = run_unpaged(records, filter, sort, config);
    let total_items = rows.len();
    let page_size = filter.page_size.max(1);
    let bounds = page_bounds(total_items, filter.page, page_size);

    ListPage {
        items: rows[bounds].to_vec(),
        total_items,
        total_pages: total_pages(total_items, page_size),
        page: filter.page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn records(values: Vec<serde_json::Value>) -> Vec<Record> {
        values
            .into_iter()
            .map(|v| Record::from_value(v).unwrap())
            .collect()
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().map(|r| r.id()).collect()
    }

    fn numbered(count: usize) -> Vec<Record> {
        records(
            (1..=count)
                .map(|i| json!({ "id": i, "name": format!("item {:02}", i) }))
                .collect(),
        )
    }

    #[test]
    fn test_pagination_of_23_items() {
        let data = numbered(23);
        let sort = SortState::default();
        let config = QueryConfig::default();

        let sizes: Vec<usize> = (1..=3)
            .map(|page| {
                let filter = FilterState::default().with_page(page, 10);
                let result = run_query(&data, &filter, &sort, &config);
                assert_eq!(result.total_items, 23);
                assert_eq!(result.total_pages, 3);
                result.items.len()
            })
            .collect();
        assert_eq!(sizes, vec![10, 10, 3]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let data = numbered(5);
        let filter = FilterState::default().with_page(7, 10);
        let result = run_query(&data, &filter, &SortState::default(), &QueryConfig::default());
        assert!(result.is_empty());
        assert_eq!(result.total_items, 5);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.range_label(), "0 de 5");
    }

    #[test]
    fn test_empty_record_set() {
        let result = run_query(
            &[],
            &FilterState::default().with_search("x"),
            &SortState::ascending("name"),
            &QueryConfig::default(),
        );
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_sort_is_stable() {
        let data = records(vec![
            json!({ "id": 1, "name": "b" }),
            json!({ "id": 2, "name": "a" }),
            json!({ "id": 3, "name": "a" }),
        ]);
        let rows = run_unpaged(
            &data,
            &FilterState::default(),
            &SortState::ascending("name"),
            &QueryConfig::default(),
        );
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);

        let rows = run_unpaged(
            &data,
            &FilterState::default(),
            &SortState::descending("name"),
            &QueryConfig::default(),
        );
        assert_eq!(ids(&rows), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_mixed_numeric_and_alphanumeric_names() {
        let data = records(
            (0..3000)
                .map(|i| {
                    let name = match i % 3 {
                        0 => format!("{}", i * 7 % 1000),
                        1 => format!("{}x", i * 13 % 1000),
                        _ => format!("{}", i % 97),
                    };
                    json!({ "id": i, "name": name })
                })
                .collect(),
        );

        for sort in [SortState::ascending("name"), SortState::descending("name")] {
            let rows = run_unpaged(&data, &FilterState::default(), &sort, &QueryConfig::default());
            assert_eq!(rows.len(), data.len());
            for pair in rows.windows(2) {
                let ordering = sort.direction.apply(
                    SortKind::Text.compare(pair[0].get("name"), pair[1].get("name")),
                );
                assert_ne!(ordering, std::cmp::Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_auto_sort_of_numeric_strings_is_numeric() {
        let data = records(vec![
            json!({ "id": 1, "code": "10" }),
            json!({ "id": 2, "code": "9" }),
            json!({ "id": 3 }),
            json!({ "id": 4, "code": 100 }),
        ]);
        let rows = run_unpaged(
            &data,
            &FilterState::default(),
            &SortState::ascending("code"),
            &QueryConfig::default(),
        );
        assert_eq!(ids(&rows), vec!["3", "2", "1", "4"]);
    }

    #[test]
    fn test_sort_by_nested_money_field() {
        let data = records(vec![
            json!({ "id": 1, "financialSummary": { "totalPaid": 300 } }),
            json!({ "id": 2, "financialSummary": { "totalPaid": "45,90" } }),
            json!({ "id": 3 }),
            json!({ "id": 4, "financialSummary": { "totalPaid": 1200.5 } }),
        ]);
        let mut config = QueryConfig::default();
        config
            .sort_kinds
            .insert("financialSummary.totalPaid".to_string(), SortKind::Number);

        let rows = run_unpaged(
            &data,
            &FilterState::default(),
            &SortState::descending("financialSummary.totalPaid"),
            &config,
        );
        assert_eq!(ids(&rows), vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn test_status_and_search_combined() {
        let data = records(vec![
            json!({ "id": 1, "name": "foo one", "status": "active" }),
            json!({ "id": 2, "name": "foo two", "status": "inactive" }),
            json!({ "id": 3, "name": "bar", "status": "active" }),
            json!({ "id": 4, "name": "Foo three", "status": "active" }),
            json!({ "id": 5, "name": "foo four", "status": "inactive" }),
            json!({ "id": 6, "name": "foo five", "status": "pending" }),
        ]);
        let config = QueryConfig::default().with_search_fields(&["name"]);
        let filter = FilterState::default().with_search("foo").with_status("active");
        let rows = run_unpaged(&data, &filter, &SortState::default(), &config);
        assert_eq!(ids(&rows), vec!["1", "4"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let data = numbered(3);
        let before = data.clone();
        let _ = run_query(
            &data,
            &FilterState::default(),
            &SortState::descending("name"),
            &QueryConfig::default(),
        );
        assert_eq!(data, before);
    }

    fn arb_records() -> impl Strategy<Value = Vec<Record>> {
        proptest::collection::vec(("[a-c]{0,2}", 0u8..4, "[a-c]{0,3}"), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, status, tag))| {
                    let status = ["pending", "completed", "paid", "returned"][status as usize];
                    Record::from_value(json!({ "id": i, "name": name, "status": status, "tag": tag }))
                        .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_pages_reconstruct_full_sequence(
            data in arb_records(),
            page_size in 1usize..8,
            descending in any::<bool>(),
        ) {
            let sort = if descending { SortState::descending("name") } else { SortState::ascending("name") };
            let config = QueryConfig::default();
            let full = run_unpaged(&data, &FilterState::default(), &sort, &config);
            let first = run_query(&data, &FilterState::default().with_page(1, page_size), &sort, &config);

            let mut rebuilt = Vec::new();
            for page in 1..=first.total_pages {
                let filter = FilterState::default().with_page(page, page_size);
                let result = run_query(&data, &filter, &sort, &config);
                let expected_len = page_size.min(result.total_items - (page - 1) * page_size);
                prop_assert_eq!(result.items.len(), expected_len);
                rebuilt.extend(result.items);
            }
            prop_assert_eq!(ids(&rebuilt), ids(&full));
        }

        #[test]
        fn prop_sort_is_stable(data in arb_records()) {
            let rows = run_unpaged(&data, &FilterState::default(), &SortState::ascending("name"), &QueryConfig::default());
            for pair in rows.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if a.text("name") == b.text("name") {
                    let ia: usize = a.id().parse().unwrap();
                    let ib: usize = b.id().parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }

        #[test]
        fn prop_extra_filter_never_widens(
            data in arb_records(),
            term in "[a-c]{0,2}",
            status in prop::sample::select(vec!["all", "pending", "paid"]),
            tag in "[a-c]{0,2}",
        ) {
            let config = QueryConfig::default().with_search_fields(&["name"]);
            let sort = SortState::default();
            let base = FilterState::default().with_search(term.clone());
            let with_status = base.clone().with_status(status);
            let with_tag = with_status.clone().with_field_filter(FieldFilter::contains("tag", tag));

            let n0 = run_unpaged(&data, &base, &sort, &config).len();
            let n1 = run_unpaged(&data, &with_status, &sort, &config).len();
            let n2 = run_unpaged(&data, &with_tag, &sort, &config).len();
            prop_assert!(n1 <= n0);
            prop_assert!(n2 <= n1);
        }
    }
}
