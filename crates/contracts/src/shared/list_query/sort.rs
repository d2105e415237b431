use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::shared::record::{parse_date, parse_number, value_text};
use crate::shared::text::collate;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    /// Applies the direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Активная сортировка: ровно одно поле и направление
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Empty string = keep the input order
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }

    /// Header click: the same field flips the direction, a new field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = self.direction.flip();
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Ascending;
        }
    }

    /// Индикатор сортировки для заголовка колонки
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// How values of a column are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Numbers if both sides parse as numbers, else dates, else text
    #[default]
    Auto,
    Text,
    Number,
    Date,
}

/// Missing values first; `cmp` decides between two present values
fn nulls_first<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

fn compare_text(a: &Value, b: &Value) -> Ordering {
    collate(&value_text(a), &value_text(b))
}

fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    nulls_first(parse_number(a), parse_number(b), |x, y| x.total_cmp(&y))
}

fn compare_dates(a: &Value, b: &Value) -> Ordering {
    nulls_first(parse_date(a), parse_date(b), |x, y| x.cmp(&y))
}

/// Rank of a value under `Auto`: numbers, then dates, then text
fn auto_class(value: &Value) -> u8 {
    if parse_number(value).is_some() {
        0
    } else if parse_date(value).is_some() {
        1
    } else {
        2
    }
}

impl SortKind {
    /// Ascending comparison of two (possibly missing) field values.
    ///
    /// `Auto` compares values of different classes by class (numbers before
    /// dates before text) so it stays a total order on mixed columns.
    pub fn compare(self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        nulls_first(a, b, |a, b| match self {
            SortKind::Text => compare_text(a, b),
            SortKind::Number => compare_numbers(a, b),
            SortKind::Date => compare_dates(a, b),
            SortKind::Auto => match auto_class(a).cmp(&auto_class(b)) {
                Ordering::Equal => match auto_class(a) {
                    0 => compare_numbers(a, b),
                    1 => compare_dates(a, b),
                    _ => compare_text(a, b),
                },
                other => other,
            },
        })
    }

    /// Fixes the comparator for one sort: `Auto` becomes `Number` when every
    /// present value is numeric, `Date` when every one is a date, else `Text`.
    /// Other kinds are returned unchanged.
    pub fn resolve<'v, I>(self, values: I) -> SortKind
    where
        I: IntoIterator<Item = Option<&'v Value>>,
    {
        if self != SortKind::Auto {
            return self;
        }
        let (mut numbers, mut dates) = (true, true);
        for value in values.into_iter().flatten() {
            numbers = numbers && parse_number(value).is_some();
            dates = dates && parse_date(value).is_some();
            if !numbers && !dates {
                return SortKind::Text;
            }
        }
        if numbers {
            SortKind::Number
        } else if dates {
            SortKind::Date
        } else {
            SortKind::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toggle() {
        let mut sort = SortState::ascending("name");
        sort.toggle("name");
        assert_eq!(sort, SortState::descending("name"));
        sort.toggle("name");
        assert_eq!(sort, SortState::ascending("name"));

        let mut sort = SortState::descending("name");
        sort.toggle("total");
        assert_eq!(sort, SortState::ascending("total"));
    }

    #[test]
    fn test_indicator() {
        let sort = SortState::descending("name");
        assert_eq!(sort.indicator("name"), " ▼");
        assert_eq!(sort.indicator("total"), " ⇅");
    }

    #[test]
    fn test_number_compare() {
        let kind = SortKind::Number;
        assert_eq!(kind.compare(Some(&json!(9)), Some(&json!(10))), Ordering::Less);
        assert_eq!(kind.compare(Some(&json!("1.234,50")), Some(&json!(1000))), Ordering::Greater);
        assert_eq!(kind.compare(Some(&json!("abc")), Some(&json!(1))), Ordering::Less);
    }

    #[test]
    fn test_date_compare() {
        let kind = SortKind::Date;
        assert_eq!(
            kind.compare(Some(&json!("15/03/2024")), Some(&json!("2024-02-01"))),
            Ordering::Greater
        );
        assert_eq!(
            kind.compare(Some(&json!("2024-03-15T10:00:00Z")), Some(&json!("2024-03-15T09:00:00Z"))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_auto_compare() {
        let kind = SortKind::Auto;
        assert_eq!(kind.compare(Some(&json!("9")), Some(&json!("10"))), Ordering::Less);
        assert_eq!(kind.compare(Some(&json!("Bruno")), Some(&json!("álvaro"))), Ordering::Greater);
        assert_eq!(
            kind.compare(Some(&json!("01/02/2024")), Some(&json!("2023-12-31"))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_auto_compare_is_transitive_across_classes() {
        let kind = SortKind::Auto;
        let (nine, ten, mixed) = (json!("9"), json!("10"), json!("1a"));
        assert_eq!(kind.compare(Some(&nine), Some(&ten)), Ordering::Less);
        assert_eq!(kind.compare(Some(&ten), Some(&mixed)), Ordering::Less);
        assert_eq!(kind.compare(Some(&nine), Some(&mixed)), Ordering::Less);
        assert_eq!(
            kind.compare(Some(&json!("2024-01-01")), Some(&json!("abc"))),
            Ordering::Less
        );
    }

    #[test]
    fn test_resolve_auto() {
        let numbers = [json!(9), json!("10"), json!("1.234,50")];
        assert_eq!(
            SortKind::Auto.resolve(numbers.iter().map(Some).chain([None])),
            SortKind::Number
        );

        let dates = [json!("2024-01-01"), json!("15/03/2024")];
        assert_eq!(SortKind::Auto.resolve(dates.iter().map(Some)), SortKind::Date);

        let mixed = [json!("9"), json!("1a"), json!("2024-01-01")];
        assert_eq!(SortKind::Auto.resolve(mixed.iter().map(Some)), SortKind::Text);

        assert_eq!(SortKind::Auto.resolve([None]), SortKind::Number);
        assert_eq!(SortKind::Date.resolve(mixed.iter().map(Some)), SortKind::Date);
    }

    #[test]
    fn test_missing_values_sort_first() {
        for kind in [SortKind::Auto, SortKind::Text, SortKind::Number, SortKind::Date] {
            assert_eq!(kind.compare(None, Some(&json!("x"))), Ordering::Less);
            assert_eq!(kind.compare(Some(&json!("x")), None), Ordering::Greater);
            assert_eq!(kind.compare(None, None), Ordering::Equal);
        }
    }
}
