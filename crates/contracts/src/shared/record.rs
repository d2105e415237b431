//! Record: one row of business data as it comes from the REST API

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::RecordStatus;

/// Synthetic field holding the date a renderer should show for the record
pub const DISPLAY_DATE_FIELD: &str = "displayDate";

/// Fields tried, in order, when resolving the display date
pub const DEFAULT_DATE_CANDIDATES: &[&str] = &["date", "createdAt"];

/// JSON object with a stable `id`.
///
/// Records are read-only once loaded: the query engine filters and reorders
/// references to them and never touches the fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value; only objects are records
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `id` as text (numeric ids are rendered without quotes), empty if missing
    pub fn id(&self) -> String {
        self.get("id").map(value_text).unwrap_or_default()
    }

    /// Resolves a dot-separated path such as `financialSummary.totalPaid`.
    ///
    /// Array elements are addressed by index (`items.0.name`). JSON `null` is
    /// reported as missing.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    /// Value at `path` converted to text
    pub fn text(&self, path: &str) -> Option<String> {
        self.get(path).map(value_text)
    }

    /// Status stored in `field`; a missing field yields `RecordStatus::Unset`
    pub fn status(&self, field: &str) -> RecordStatus {
        self.text(field)
            .map(|raw| RecordStatus::parse(&raw))
            .unwrap_or(RecordStatus::Unset)
    }

    /// Stores the first non-empty candidate under [`DISPLAY_DATE_FIELD`].
    ///
    /// Called once at the loading boundary (`sale.date`, falling back to
    /// `sale.createdAt`) so renderers read a single field.
    pub fn with_display_date(mut self, candidates: &[&str]) -> Self {
        let resolved = candidates
            .iter()
            .filter_map(|field| self.get(field))
            .find(|value| !matches!(value, Value::String(s) if s.trim().is_empty()))
            .cloned();
        if let Some(value) = resolved {
            self.0.insert(DISPLAY_DATE_FIELD.to_string(), value);
        }
        self
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record::new(fields)
    }
}

/// Plain text form of a JSON value (strings without quotes)
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Numeric value of a JSON number or numeric string
pub fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_text(s),
        _ => None,
    }
}

/// Parses "1234.5", "1.234,56", "1.500", "R$ 1.234,56", "-R$ 50,00" or "12,5%".
///
/// When a comma is present it is the decimal separator and dots are
/// thousands separators (pt-BR). Without a comma, dot-grouped integers
/// (`1.500`, `12.345.678`) are thousands; anything else is parsed as is.
pub fn parse_number_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let cleaned: String = rest
        .trim_start()
        .trim_start_matches("R$")
        .trim_end_matches('%')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') || is_dot_grouped(&cleaned) {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };

    let value = normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())?;
    Some(if negative { -value } else { value })
}

/// `^\d{1,3}(\.\d{3})+$`
fn is_dot_grouped(text: &str) -> bool {
    let mut groups = text.split('.');
    let head_ok = groups
        .next()
        .map_or(false, |g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Date/time value of a JSON string
pub fn parse_date(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_date_text(s),
        _ => None,
    }
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DD` and `DD/MM/YYYY`
pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_nested_path() {
        let r = record(json!({
            "id": 7,
            "financialSummary": { "totalPaid": 150.5, "notes": null },
            "items": [{ "name": "Lavagem" }]
        }));
        assert_eq!(r.id(), "7");
        assert_eq!(r.get("financialSummary.totalPaid"), Some(&json!(150.5)));
        assert_eq!(r.get("financialSummary.notes"), None);
        assert_eq!(r.get("financialSummary.missing.deeper"), None);
        assert_eq!(r.text("items.0.name").as_deref(), Some("Lavagem"));
        assert_eq!(r.get("items.x"), None);
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("x")).is_none());
    }

    #[test]
    fn test_display_date_falls_back_to_created_at() {
        let r = record(json!({ "id": "a", "date": "", "createdAt": "2024-03-15T10:00:00Z" }))
            .with_display_date(DEFAULT_DATE_CANDIDATES);
        assert_eq!(
            r.text(DISPLAY_DATE_FIELD).as_deref(),
            Some("2024-03-15T10:00:00Z")
        );

        let r = record(json!({ "id": "b", "date": "2024-01-02", "createdAt": "2024-03-15" }))
            .with_display_date(DEFAULT_DATE_CANDIDATES);
        assert_eq!(r.text(DISPLAY_DATE_FIELD).as_deref(), Some("2024-01-02"));

        let r = record(json!({ "id": "c" })).with_display_date(DEFAULT_DATE_CANDIDATES);
        assert_eq!(r.get(DISPLAY_DATE_FIELD), None);
    }

    #[test]
    fn test_parse_number_text() {
        assert_eq!(parse_number_text("1234.5"), Some(1234.5));
        assert_eq!(parse_number_text("1.234,56"), Some(1234.56));
        assert_eq!(parse_number_text("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_number_text("12,5%"), Some(12.5));
        assert_eq!(parse_number_text("-7"), Some(-7.0));
        assert_eq!(parse_number_text("1.500"), Some(1500.0));
        assert_eq!(parse_number_text("12.345.678"), Some(12345678.0));
        assert_eq!(parse_number_text("1.5"), Some(1.5));
        assert_eq!(parse_number_text("1234.567"), Some(1234.567));
        assert_eq!(parse_number_text("-R$ 50,00"), Some(-50.0));
        assert_eq!(parse_number_text("R$ -50,00"), Some(-50.0));
        assert_eq!(parse_number_text("abc"), None);
        assert_eq!(parse_number_text("NaN"), None);
        assert_eq!(parse_number_text(""), None);
    }

    #[test]
    fn test_money_text_parses_back() {
        use crate::shared::format::format_money;
        for value in [-50.0, -1234.56, 0.0, 1500.0, 1234567.89] {
            assert_eq!(parse_number_text(&format_money(value)), Some(value));
        }
    }

    #[test]
    fn test_parse_date_text() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date_text("2024-03-15"), Some(expected));
        assert_eq!(parse_date_text("15/03/2024"), Some(expected));
        assert_eq!(
            parse_date_text("2024-03-15T14:02:26.123Z").map(|d| d.format("%H:%M:%S").to_string()),
            Some("14:02:26".to_string())
        );
        assert_eq!(
            parse_date_text("2024-03-15 08:30:00").map(|d| d.format("%H:%M").to_string()),
            Some("08:30".to_string())
        );
        assert_eq!(parse_date_text("ontem"), None);
    }
}
