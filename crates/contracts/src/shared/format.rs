//! Number, money and date formatting (pt-BR conventions)

use chrono::NaiveDateTime;

/// Inserts `.` between groups of three digits
///
/// # Примеры
/// ```
/// use contracts::shared::format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1.234.567");
/// assert_eq!(group_thousands("42"), "42");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a number with `decimals` places, `.` as thousands and `,` as decimal separator
pub fn format_decimal(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals), value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut result = group_thousands(integer_part);
    if let Some(dec) = decimal_part {
        result.push(',');
        result.push_str(dec);
    }

    // "-0,00" looks like a bug in a totals row
    let is_zero = result.chars().all(|c| matches!(c, '0' | '.' | ','));
    if value.is_sign_negative() && !is_zero {
        format!("-{}", result)
    } else {
        result
    }
}

/// Денежное значение в реалах: `R$ 1.234,56`
pub fn format_money(value: f64) -> String {
    let amount = format_decimal(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-R$ {}", abs),
        None => format!("R$ {}", amount),
    }
}

/// Percentage points: `12.5` -> `12,5%`
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_decimal(value, decimals))
}

/// `DD/MM/YYYY`
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM`
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}
