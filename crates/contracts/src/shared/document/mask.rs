//! Input masks applied while the user types

use super::{strip_non_digits, DocumentKind};

const CPF_MASK: &str = "###.###.###-##";
const CNPJ_MASK: &str = "##.###.###/####-##";
const MOBILE_MASK: &str = "(##) #####-####";
const LANDLINE_MASK: &str = "(##) ####-####";

const MAX_PHONE_DIGITS: usize = 11;
const LANDLINE_DIGITS: usize = 10;

/// Fills `#` slots with digits. A literal is only written when a digit
/// follows it, so partial input ("1234") masks as "123.4", not "123.4..-".
fn apply_mask(digits: &str, mask: &str) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut digits = digits.chars().peekable();
    for slot in mask.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }
    out
}

fn truncated(raw: &str, max_digits: usize) -> String {
    strip_non_digits(raw).chars().take(max_digits).collect()
}

/// Masks a CPF (`###.###.###-##`) or CNPJ (`##.###.###/####-##`).
///
/// Excess digits are dropped silently. Re-formatting a formatted value
/// returns it unchanged.
pub fn format_document(raw: &str, kind: DocumentKind) -> String {
    let digits = truncated(raw, kind.digit_count());
    let mask = match kind {
        DocumentKind::Cpf => CPF_MASK,
        DocumentKind::Cnpj => CNPJ_MASK,
    };
    apply_mask(&digits, mask)
}

/// Masks a phone number as `(##) #####-####`; exactly ten digits use the
/// landline mask `(##) ####-####`
pub fn format_phone(raw: &str) -> String {
    let digits = truncated(raw, MAX_PHONE_DIGITS);
    let mask = if digits.len() == LANDLINE_DIGITS {
        LANDLINE_MASK
    } else {
        MOBILE_MASK
    };
    apply_mask(&digits, mask)
}

/// Ten (landline) or eleven (mobile) digits with a non-zero area code
pub fn is_valid_phone(raw: &str) -> bool {
    let digits = strip_non_digits(raw);
    matches!(digits.len(), LANDLINE_DIGITS | MAX_PHONE_DIGITS) && !digits.starts_with('0')
}
