use super::{check_digit, is_repeated, parse_digits};

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a bare 14-digit CNPJ (call `strip_non_digits` first for masked input)
pub fn is_valid_cnpj(digits: &str) -> bool {
    let Some(d) = parse_digits(digits, 14) else {
        return false;
    };
    if is_repeated(&d) {
        return false;
    }

    check_digit(&d[..12], &FIRST_WEIGHTS) == d[12]
        && check_digit(&d[..13], &SECOND_WEIGHTS) == d[13]
}
