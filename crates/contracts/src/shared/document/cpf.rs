use super::{check_digit, is_repeated, parse_digits};

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a bare 11-digit CPF (call `strip_non_digits` first for masked input)
pub fn is_valid_cpf(digits: &str) -> bool {
    let Some(d) = parse_digits(digits, 11) else {
        return false;
    };
    if is_repeated(&d) {
        return false;
    }

    check_digit(&d[..9], &FIRST_WEIGHTS) == d[9] && check_digit(&d[..10], &SECOND_WEIGHTS) == d[10]
}
