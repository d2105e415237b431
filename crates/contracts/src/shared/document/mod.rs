//! Brazilian tax identifiers (CPF/CNPJ) and phone numbers.
//!
//! Validators return `bool` and formatters return a best-effort string:
//! nothing here fails or panics on user input, because it runs on every
//! keystroke of a form field.

mod cnpj;
mod cpf;
mod mask;

pub use cnpj::is_valid_cnpj;
pub use cpf::is_valid_cpf;
pub use mask::{format_document, format_phone, is_valid_phone};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Number of digits including the two check digits
    pub const fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "cpf" => Some(DocumentKind::Cpf),
            "cnpj" => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    /// Kind of a combined "CPF/CNPJ" field: up to 11 digits is a CPF
    pub fn detect(raw: &str) -> Self {
        if strip_non_digits(raw).len() > DocumentKind::Cpf.digit_count() {
            DocumentKind::Cnpj
        } else {
            DocumentKind::Cpf
        }
    }

    fn is_valid_digits(self, digits: &str) -> bool {
        match self {
            DocumentKind::Cpf => is_valid_cpf(digits),
            DocumentKind::Cnpj => is_valid_cnpj(digits),
        }
    }
}

/// Checksum-valid CPF or CNPJ, stored as bare digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentIdentifier {
    kind: DocumentKind,
    digits: String,
}

impl DocumentIdentifier {
    /// Parses a masked or bare document, detecting its kind
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_as(raw, DocumentKind::detect(raw))
    }

    pub fn parse_as(raw: &str, kind: DocumentKind) -> Option<Self> {
        let digits = strip_non_digits(raw);
        if kind.is_valid_digits(&digits) {
            Some(Self { kind, digits })
        } else {
            None
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn formatted(&self) -> String {
        format_document(&self.digits, self.kind)
    }
}

impl fmt::Display for DocumentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Removes every character that is not an ASCII digit
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a masked or bare CPF/CNPJ, choosing the kind by digit count
pub fn is_valid_document(raw: &str) -> bool {
    DocumentIdentifier::parse(raw).is_some()
}

/// Digits of `digits` if it has exactly `len` ASCII digits and nothing else
fn parse_digits(digits: &str, len: usize) -> Option<Vec<u32>> {
    if digits.len() != len || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.bytes().map(|b| u32::from(b - b'0')).collect())
}

/// "111.111.111-11" passes the checksum but is not a real document
fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Mod-11 check digit: remainder below 2 gives 0, otherwise 11 - remainder
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
