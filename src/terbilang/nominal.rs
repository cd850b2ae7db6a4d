//! Amount formatting: dotted digits plus a title-cased terbilang phrase.
//!
//! The phrase carries no currency; callers append "Rupiah" (or nothing, for
//! land area in square meters).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{kapital_setiap_kata, terbilang, TerbilangError, PLACEHOLDER_KOSONG};

/// An amount rendered for a legal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedAmount {
    /// Digits with `.` as thousands separator, e.g. "500.000.000"
    pub digits: String,
    /// Title-cased words, e.g. "Lima Ratus Juta"
    pub words: String,
}

impl FormattedAmount {
    fn placeholder() -> Self {
        Self {
            digits: PLACEHOLDER_KOSONG.to_string(),
            words: PLACEHOLDER_KOSONG.to_string(),
        }
    }
}

/// Render `amount` with `.` thousands separators.
pub fn format_digits(amount: u64) -> String {
    group_digits(&amount.to_string())
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format `amount`, failing when it cannot be spelled out.
pub fn try_format_amount(amount: u64) -> Result<FormattedAmount, TerbilangError> {
    Ok(FormattedAmount {
        digits: format_digits(amount),
        words: kapital_setiap_kata(&terbilang(amount)?),
    })
}

/// Format `amount`; out-of-range amounts carry the placeholder phrase in `words`.
pub fn format_amount(amount: u64) -> FormattedAmount {
    try_format_amount(amount).unwrap_or_else(|err| FormattedAmount {
        digits: format_digits(amount),
        words: err.placeholder().to_string(),
    })
}

/// Read an integer out of free text such as "1.250 m2" or "Luas: 300 M²".
///
/// Every non-digit character is dropped. Digit runs too long for `u64` are
/// reported as out of range.
pub fn parse_luas(raw: &str) -> Result<u64, TerbilangError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(TerbilangError::MalformedInput(raw.trim().to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| TerbilangError::OutOfRange(u64::MAX))
}

/// Format an area (or any amount) taken from extracted free text.
pub fn try_format_luas(raw: &str) -> Result<FormattedAmount, TerbilangError> {
    try_format_amount(parse_luas(raw)?)
}

/// Format an area from free text; unreadable text becomes the dotted blank.
pub fn format_luas(raw: &str) -> FormattedAmount {
    match parse_luas(raw) {
        Ok(amount) => format_amount(amount),
        Err(TerbilangError::OutOfRange(_)) => {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            FormattedAmount {
                digits: group_digits(digits.trim_start_matches('0')),
                words: super::TEKS_TERLALU_BESAR.to_string(),
            }
        }
        Err(TerbilangError::MalformedInput(_)) => FormattedAmount::placeholder(),
    }
}
