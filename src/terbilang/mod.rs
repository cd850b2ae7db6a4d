//! Terbilang - Indonesian spelled-out cardinal numbers.
//!
//! Converts integers into the words used next to numerals in legal documents
//! (e.g. `500000000` -> "lima ratus juta"), plus date and amount formatting
//! built on top of it:
//! - [`tanggal`] - weekday/month names and spelled-out dates
//! - [`nominal`] - dotted digit strings and title-cased amount phrases

pub mod nominal;
pub mod tanggal;

pub use nominal::{format_amount, format_luas, try_format_amount, FormattedAmount};
pub use tanggal::{localize, DateInfo};

use std::str::FromStr;
use thiserror::Error;

/// Exclusive upper bound for word conversion (10^12).
pub const BATAS_TERBILANG: u64 = 1_000_000_000_000;

/// Text rendered in place of amounts at or beyond [`BATAS_TERBILANG`].
pub const TEKS_TERLALU_BESAR: &str = "Angka terlalu besar";

/// Dotted blank rendered where a value could not be read and must be filled in by hand.
pub const PLACEHOLDER_KOSONG: &str = "....................";

const SATUAN: [&str; 12] = [
    "",
    "satu",
    "dua",
    "tiga",
    "empat",
    "lima",
    "enam",
    "tujuh",
    "delapan",
    "sembilan",
    "sepuluh",
    "sebelas",
];

/// Errors produced while turning a number into words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerbilangError {
    #[error("angka melebihi batas terbilang (maksimal 999.999.999.999)")]
    OutOfRange(u64),
    #[error("nilai '{0}' tidak mengandung angka")]
    MalformedInput(String),
}

impl TerbilangError {
    /// Text shown in the document when the error is rendered instead of rejected.
    pub fn placeholder(&self) -> &'static str {
        match self {
            TerbilangError::OutOfRange(_) => TEKS_TERLALU_BESAR,
            TerbilangError::MalformedInput(_) => PLACEHOLDER_KOSONG,
        }
    }
}

/// How callers treat amounts the converter cannot spell out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngkaPolicy {
    /// Render the placeholder text so the draft can still be produced.
    #[default]
    Sentinel,
    /// Reject the request.
    Strict,
}

impl AngkaPolicy {
    /// Apply the policy to a conversion result.
    pub fn resolve(self, result: Result<String, TerbilangError>) -> Result<String, TerbilangError> {
        match (self, result) {
            (_, Ok(text)) => Ok(text),
            (AngkaPolicy::Sentinel, Err(err)) => Ok(err.placeholder().to_string()),
            (AngkaPolicy::Strict, Err(err)) => Err(err),
        }
    }
}

impl FromStr for AngkaPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sentinel" => Ok(AngkaPolicy::Sentinel),
            "strict" => Ok(AngkaPolicy::Strict),
            other => Err(format!(
                "kebijakan angka '{other}' tidak dikenal (gunakan 'sentinel' atau 'strict')"
            )),
        }
    }
}

/// Spell out `n` in lowercase Indonesian words.
///
/// Zero yields an empty string; callers that need a spoken "nol" handle it
/// themselves. Output is trimmed and single-spaced.
pub fn terbilang(n: u64) -> Result<String, TerbilangError> {
    if n >= BATAS_TERBILANG {
        return Err(TerbilangError::OutOfRange(n));
    }

    let mut parts = Vec::new();
    susun(n, &mut parts);
    Ok(parts.join(" "))
}

/// Like [`terbilang`], but renders [`TEKS_TERLALU_BESAR`] for out-of-range input.
pub fn words(n: u64) -> String {
    terbilang(n).unwrap_or_else(|err| err.placeholder().to_string())
}

/// Capitalise the first letter of every word ("lima ratus" -> "Lima Ratus").
pub fn kapital_setiap_kata(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// n < BATAS_TERBILANG is checked by the caller.
fn susun(n: u64, out: &mut Vec<&'static str>) {
    match n {
        0..=11 => {
            let word = SATUAN[n as usize];
            if !word.is_empty() {
                out.push(word);
            }
        }
        12..=19 => {
            susun(n - 10, out);
            out.push("belas");
        }
        20..=99 => {
            susun(n / 10, out);
            out.push("puluh");
            susun(n % 10, out);
        }
        100..=199 => {
            out.push("seratus");
            susun(n - 100, out);
        }
        200..=999 => {
            susun(n / 100, out);
            out.push("ratus");
            susun(n % 100, out);
        }
        1_000..=1_999 => {
            out.push("seribu");
            susun(n - 1_000, out);
        }
        2_000..=999_999 => skala(n, 1_000, "ribu", out),
        1_000_000..=999_999_999 => skala(n, 1_000_000, "juta", out),
        _ => skala(n, 1_000_000_000, "milyar", out),
    }
}

fn skala(n: u64, unit: u64, word: &'static str, out: &mut Vec<&'static str>) {
    susun(n / unit, out);
    out.push(word);
    susun(n % unit, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_band() {
        assert_eq!(words(0), "");
        assert_eq!(words(1), "satu");
        assert_eq!(words(10), "sepuluh");
        assert_eq!(words(11), "sebelas");
    }

    #[test]
    fn test_belas_and_puluh() {
        assert_eq!(words(12), "dua belas");
        assert_eq!(words(15), "lima belas");
        assert_eq!(words(19), "sembilan belas");
        assert_eq!(words(20), "dua puluh");
        assert_eq!(words(99), "sembilan puluh sembilan");
    }

    #[test]
    fn test_irregular_seratus_and_seribu() {
        assert_eq!(words(100), "seratus");
        assert_ne!(words(100), format!("{} ratus", words(1)));
        assert_eq!(words(111), "seratus sebelas");
        assert_eq!(words(1000), "seribu");
        assert!(words(1999).starts_with("seribu"));
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(words(2024), "dua ribu dua puluh empat");
        assert_eq!(words(1_000_000), "satu juta");
        assert_eq!(words(500_000_000), "lima ratus juta");
        assert_eq!(
            words(999_999_999_999),
            "sembilan ratus sembilan puluh sembilan milyar \
             sembilan ratus sembilan puluh sembilan juta \
             sembilan ratus sembilan puluh sembilan ribu \
             sembilan ratus sembilan puluh sembilan"
        );
    }

    #[test]
    fn test_zero_remainder_is_silent() {
        assert_eq!(words(200), "dua ratus");
        assert_eq!(words(3_000_000), "tiga juta");
        assert_eq!(words(1_000_000_005), "satu milyar lima");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(terbilang(BATAS_TERBILANG), Err(TerbilangError::OutOfRange(BATAS_TERBILANG)));
        assert_eq!(words(u64::MAX), TEKS_TERLALU_BESAR);
    }

    #[test]
    fn test_policy_resolve() {
        let err = Err(TerbilangError::OutOfRange(BATAS_TERBILANG));
        assert_eq!(AngkaPolicy::Sentinel.resolve(err.clone()), Ok(TEKS_TERLALU_BESAR.to_string()));
        assert!(AngkaPolicy::Strict.resolve(err).is_err());
        assert_eq!("STRICT".parse::<AngkaPolicy>(), Ok(AngkaPolicy::Strict));
        assert!("lenient".parse::<AngkaPolicy>().is_err());
    }

    #[test]
    fn test_kapital_setiap_kata() {
        assert_eq!(kapital_setiap_kata("lima ratus juta"), "Lima Ratus Juta");
        assert_eq!(kapital_setiap_kata(""), "");
    }
}
