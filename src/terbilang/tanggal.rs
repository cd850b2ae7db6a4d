//! Indonesian date formatting.
//!
//! Weekday and month names, spelled-out day/year, and the `DD-MM-YYYY`
//! numeric form used in deed headers.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{words, TEKS_TERLALU_BESAR};

const NAMA_HARI: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const NAMA_BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Localised parts of a calendar date, merged into the deed render context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateInfo {
    /// "Senin" .. "Minggu"
    pub weekday_name: String,
    pub day_in_words: String,
    /// "Januari" .. "Desember"
    pub month_name: String,
    pub year_in_words: String,
    /// Zero padded `DD-MM-YYYY`
    pub numeric_date_string: String,
}

impl DateInfo {
    /// Date phrase as written in the deed opening, e.g.
    /// "Senin, tanggal lima belas Januari dua ribu dua puluh empat (15-01-2024)".
    pub fn kalimat_akta(&self) -> String {
        format!(
            "{}, tanggal {} {} {} ({})",
            self.weekday_name,
            self.day_in_words,
            self.month_name,
            self.year_in_words,
            self.numeric_date_string
        )
    }
}

/// Derive the localised parts of `date`.
pub fn localize(date: NaiveDate) -> DateInfo {
    // Negative years fall outside the terbilang range.
    let year_in_words = u64::try_from(date.year())
        .map(words)
        .unwrap_or_else(|_| TEKS_TERLALU_BESAR.to_string());

    DateInfo {
        weekday_name: nama_hari(date.weekday()).to_string(),
        day_in_words: words(u64::from(date.day())),
        month_name: NAMA_BULAN[date.month0() as usize].to_string(),
        year_in_words,
        numeric_date_string: date.format("%d-%m-%Y").to_string(),
    }
}

/// Indonesian weekday name.
pub fn nama_hari(weekday: Weekday) -> &'static str {
    NAMA_HARI[weekday.num_days_from_monday() as usize]
}

/// Indonesian month name for `month` in `1..=12`.
pub fn nama_bulan(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| NAMA_BULAN.get(index as usize))
        .copied()
}

/// Format a date in long Indonesian form (e.g., "30 Desember 2025").
pub fn format_tanggal_panjang(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        NAMA_BULAN[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_localize_monday() {
        let info = localize(date(2024, 1, 15));
        assert_eq!(info.weekday_name, "Senin");
        assert_eq!(info.day_in_words, "lima belas");
        assert_eq!(info.month_name, "Januari");
        assert_eq!(info.year_in_words, "dua ribu dua puluh empat");
        assert_eq!(info.numeric_date_string, "15-01-2024");
    }

    #[test]
    fn test_localize_sunday_and_padding() {
        let info = localize(date(2023, 12, 31));
        assert_eq!(info.weekday_name, "Minggu");
        assert_eq!(info.month_name, "Desember");
        assert_eq!(info.day_in_words, "tiga puluh satu");

        let info = localize(date(2025, 3, 1));
        assert_eq!(info.numeric_date_string, "01-03-2025");
        assert_eq!(info.day_in_words, "satu");
    }

    #[test]
    fn test_localize_negative_year() {
        let info = localize(date(-5, 1, 1));
        assert_eq!(info.year_in_words, TEKS_TERLALU_BESAR);
        assert_eq!(info.month_name, "Januari");
        assert_eq!(info.day_in_words, "satu");
    }

    #[test]
    fn test_nama_bulan_bounds() {
        assert_eq!(nama_bulan(1), Some("Januari"));
        assert_eq!(nama_bulan(12), Some("Desember"));
        assert_eq!(nama_bulan(0), None);
        assert_eq!(nama_bulan(13), None);
    }

    #[test]
    fn test_kalimat_akta() {
        let info = localize(date(2024, 1, 15));
        assert_eq!(
            info.kalimat_akta(),
            "Senin, tanggal lima belas Januari dua ribu dua puluh empat (15-01-2024)"
        );
    }

    #[test]
    fn test_format_tanggal_panjang() {
        assert_eq!(format_tanggal_panjang(date(2025, 12, 30)), "30 Desember 2025");
    }
}
