use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::terbilang::DateInfo;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TerbilangResponse {
    pub angka: u64,
    pub terbilang: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct NominalRequest {
    pub angka: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LuasRequest {
    /// Free text as returned by extraction, e.g. "1.250 m2"
    pub teks: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TanggalRequest {
    pub tahun: i32,
    pub bulan: u32,
    pub hari: u32,
}

impl TanggalRequest {
    /// The civil date, or `None` when the triple is not on the calendar.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.tahun, self.bulan, self.hari)
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TanggalResponse {
    #[serde(flatten)]
    pub info: DateInfo,
    /// e.g. "15 Januari 2024"
    pub tanggal_panjang: String,
    pub kalimat_akta: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
