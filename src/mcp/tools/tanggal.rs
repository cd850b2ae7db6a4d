//! Tool definition for localising a deed date.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "format_tanggal_akta";

#[derive(Debug, Deserialize)]
pub struct TanggalArgs {
    pub tahun: i32,
    pub bulan: u32,
    pub hari: u32,
}

impl TanggalArgs {
    pub fn validate(&self) -> Result<NaiveDate, String> {
        NaiveDate::from_ymd_opt(self.tahun, self.bulan, self.hari).ok_or_else(|| {
            format!(
                "Tanggal {:02}-{:02}-{} tidak ada di kalender. Periksa kembali hari dan bulan.",
                self.hari, self.bulan, self.tahun
            )
        })
    }
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Menghasilkan nama hari, tanggal terbilang, nama bulan, tahun terbilang, ",
            "format DD-MM-YYYY, dan kalimat tanggal pembuka akta untuk tanggal yang diberikan."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "tahun": { "type": "integer", "description": "Tahun, contoh: 2024" },
            "bulan": { "type": "integer", "minimum": 1, "maximum": 12, "description": "Bulan (1-12)" },
            "hari": { "type": "integer", "minimum": 1, "maximum": 31, "description": "Tanggal (1-31)" }
        },
        "required": ["tahun", "bulan", "hari"]
    })
}
