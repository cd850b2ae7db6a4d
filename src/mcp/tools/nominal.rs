//! Tool definition for formatting an amount or a free-text area.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "format_nominal";

/// Exactly one of `angka` or `teks` must be given.
#[derive(Debug, Deserialize)]
pub struct NominalArgs {
    #[serde(default)]
    pub angka: Option<u64>,
    #[serde(default)]
    pub teks: Option<String>,
}

pub enum NominalInput<'a> {
    Angka(u64),
    Teks(&'a str),
}

impl NominalArgs {
    pub fn validate(&self) -> Result<NominalInput<'_>, String> {
        match (self.angka, self.teks.as_deref()) {
            (Some(angka), None) => Ok(NominalInput::Angka(angka)),
            (None, Some(teks)) => Ok(NominalInput::Teks(teks)),
            (Some(_), Some(_)) => Err("Isi salah satu saja: 'angka' atau 'teks'.".to_string()),
            (None, None) => Err("Argumen 'angka' atau 'teks' wajib diisi.".to_string()),
        }
    }
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Memformat nominal (harga, NJOP) atau luas tanah untuk akta: angka dengan pemisah ribuan titik ",
            "(500.000.000) dan terbilang berhuruf kapital (Lima Ratus Juta). ",
            "Gunakan 'angka' untuk bilangan bulat, atau 'teks' untuk nilai hasil ekstraksi dokumen ",
            "seperti '1.250 m2'; semua karakter selain digit akan dibuang. ",
            "Kata 'Rupiah' tidak ditambahkan otomatis."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "angka": { "type": "integer", "minimum": 0, "description": "Nominal dalam bilangan bulat" },
            "teks": { "type": "string", "description": "Nilai teks bebas hasil ekstraksi, contoh: '1.250 m2'" }
        }
    })
}
