//! Tool definition for spelling out a single number.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "terbilang";

#[derive(Debug, Deserialize)]
pub struct TerbilangArgs {
    pub angka: u64,
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Mengubah bilangan bulat non-negatif menjadi kata-kata bahasa Indonesia (terbilang) ",
            "seperti yang dipakai pada akta, contoh: 1500 -> 'seribu lima ratus'. ",
            "Batas maksimal 999.999.999.999; angka yang lebih besar menghasilkan 'Angka terlalu besar'. ",
            "Angka 0 menghasilkan teks kosong."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "angka": {
                "type": "integer",
                "minimum": 0,
                "description": "Bilangan bulat yang akan dieja"
            }
        },
        "required": ["angka"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let desc = descriptor();
        assert_eq!(desc.name, TOOL_NAME);
        assert!(desc.description.contains("terbilang"));
        assert_eq!(desc.input_schema["required"][0], "angka");
    }
}
