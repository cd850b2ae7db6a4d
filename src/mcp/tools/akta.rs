//! Tool definition for preparing the AJB template context.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "siapkan_data_akta";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Menyiapkan seluruh nilai placeholder template Akta Jual Beli (AJB): data penjual, pembeli, ",
            "sertifikat dan PBB hasil ekstraksi, ditambah hari/tanggal akta terbilang, harga terbilang, ",
            "luas tanah terbilang dan NJOP terbilang. ",
            "[PENTING] (1) Kirim data hasil pembacaan KTP penjual, KTP pembeli, sertifikat dan SPPT PBB ",
            "melalui 'fields' atau teks mentah jawaban model melalui 'respons_ekstraksi'. ",
            "(2) Harga transaksi WAJIB ditanyakan kepada pengguna, jangan ditebak. ",
            "(3) Nilai yang tidak terbaca diganti titik-titik dan dilaporkan sebagai catatan."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "fields": {
                "type": "object",
                "description": "Data hasil ekstraksi, kunci sesuai placeholder template",
                "properties": {
                    "nama_penjual": { "type": "string" },
                    "nik_penjual": { "type": "string", "description": "NIK 16 digit" },
                    "tempat_lahir_penjual": { "type": "string" },
                    "tanggal_lahir_penjual": { "type": "string" },
                    "pekerjaan_penjual": { "type": "string" },
                    "alamat_penjual": { "type": "string" },
                    "nama_pembeli": { "type": "string" },
                    "nik_pembeli": { "type": "string", "description": "NIK 16 digit" },
                    "pekerjaan_pembeli": { "type": "string" },
                    "alamat_pembeli": { "type": "string" },
                    "no_sertifikat": { "type": "string" },
                    "jenis_hak": { "type": "string", "description": "Contoh: Hak Milik" },
                    "luas_tanah": { "type": "string", "description": "Contoh: 120 m2" },
                    "kelurahan": { "type": "string" },
                    "kecamatan": { "type": "string" },
                    "kabupaten": { "type": "string" },
                    "nop_pbb": { "type": "string", "description": "NOP 18 digit" },
                    "njop_total": { "type": "string" },
                    "tahun_pajak": { "type": "string" }
                },
                "additionalProperties": { "type": "string" }
            },
            "respons_ekstraksi": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Jawaban mentah model ekstraksi (JSON, boleh dalam blok kode)"
            },
            "harga": { "type": "integer", "minimum": 0, "description": "Harga transaksi dalam rupiah" },
            "tanggal_akta": { "type": "string", "format": "date", "description": "YYYY-MM-DD, default hari ini" }
        },
        "required": ["harga"]
    })
}
