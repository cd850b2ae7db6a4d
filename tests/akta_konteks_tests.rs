use akta_ajb_server::akta::konteks::{
    KEY_HARGA_TERBILANG, KEY_HARI, KEY_KALIMAT_TANGGAL, KEY_LUAS_ANGKA, KEY_LUAS_TERBILANG,
    KEY_NJOP_ANGKA, KEY_NJOP_TERBILANG, KEY_TANGGAL_ANGKA,
};
use akta_ajb_server::akta::{build_context_on, AktaError, AktaField, AktaRequest};
use akta_ajb_server::terbilang::{AngkaPolicy, PLACEHOLDER_KOSONG, TEKS_TERLALU_BESAR};
use chrono::NaiveDate;
use serde_json::json;

fn tanggal() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn complete_request() -> AktaRequest {
    serde_json::from_value(json!({
        "fields": {
            "nama_penjual": "Budi Santoso",
            "nik_penjual": "3171234567890123",
            "tempat_lahir_penjual": "Jakarta",
            "tanggal_lahir_penjual": "12-05-1970",
            "pekerjaan_penjual": "Wiraswasta",
            "alamat_penjual": "Jl. Melati No. 5",
            "nama_pembeli": "Siti Aminah",
            "nik_pembeli": "3175098765432109",
            "pekerjaan_pembeli": "Karyawan Swasta",
            "alamat_pembeli": "Jl. Kenanga No. 8",
            "no_sertifikat": "SHM 1234",
            "jenis_hak": "Hak Milik",
            "luas_tanah": "120 M²",
            "kelurahan": "Menteng",
            "kecamatan": "Menteng",
            "kabupaten": "Jakarta Timur",
            "nop_pbb": "31.75.060.003.012-0345.0",
            "njop_total": "Rp 480.000.000",
            "tahun_pajak": "2024"
        },
        "harga": 500000000
    }))
    .unwrap()
}

#[test]
fn test_complete_request_has_no_notes() {
    let ctx = build_context_on(&complete_request(), tanggal(), AngkaPolicy::Sentinel).unwrap();

    assert!(ctx.catatan.is_empty(), "{:?}", ctx.catatan);
    assert_eq!(ctx.konteks["nama_penjual"], "Budi Santoso");
    assert_eq!(ctx.konteks[KEY_HARI], "Senin");
    assert_eq!(ctx.konteks[KEY_TANGGAL_ANGKA], "15-01-2024");
    assert_eq!(ctx.konteks[KEY_HARGA_TERBILANG], "Lima Ratus Juta Rupiah");
    assert_eq!(ctx.konteks[KEY_LUAS_ANGKA], "120");
    assert_eq!(ctx.konteks[KEY_LUAS_TERBILANG], "Seratus Dua Puluh");
    assert_eq!(ctx.konteks[KEY_NJOP_ANGKA], "480.000.000");
    assert_eq!(ctx.konteks[KEY_NJOP_TERBILANG], "Empat Ratus Delapan Puluh Juta Rupiah");
    assert!(ctx.konteks[KEY_KALIMAT_TANGGAL].starts_with("Senin, tanggal lima belas Januari"));
    assert_eq!(ctx.tanggal.month_name, "Januari");
}

#[test]
fn test_every_field_is_present_in_context() {
    let request = AktaRequest {
        harga: 1,
        ..Default::default()
    };
    let ctx = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap();
    for field in AktaField::ALL {
        assert_eq!(ctx.konteks[field.key()], PLACEHOLDER_KOSONG);
    }
}

#[test]
fn test_extraction_replies_are_merged() {
    let request: AktaRequest = serde_json::from_value(json!({
        "fields": { "nama_penjual": "Dari Operator" },
        "respons_ekstraksi": [
            "```json\n{\"nama_penjual\": \"Dari KTP\", \"nik_penjual\": \"3171234567890123\"}\n```",
            "{\"luas_tanah\": \"1.000 m\", \"nama_pembeli\": \"Siti\"}"
        ],
        "harga": 250000000
    }))
    .unwrap();

    let ctx = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap();
    assert_eq!(ctx.konteks["nama_penjual"], "Dari Operator");
    assert_eq!(ctx.konteks["nik_penjual"], "3171234567890123");
    assert_eq!(ctx.konteks["nama_pembeli"], "Siti");
    assert_eq!(ctx.konteks[KEY_LUAS_TERBILANG], "Seribu");
}

#[test]
fn test_bad_extraction_reply_is_an_error() {
    let request = AktaRequest {
        respons_ekstraksi: vec!["{}".to_string(), "gambar buram".to_string()],
        harga: 1,
        ..Default::default()
    };
    let err = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap_err();
    assert!(matches!(err, AktaError::Extraction { index: 2, .. }));
    assert!(err.to_string().contains("ke-2"));
}

#[test]
fn test_suspicious_values_become_notes() {
    let mut request = complete_request();
    request.fields.insert("nik_pembeli", "12345");
    request.fields.insert("luas_tanah", "lihat lampiran");

    let ctx = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap();
    assert_eq!(ctx.catatan.len(), 2, "{:?}", ctx.catatan);
    assert!(ctx.catatan.iter().any(|note| note.contains("16 digit")));
    assert_eq!(ctx.konteks[KEY_LUAS_TERBILANG], PLACEHOLDER_KOSONG);
}

#[test]
fn test_huge_price_policy() {
    let mut request = complete_request();
    request.harga = 1_000_000_000_000;

    let ctx = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap();
    assert_eq!(ctx.konteks[KEY_HARGA_TERBILANG], TEKS_TERLALU_BESAR);

    let err = build_context_on(&request, tanggal(), AngkaPolicy::Strict).unwrap_err();
    assert!(matches!(err, AktaError::Angka { field: "harga", .. }));
}

#[test]
fn test_blank_fields_render_as_placeholder() {
    let request: AktaRequest = serde_json::from_value(json!({
        "fields": { "nama_penjual": "   ", "nama_pembeli": "  Siti  " },
        "harga": 1
    }))
    .unwrap();

    let ctx = build_context_on(&request, tanggal(), AngkaPolicy::Sentinel).unwrap();
    assert_eq!(ctx.konteks[AktaField::NamaPenjual.key()], PLACEHOLDER_KOSONG);
    assert_eq!(ctx.konteks[AktaField::NamaPembeli.key()], "Siti");
    assert!(ctx
        .catatan
        .iter()
        .any(|note| note.contains("Nama Penjual tidak ditemukan")));
}
