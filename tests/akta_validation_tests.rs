use akta_ajb_server::akta::validation::{
    validate_nik, validate_required, ValidationError, ValidationErrors,
};
use akta_ajb_server::akta::{parse_extraction_response, AktaData, AktaField, Validator};

#[test]
fn test_validate_required_empty() {
    let mut errors = ValidationErrors::new();
    validate_required(Some("  "), "nama_penjual", "Nama Penjual", &mut errors);
    validate_required(None, "nama_pembeli", "Nama Pembeli", &mut errors);
    assert_eq!(errors.len(), 2);
    assert!(errors
        .to_mcp_message()
        .contains("Nama Penjual tidak ditemukan pada dokumen"));
}

#[test]
fn test_validate_nik() {
    let mut errors = ValidationErrors::new();
    validate_nik(Some("3171234567890123"), "nik_penjual", &mut errors);
    validate_nik(None, "nik_penjual", &mut errors);
    assert!(errors.is_empty());

    validate_nik(Some("3171-2345-6789-0123"), "nik_penjual", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_mcp_message().contains("16 digit"));
}

#[test]
fn test_validation_errors_message() {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::empty_field("nama_penjual", "Nama Penjual"));
    errors.add(ValidationError::invalid_nik("nik_pembeli"));

    let msg = errors.to_mcp_message();
    assert!(msg.contains("2 catatan"));
    assert!(msg.contains("1. [nama_penjual]"));
    assert!(msg.contains("2. [nik_pembeli]"));
}

#[test]
fn test_review_of_parsed_extraction() {
    let fields = parse_extraction_response(
        r#"{"nama_penjual": "Budi", "nik_penjual": "317123", "tahun_pajak": 2024}"#,
    )
    .unwrap();
    let data = AktaData {
        fields,
        harga: 100_000_000,
    };

    let review = data.validate();
    let notes = review.to_notes();
    let flagged = |field: AktaField| {
        let tag = format!("[{}]", field.key());
        notes.iter().any(|note| note.starts_with(&tag))
    };
    assert!(flagged(AktaField::NikPenjual));
    assert!(!flagged(AktaField::NamaPenjual));
    assert!(!flagged(AktaField::TahunPajak));
    // 16 fields absent plus the short NIK
    assert_eq!(review.len(), 17);
    assert!(review.to_mcp_message().contains("17 catatan"));
}
