//! Render context for the AJB template.
//!
//! Merges the extracted fields with the transaction price and deed date,
//! spelling out every amount and date part the template expects.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::extraction::parse_extraction_response;
use super::fields::{AktaField, ExtractedFields};
use super::traits::Validator;
use super::validation::{
    validate_nik, validate_nop, validate_required, validate_tahun, ValidationError,
    ValidationErrors,
};
use super::AktaError;
use crate::terbilang::nominal::{try_format_luas, FormattedAmount};
use crate::terbilang::tanggal::format_tanggal_panjang;
use crate::terbilang::{
    format_amount, format_luas, localize, try_format_amount, AngkaPolicy, DateInfo,
    TerbilangError, PLACEHOLDER_KOSONG, TEKS_TERLALU_BESAR,
};

pub const KEY_HARI: &str = "hari";
pub const KEY_TANGGAL_TERBILANG: &str = "tanggal_terbilang";
pub const KEY_BULAN: &str = "bulan";
pub const KEY_TAHUN_TERBILANG: &str = "tahun_terbilang";
pub const KEY_TANGGAL_ANGKA: &str = "tanggal_angka";
pub const KEY_TANGGAL_PANJANG: &str = "tanggal_panjang";
pub const KEY_KALIMAT_TANGGAL: &str = "kalimat_tanggal";
pub const KEY_HARGA_ANGKA: &str = "harga_angka";
pub const KEY_HARGA_TERBILANG: &str = "harga_terbilang";
pub const KEY_LUAS_ANGKA: &str = "luas_tanah_angka";
pub const KEY_LUAS_TERBILANG: &str = "luas_tanah_terbilang";
pub const KEY_NJOP_ANGKA: &str = "njop_angka";
pub const KEY_NJOP_TERBILANG: &str = "njop_terbilang";

const NOL: &str = "Nol";
const RUPIAH: &str = "Rupiah";

/// Request to prepare the AJB render context.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AktaRequest {
    /// Fields already extracted and parsed by the caller.
    #[serde(default)]
    pub fields: ExtractedFields,
    /// Raw replies from the extraction model, one per uploaded document.
    /// Earlier entries and `fields` take precedence on conflicting keys.
    #[serde(default)]
    pub respons_ekstraksi: Vec<String>,
    /// Transaction price in whole rupiah.
    pub harga: u64,
    /// Deed date; defaults to today.
    #[serde(default)]
    pub tanggal_akta: Option<NaiveDate>,
}

impl AktaRequest {
    /// Merge `fields` with every parsed extraction reply.
    pub fn collect_fields(&self) -> Result<ExtractedFields, AktaError> {
        let mut fields = self.fields.clone();
        for (index, raw) in self.respons_ekstraksi.iter().enumerate() {
            let parsed = parse_extraction_response(raw).map_err(|source| AktaError::Extraction {
                index: index + 1,
                source,
            })?;
            fields.merge_missing(parsed);
        }
        Ok(fields)
    }
}

/// Extracted fields together with the price, ready for review.
#[derive(Debug, Clone)]
pub struct AktaData {
    pub fields: ExtractedFields,
    pub harga: u64,
}

impl Validator for AktaData {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in AktaField::ALL {
            validate_required(self.fields.get(field), field.key(), field.label(), &mut errors);
        }

        for field in [AktaField::NikPenjual, AktaField::NikPembeli] {
            validate_nik(self.fields.get(field), field.key(), &mut errors);
        }
        validate_nop(self.fields.get(AktaField::NopPbb), AktaField::NopPbb.key(), &mut errors);
        validate_tahun(
            self.fields.get(AktaField::TahunPajak),
            AktaField::TahunPajak.key(),
            &mut errors,
        );

        if self.harga == 0 {
            errors.add(
                ValidationError::invalid_amount("harga", "Harga transaksi bernilai nol")
                    .with_suggestion("Pastikan harga jual beli sudah diisi"),
            );
        }

        errors
    }
}

/// Template values plus review notes for the operator.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AktaContext {
    /// Placeholder name -> rendered value.
    pub konteks: BTreeMap<String, String>,
    pub tanggal: DateInfo,
    /// Findings that need manual attention in the draft.
    pub catatan: Vec<String>,
    #[serde(skip)]
    pub review: ValidationErrors,
}

/// Build the render context for `request` dated today when no date is given.
pub fn build_context(request: &AktaRequest, policy: AngkaPolicy) -> Result<AktaContext, AktaError> {
    let tanggal = request
        .tanggal_akta
        .unwrap_or_else(|| Local::now().date_naive());
    build_context_on(request, tanggal, policy)
}

/// Build the render context for `request` with an explicit deed date.
pub fn build_context_on(
    request: &AktaRequest,
    tanggal: NaiveDate,
    policy: AngkaPolicy,
) -> Result<AktaContext, AktaError> {
    let data = AktaData {
        fields: request.collect_fields()?,
        harga: request.harga,
    };
    let mut review = data.validate();

    let mut konteks: BTreeMap<String, String> = data
        .fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    for field in AktaField::ALL {
        konteks
            .entry(field.key().to_string())
            .or_insert_with(|| PLACEHOLDER_KOSONG.to_string());
    }

    let info = localize(tanggal);
    konteks.insert(KEY_HARI.into(), info.weekday_name.clone());
    konteks.insert(KEY_TANGGAL_TERBILANG.into(), info.day_in_words.clone());
    konteks.insert(KEY_BULAN.into(), info.month_name.clone());
    konteks.insert(KEY_TAHUN_TERBILANG.into(), info.year_in_words.clone());
    konteks.insert(KEY_TANGGAL_ANGKA.into(), info.numeric_date_string.clone());
    konteks.insert(KEY_TANGGAL_PANJANG.into(), format_tanggal_panjang(tanggal));
    konteks.insert(KEY_KALIMAT_TANGGAL.into(), info.kalimat_akta());

    let harga = resolve_amount(
        "harga",
        policy,
        try_format_amount(data.harga),
        || format_amount(data.harga),
        &mut review,
    )?;
    konteks.insert(KEY_HARGA_ANGKA.into(), harga.digits);
    konteks.insert(KEY_HARGA_TERBILANG.into(), dengan_satuan(&harga.words, RUPIAH));

    let luas = free_text_amount(&data.fields, AktaField::LuasTanah, policy, &mut review)?;
    konteks.insert(KEY_LUAS_ANGKA.into(), luas.digits);
    konteks.insert(KEY_LUAS_TERBILANG.into(), luas.words);

    let njop = free_text_amount(&data.fields, AktaField::NjopTotal, policy, &mut review)?;
    konteks.insert(KEY_NJOP_ANGKA.into(), njop.digits);
    konteks.insert(KEY_NJOP_TERBILANG.into(), dengan_satuan(&njop.words, RUPIAH));

    if !review.is_empty() {
        log::info!("akta context built with {} review notes", review.len());
    }

    Ok(AktaContext {
        konteks,
        tanggal: info,
        catatan: review.to_notes(),
        review,
    })
}

// Absent fields are already reported by the review; only present but
// unreadable values go through the policy.
fn free_text_amount(
    fields: &ExtractedFields,
    field: AktaField,
    policy: AngkaPolicy,
    review: &mut ValidationErrors,
) -> Result<FormattedAmount, AktaError> {
    match fields.get(field) {
        Some(raw) => resolve_amount(
            field.key(),
            policy,
            try_format_luas(raw),
            || format_luas(raw),
            review,
        ),
        None => Ok(FormattedAmount {
            digits: PLACEHOLDER_KOSONG.to_string(),
            words: PLACEHOLDER_KOSONG.to_string(),
        }),
    }
}

fn resolve_amount(
    field: &'static str,
    policy: AngkaPolicy,
    attempt: Result<FormattedAmount, TerbilangError>,
    fallback: impl FnOnce() -> FormattedAmount,
    review: &mut ValidationErrors,
) -> Result<FormattedAmount, AktaError> {
    match attempt {
        Ok(mut formatted) => {
            if formatted.words.is_empty() {
                formatted.words = NOL.to_string();
            }
            Ok(formatted)
        }
        Err(source) => match policy {
            AngkaPolicy::Strict => Err(AktaError::Angka { field, source }),
            AngkaPolicy::Sentinel => {
                log::warn!("rendering placeholder for '{}': {}", field, source);
                review.add(ValidationError::invalid_amount(field, source.to_string()));
                Ok(fallback())
            }
        },
    }
}

fn dengan_satuan(words: &str, satuan: &str) -> String {
    if words == TEKS_TERLALU_BESAR || words == PLACEHOLDER_KOSONG {
        return words.to_string();
    }
    format!("{words} {satuan}")
}
