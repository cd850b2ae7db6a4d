//! Field catalogue for the AJB (Akta Jual Beli) template.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Fields read from the seller/buyer KTP, the land certificate and the PBB notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AktaField {
    NamaPenjual,
    NikPenjual,
    TempatLahirPenjual,
    TanggalLahirPenjual,
    PekerjaanPenjual,
    AlamatPenjual,
    NamaPembeli,
    NikPembeli,
    PekerjaanPembeli,
    AlamatPembeli,
    NoSertifikat,
    JenisHak,
    LuasTanah,
    Kelurahan,
    Kecamatan,
    Kabupaten,
    NopPbb,
    NjopTotal,
    TahunPajak,
}

impl AktaField {
    pub const ALL: [AktaField; 19] = [
        AktaField::NamaPenjual,
        AktaField::NikPenjual,
        AktaField::TempatLahirPenjual,
        AktaField::TanggalLahirPenjual,
        AktaField::PekerjaanPenjual,
        AktaField::AlamatPenjual,
        AktaField::NamaPembeli,
        AktaField::NikPembeli,
        AktaField::PekerjaanPembeli,
        AktaField::AlamatPembeli,
        AktaField::NoSertifikat,
        AktaField::JenisHak,
        AktaField::LuasTanah,
        AktaField::Kelurahan,
        AktaField::Kecamatan,
        AktaField::Kabupaten,
        AktaField::NopPbb,
        AktaField::NjopTotal,
        AktaField::TahunPajak,
    ];

    /// Placeholder name in the template.
    pub fn key(self) -> &'static str {
        match self {
            AktaField::NamaPenjual => "nama_penjual",
            AktaField::NikPenjual => "nik_penjual",
            AktaField::TempatLahirPenjual => "tempat_lahir_penjual",
            AktaField::TanggalLahirPenjual => "tanggal_lahir_penjual",
            AktaField::PekerjaanPenjual => "pekerjaan_penjual",
            AktaField::AlamatPenjual => "alamat_penjual",
            AktaField::NamaPembeli => "nama_pembeli",
            AktaField::NikPembeli => "nik_pembeli",
            AktaField::PekerjaanPembeli => "pekerjaan_pembeli",
            AktaField::AlamatPembeli => "alamat_pembeli",
            AktaField::NoSertifikat => "no_sertifikat",
            AktaField::JenisHak => "jenis_hak",
            AktaField::LuasTanah => "luas_tanah",
            AktaField::Kelurahan => "kelurahan",
            AktaField::Kecamatan => "kecamatan",
            AktaField::Kabupaten => "kabupaten",
            AktaField::NopPbb => "nop_pbb",
            AktaField::NjopTotal => "njop_total",
            AktaField::TahunPajak => "tahun_pajak",
        }
    }

    /// Human-readable label used in review notes.
    pub fn label(self) -> &'static str {
        match self {
            AktaField::NamaPenjual => "Nama Penjual",
            AktaField::NikPenjual => "NIK Penjual",
            AktaField::TempatLahirPenjual => "Tempat Lahir Penjual",
            AktaField::TanggalLahirPenjual => "Tanggal Lahir Penjual",
            AktaField::PekerjaanPenjual => "Pekerjaan Penjual",
            AktaField::AlamatPenjual => "Alamat Penjual",
            AktaField::NamaPembeli => "Nama Pembeli",
            AktaField::NikPembeli => "NIK Pembeli",
            AktaField::PekerjaanPembeli => "Pekerjaan Pembeli",
            AktaField::AlamatPembeli => "Alamat Pembeli",
            AktaField::NoSertifikat => "Nomor Sertifikat",
            AktaField::JenisHak => "Jenis Hak",
            AktaField::LuasTanah => "Luas Tanah",
            AktaField::Kelurahan => "Kelurahan/Desa",
            AktaField::Kecamatan => "Kecamatan",
            AktaField::Kabupaten => "Kabupaten/Kota",
            AktaField::NopPbb => "NOP PBB",
            AktaField::NjopTotal => "NJOP Total",
            AktaField::TahunPajak => "Tahun Pajak",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Extracted values keyed by template placeholder name.
///
/// Only non-empty, trimmed values are stored; an absent key means the
/// extraction did not find the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ExtractedFields(BTreeMap<String, String>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`; blank values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.0.insert(key.into(), value.to_string());
        }
    }

    pub fn get(&self, field: AktaField) -> Option<&str> {
        self.get_key(field.key())
    }

    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Fill keys that are still absent from `other`; existing values win.
    pub fn merge_missing(&mut self, other: ExtractedFields) {
        for (key, value) in other.0 {
            if self.get_key(&key).is_none() {
                self.insert(key, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// JSON input goes through `insert` so blanks and padding never reach the template.
impl From<BTreeMap<String, String>> for ExtractedFields {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ExtractedFields> for BTreeMap<String, String> {
    fn from(fields: ExtractedFields) -> Self {
        fields.0
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = ExtractedFields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}
