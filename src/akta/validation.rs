//! Review rules for extracted deed data.
//!
//! Findings never block rendering: a draft is always produced and the
//! notary completes whatever the extraction missed. Messages are in
//! Indonesian so they can be shown to the operator as-is.

use std::fmt;

/// A single finding with a hint on how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} tidak ditemukan pada dokumen", label)).with_suggestion(
            format!("Lengkapi {} secara manual pada draft akta", label.to_lowercase()),
        )
    }

    pub fn invalid_nik(field: &str) -> Self {
        Self::new(field, "NIK harus terdiri dari 16 digit angka")
            .with_suggestion("Periksa kembali NIK sesuai KTP, contoh: 3171234567890123")
    }

    pub fn invalid_nop(field: &str) -> Self {
        Self::new(field, "NOP PBB harus terdiri dari 18 digit angka").with_suggestion(
            "Periksa kembali NOP pada SPPT PBB, contoh: 31.71.010.001.001-0001.0",
        )
    }

    pub fn invalid_year(field: &str, value: &str) -> Self {
        Self::new(field, format!("Tahun '{}' tidak valid", value))
            .with_suggestion("Gunakan tahun empat digit, contoh: 2024")
    }

    pub fn invalid_amount(field: &str, message: impl Into<String>) -> Self {
        Self::new(field, message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

/// Collection of findings with formatted output.
#[derive(Debug, Default, Clone)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// One line per finding, for JSON responses.
    pub fn to_notes(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Numbered summary suitable for an MCP text response.
    pub fn to_mcp_message(&self) -> String {
        if self.errors.is_empty() {
            return "Semua data wajib terisi.".to_string();
        }

        let mut parts = vec![format!(
            "Perlu diperiksa: {} catatan ditemukan\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.join("\n")
    }
}

// ============================================================================
// Validation functions
// ============================================================================

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn validate_required(
    value: Option<&str>,
    field: &str,
    label: &str,
    errors: &mut ValidationErrors,
) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// NIK must be exactly 16 digits. Absent values are reported by [`validate_required`].
pub fn validate_nik(value: Option<&str>, field: &str, errors: &mut ValidationErrors) {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return;
    };

    if trimmed.len() != 16 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        errors.add(ValidationError::invalid_nik(field));
    }
}

/// NOP is printed with dots and dashes; 18 digits must remain after removing them.
pub fn validate_nop(value: Option<&str>, field: &str, errors: &mut ValidationErrors) {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return;
    };

    if digits_only(trimmed).len() != 18 {
        errors.add(ValidationError::invalid_nop(field));
    }
}

/// Tax year must be a plausible four-digit year.
pub fn validate_tahun(value: Option<&str>, field: &str, errors: &mut ValidationErrors) {
    let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return;
    };

    let valid = trimmed.len() == 4
        && trimmed
            .parse::<u16>()
            .map_or(false, |year| (1900..=2100).contains(&year));
    if !valid {
        errors.add(ValidationError::invalid_year(field, trimmed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nop() {
        let mut errors = ValidationErrors::new();
        validate_nop(Some("31.71.010.001.001-0001.0"), "nop_pbb", &mut errors);
        assert!(errors.is_empty());

        validate_nop(Some("31.71.010"), "nop_pbb", &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_validate_tahun() {
        let mut errors = ValidationErrors::new();
        validate_tahun(Some("2024"), "tahun_pajak", &mut errors);
        validate_tahun(None, "tahun_pajak", &mut errors);
        assert!(errors.is_empty());

        validate_tahun(Some("24"), "tahun_pajak", &mut errors);
        validate_tahun(Some("3024"), "tahun_pajak", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_mcp_message_without_findings() {
        assert_eq!(ValidationErrors::new().to_mcp_message(), "Semua data wajib terisi.");
    }
}
