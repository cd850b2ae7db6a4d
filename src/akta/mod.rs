//! Akta module - prepares extracted data for the AJB (Akta Jual Beli) template.
//!
//! - `fields` - the template's field catalogue
//! - `extraction` - cleanup of extraction model replies
//! - `validation` - review notes for missing or suspicious values
//! - `konteks` - the final placeholder -> value mapping

pub mod extraction;
pub mod fields;
pub mod konteks;
pub mod traits;
pub mod validation;

pub use extraction::{parse_extraction_response, ExtractionError};
pub use fields::{AktaField, ExtractedFields};
pub use konteks::{build_context, build_context_on, AktaContext, AktaData, AktaRequest};
pub use traits::Validator;

use thiserror::Error;

use crate::terbilang::TerbilangError;

/// Errors that stop the render context from being built.
#[derive(Debug, Error)]
pub enum AktaError {
    #[error("gagal membaca respons ekstraksi ke-{index}: {source}")]
    Extraction {
        index: usize,
        #[source]
        source: ExtractionError,
    },
    #[error("{field}: {source}")]
    Angka {
        field: &'static str,
        #[source]
        source: TerbilangError,
    },
}
