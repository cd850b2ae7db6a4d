//! Traits shared by deed requests.

use super::validation::ValidationErrors;

/// Trait for reviewing request objects.
pub trait Validator {
    /// Collect findings; an empty collection means nothing needs manual attention.
    fn validate(&self) -> ValidationErrors;
}
