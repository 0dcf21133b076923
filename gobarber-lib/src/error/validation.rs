//! Validation error types

use crate::validation::FieldError;
use crate::validation::FieldErrorMap;

/// One or more fields failed schema validation.
///
/// Carries the first violation of every failing field, in field order.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationError {
    /// The failing fields.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a new validation error from field errors.
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Converts into a field-key to message map.
    pub fn into_error_map(self) -> FieldErrorMap {
        self.errors.into_iter().collect()
    }
}

impl From<FieldErrorMap> for ValidationError {
    fn from(map: FieldErrorMap) -> Self {
        Self::new(
            map.iter()
                .map(|(field, message)| FieldError::new(field, message))
                .collect(),
        )
    }
}
