//! Validatable trait for records with a validation schema.

use super::{ValidationResult, Validator};

/// Trait for records that can be validated.
///
/// Implementors describe their schema once in [`validator`](Self::validator).
pub trait Validatable {
    /// Build a validator loaded with this record's values and rules.
    fn validator(&self) -> Validator;

    /// Run the schema against the current values.
    fn validate(&self) -> ValidationResult {
        self.validator().validate()
    }
}
