//! Validation schema of the sign-up form

use crate::model::{Field, NewUser};
use crate::validation::{Validatable, ValidationResult, Validator};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "E-mail is required";
pub const EMAIL_INVALID: &str = "Enter a valid e-mail";
pub const PASSWORD_TOO_SHORT: &str = "At least 6 characters";

/// Checks a sign-up record, collecting every failing field.
pub fn sign_up_schema(input: &NewUser) -> ValidationResult {
    input.validate()
}

impl Validatable for NewUser {
    fn validator(&self) -> Validator {
        Validator::new()
            .field(Field::Name.key(), self.name.as_str())
            .non_empty(NAME_REQUIRED)
            .field(Field::Email.key(), self.email.as_str())
            .non_empty(EMAIL_REQUIRED)
            .email(EMAIL_INVALID)
            .field(Field::Password.key(), self.password.as_str())
            .min_length(MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT)
            .finalize()
    }
}
