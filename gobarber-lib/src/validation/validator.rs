//! Validator builder for fluent validation API.

use super::result::{FieldError, ValidationResult};

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    value: String,
    rules: Vec<Rule>,
}

impl FieldEntry {
    /// Run every rule, returning all violations in rule order.
    fn violations(&self) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule(self.value.as_str()).err())
            .collect()
    }
}

/// Builder for validating multiple fields.
///
/// # Example
///
/// ```
/// use gobarber_lib::validation::Validator;
///
/// let result = Validator::new()
///     .field("name", "Ana")
///         .required("Name is required")
///     .field("password", "123")
///         .min_length(6, "At least 6 characters")
///     .validate();
///
/// assert_eq!(result.error_for("password"), Some("At least 6 characters"));
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            name: name.into(),
            value: value.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    ///
    /// Never stops early: every field is checked and each failing field
    /// contributes its first violation.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let violations = field.violations();
            if let Some(first_error) = violations.into_iter().next() {
                log::trace!("field '{}' failed validation: {}", field.name, first_error);
                errors.push(FieldError {
                    field: field.name.clone(),
                    message: first_error,
                });
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field(
                "fields",
                &self.fields.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    name: String,
    value: String,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v: &str| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Require the field to hold at least one character.
    ///
    /// Whitespace counts; use [`required`](Self::required) to reject it.
    pub fn non_empty(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require the field to be non-blank.
    ///
    /// Whitespace-only values count as empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Result<Self, regex::Error> {
        let re = regex::Regex::new(pattern)?;
        Ok(self.rule(move |v| re.is_match(v), msg))
    }

    /// Require a valid email address.
    ///
    /// The domain must be dotted and end in a top-level label of at least
    /// two letters, so `ana@gmail` and `a@localhost` fail.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    v.parse::<email_address::EmailAddress>()
                        .is_ok_and(|address| has_public_domain(address.domain()))
                }
            },
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v| v == other, msg)
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<String>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    pub fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name: self.name,
            value: self.value,
            rules: self.rules,
        });
        validator
    }
}

/// `label.tld` with a non-empty label and an alphabetic TLD of 2+ letters.
fn has_public_domain(domain: &str) -> bool {
    match domain.rsplit_once('.') {
        Some((rest, tld)) => {
            !rest.is_empty()
                && !rest.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}
