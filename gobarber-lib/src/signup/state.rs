//! Submission lifecycle

use std::fmt;

use crate::error::{Error, SubmissionError, ValidationError};
use crate::model::User;
use crate::validation::FieldErrorMap;

/// Where a submission attempt currently is.
///
/// `Idle -> Validating -> (Failed | Submitting -> (Succeeded | Failed))`.
/// `Succeeded` and `Failed` end an attempt; the next submit starts over at
/// `Validating`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Returns `true` once an attempt has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns `true` while a request is outstanding.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// How a submission attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The user was created. Carries the API's echo, when it sent one.
    Succeeded(Option<User>),
    /// Validation failed. Nothing was sent.
    Invalid(FieldErrorMap),
    /// The request failed after validation passed.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Field errors, when validation failed.
    pub fn field_errors(&self) -> Option<&FieldErrorMap> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Converts into a `Result` for callers that only care about the user.
    pub fn into_result(self) -> Result<Option<User>, Error> {
        match self {
            Self::Succeeded(user) => Ok(user),
            Self::Invalid(errors) => Err(ValidationError::from(errors).into()),
            Self::Failed(err) => Err(err.into()),
        }
    }

    /// Final state this outcome leaves the form in.
    pub fn state(&self) -> SubmissionState {
        match self {
            Self::Succeeded(_) => SubmissionState::Succeeded,
            Self::Invalid(_) | Self::Failed(_) => SubmissionState::Failed,
        }
    }
}
