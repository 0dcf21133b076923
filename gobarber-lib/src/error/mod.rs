//! Error types

mod api;
mod submission;
mod validation;

pub use api::*;
pub use submission::*;
pub use validation::*;

/// Top-level error for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The input did not satisfy the form schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submitting a valid form failed.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
