//! Submission error types

use super::ApiError;

/// Submitting an already valid form failed.
///
/// The cause is kept for logging only. Users see a single generic message.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The create-user request failed.
    #[error("create user request failed: {0}")]
    Request(#[from] ApiError),
}

impl SubmissionError {
    /// Returns the underlying API error.
    pub fn api_error(&self) -> &ApiError {
        match self {
            Self::Request(err) => err,
        }
    }
}
