//! GoBarber web client library
//!
//! The sign-up workflow of the GoBarber client: form validation, the
//! `/users` API call, and the notification and navigation that follow.

pub mod api;
pub mod error;
pub mod model;
pub mod navigate;
pub mod notify;
pub mod signup;
pub mod validation;

mod client;

pub use client::*;
pub use signup::SignUpController;
pub use signup::SubmitOutcome;
