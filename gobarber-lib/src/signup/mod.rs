//! Sign-up form workflow
//!
//! Validates the collected [`NewUser`](crate::model::NewUser), creates the
//! user through a [`UserApi`](crate::api::UserApi), then notifies and routes.
//! Validation failures are surfaced as per-field messages and never reach
//! the network.

mod controller;
mod schema;
mod state;

pub use controller::*;
pub use schema::*;
pub use state::*;
