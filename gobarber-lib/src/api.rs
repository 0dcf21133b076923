//! Calls against the `/users` resource

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::model::{NewUser, User};

/// Path of the users resource.
pub const USERS_PATH: &str = "/users";

/// The user operations the sign-up flow depends on.
///
/// [`ApiClient`] is the production implementation; tests substitute fakes.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Creates a user.
    ///
    /// Any 2xx status is a success. Returns the created user when the API
    /// echoes one back, or `None` when the body is empty or unreadable.
    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ApiError>;
}

#[async_trait]
impl<T: UserApi + ?Sized> UserApi for Arc<T> {
    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ApiError> {
        (**self).create_user(user).await
    }
}

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Picks the human-readable message out of an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Reads the created user out of a success body.
///
/// The status alone decides success; a body that is empty or not a user
/// yields `None`.
fn decode_created(body: &str) -> Option<User> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("POST {} succeeded with an unreadable body: {}", USERS_PATH, e);
            None
        }
    }
}

impl ApiClient {
    /// Creates a user with `POST /users`.
    pub async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ApiError> {
        log::debug!("POST {} for {}", USERS_PATH, user.email);

        let response = self
            .post(USERS_PATH)
            .json(user)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            log::warn!("POST {} failed with {}", USERS_PATH, status);
            return Err(ApiError::http(status.as_u16(), error_message(&body)));
        }

        Ok(decode_created(&body))
    }
}

#[async_trait]
impl UserApi for ApiClient {
    async fn create_user(&self, user: &NewUser) -> Result<Option<User>, ApiError> {
        ApiClient::create_user(self, user).await
    }
}
