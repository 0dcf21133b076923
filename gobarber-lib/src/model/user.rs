//! User payloads exchanged with the `/users` resource

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The values collected by the sign-up form.
///
/// Sent as the JSON body of `POST /users` once it passes validation.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Plain-text password, only ever sent to the API.
    pub password: String,
}

impl NewUser {
    /// Creates a new sign-up record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A user as returned by the API after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Stored avatar file name, if any.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Public avatar URL, if any.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
