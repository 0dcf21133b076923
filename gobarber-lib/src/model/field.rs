//! Sign-up form fields

use std::fmt;

/// A field of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Password];

    /// Key used in payloads and error maps.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Placeholder shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "E-mail",
            Self::Password => "Password",
        }
    }

    /// Whether the input should hide what is typed.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }

    /// Looks up a field by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
