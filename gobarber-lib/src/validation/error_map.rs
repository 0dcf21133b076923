//! Per-field error messages for inline display.

use indexmap::IndexMap;

use super::FieldError;

/// Mapping from field key to the message shown beside that field.
///
/// Keeps insertion order so fields render in form order. Applying a new
/// map replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorMap {
    entries: IndexMap<String, String>,
}

impl FieldErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for a field unless one is already present.
    ///
    /// Returns `false` when the field already had a message.
    pub fn insert_first(&mut self, field: impl Into<String>, message: impl Into<String>) -> bool {
        match self.entries.entry(field.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(message.into());
                true
            }
        }
    }

    /// Message for a field, if it has one.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Whether a field has a message.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Field keys with messages, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<FieldError> for FieldErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut map = Self::new();
        for error in iter {
            map.insert_first(error.field, error.message);
        }
        map
    }
}
