//! Key-value pair types shared by query parameters, headers, form fields and
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A key-value pair that can be switched off without being deleted.
///
/// Disabled entries stay in storage but are never applied to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    /// The entry key
    pub key: String,
    /// The entry value
    pub value: String,
    /// Whether this entry is applied
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl KeyValue {
    /// Creates a new enabled entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled entry.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: false,
        }
    }

    /// Parses `key<separator>value`, splitting on the first separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is missing or the key is empty.
    pub fn parse(input: &str, separator: char) -> DomainResult<Self> {
        let (key, value) = input
            .split_once(separator)
            .ok_or_else(|| DomainError::InvalidPair(input.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidPair(input.to_string()));
        }
        Ok(Self::new(key, value.trim()))
    }
}

/// An ordered list of key-value entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueList {
    items: Vec<KeyValue>,
}

impl KeyValueList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an entry to the list.
    pub fn add(&mut self, entry: KeyValue) {
        self.items.push(entry);
    }

    /// Replaces the first entry with the same key, or appends a new one.
    pub fn upsert(&mut self, entry: KeyValue) {
        match self.items.iter_mut().find(|item| item.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.items.push(entry),
        }
    }

    /// Returns an iterator over enabled entries, in list order.
    pub fn enabled(&self) -> impl Iterator<Item = &KeyValue> {
        self.items.iter().filter(|item| item.enabled)
    }

    /// Returns the first entry with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Returns all entries (enabled and disabled).
    #[must_use]
    pub fn all(&self) -> &[KeyValue] {
        &self.items
    }

    /// Returns the number of entries.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<KeyValue> for KeyValueList {
    fn from_iter<T: IntoIterator<Item = KeyValue>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_key_value_creation() {
        let entry = KeyValue::new("page", "1");
        assert_eq!(entry.key, "page");
        assert_eq!(entry.value, "1");
        assert!(entry.enabled);
        assert!(!KeyValue::disabled("debug", "true").enabled);
    }

    #[test]
    fn test_list_filter_enabled_keeps_order() {
        let list: KeyValueList = [
            KeyValue::new("page", "1"),
            KeyValue::disabled("debug", "true"),
            KeyValue::new("limit", "10"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = list.enabled().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["page", "limit"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_upsert_replaces_by_key() {
        let mut list = KeyValueList::new();
        list.upsert(KeyValue::new("host", "localhost"));
        list.upsert(KeyValue::new("port", "8080"));
        list.upsert(KeyValue::disabled("host", "example.com"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.all()[0], KeyValue::disabled("host", "example.com"));
    }

    #[test]
    fn test_parse_pair() {
        let entry = KeyValue::parse("Content-Type: application/json", ':').unwrap();
        assert_eq!(entry, KeyValue::new("Content-Type", "application/json"));

        let entry = KeyValue::parse("q=a=b", '=').unwrap();
        assert_eq!(entry.value, "a=b");

        assert!(KeyValue::parse("novalue", '=').is_err());
        assert!(KeyValue::parse("=value", '=').is_err());
    }

    #[test]
    fn test_missing_enabled_defaults_to_true() {
        let entry: KeyValue = serde_json::from_str(r#"{"key":"a","value":"b"}"#).unwrap();
        assert!(entry.enabled);
    }
}
