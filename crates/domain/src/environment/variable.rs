//! Environment types

use serde::{Deserialize, Serialize};

use crate::id::generate_id;
use crate::request::{KeyValue, KeyValueList};

/// An environment variable. Disabled variables are kept but not applied.
pub type EnvironmentVariable = KeyValue;

/// A named set of variables (e.g., "staging", "production").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier
    pub id: String,
    /// Environment name
    pub name: String,
    /// Variables, in insertion order
    #[serde(default)]
    pub variables: KeyValueList,
}

impl Environment {
    /// Creates a new empty environment with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            variables: KeyValueList::new(),
        }
    }

    /// Sets a variable, replacing an existing one with the same key.
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>, enabled: bool) {
        let mut variable = EnvironmentVariable::new(key, value);
        variable.enabled = enabled;
        self.variables.upsert(variable);
    }

    /// Returns the value of an enabled variable.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.variables
            .get(key)
            .filter(|v| v.enabled)
            .map(|v| v.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_variable_upserts() {
        let mut env = Environment::new("Staging");
        env.set_variable("base_url", "https://staging.example.com", true);
        env.set_variable("token", "abc", true);
        env.set_variable("base_url", "https://staging2.example.com", true);

        assert_eq!(env.variables.len(), 2);
        assert_eq!(env.value_of("base_url"), Some("https://staging2.example.com"));
    }

    #[test]
    fn test_disabled_variable_has_no_value() {
        let mut env = Environment::new("Local");
        env.set_variable("debug", "true", false);
        assert_eq!(env.value_of("debug"), None);
        assert_eq!(env.variables.len(), 1);
    }
}
