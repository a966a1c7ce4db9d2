//! Authentication configuration types

use serde::{Deserialize, Deserializer, Serialize};

/// Authentication configuration for a request.
///
/// Only the active variant's fields exist, so fields of other modes can never
/// leak into the built request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,
    /// Basic authentication
    Basic {
        /// Username
        #[serde(default)]
        username: String,
        /// Password
        #[serde(default)]
        password: String,
    },
    /// Bearer token authentication
    Bearer {
        /// The bearer token
        #[serde(default)]
        token: String,
    },
    /// API Key authentication
    ApiKey {
        /// Header or query parameter name
        #[serde(default)]
        key: String,
        /// The API key value
        #[serde(default)]
        value: String,
        /// Where to add the key
        #[serde(default, rename = "addTo", alias = "add_to")]
        add_to: ApiKeyLocation,
    },
}

/// Location for API key authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ApiKeyLocation {
    /// Add to request headers
    #[default]
    Header,
    /// Add to query parameters
    QueryParam,
}

impl AuthConfig {
    /// Returns true if authentication is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates an API key authentication sent as a header.
    #[must_use]
    pub fn api_key_header(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            value: value.into(),
            add_to: ApiKeyLocation::Header,
        }
    }

    /// Creates an API key authentication sent as a query parameter.
    #[must_use]
    pub fn api_key_query(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            key: key.into(),
            value: value.into(),
            add_to: ApiKeyLocation::QueryParam,
        }
    }

    /// Returns the wire name of the auth type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
            Self::ApiKey { .. } => "api-key",
        }
    }
}

/// Reads an `AuthConfig` that may be stored as `null`.
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither `null` nor a
/// valid auth object.
pub fn deserialize_nullable<'de, D>(deserializer: D) -> Result<AuthConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AuthConfig>::deserialize(deserializer)?.unwrap_or_default())
}
