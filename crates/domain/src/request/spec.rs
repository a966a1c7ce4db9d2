//! Request specification type

use serde::{Deserialize, Serialize};

use super::{HttpMethod, KeyValue, KeyValueList, RequestBody};
use crate::auth::AuthConfig;
use crate::id::generate_id;

/// Complete description of an HTTP request as composed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Unique identifier for this request
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// HTTP method
    #[serde(default)]
    pub method: HttpMethod,
    /// Target URL, possibly already carrying a query string
    #[serde(default)]
    pub url: String,
    /// Query parameters appended to the URL
    #[serde(default)]
    pub params: KeyValueList,
    /// HTTP headers
    #[serde(default)]
    pub headers: KeyValueList,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
    /// Authentication configuration; `null` reads as no auth
    #[serde(default, deserialize_with = "crate::auth::deserialize_nullable")]
    pub auth: AuthConfig,
}

impl RequestSpec {
    /// Creates a new request specification with default values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            method: HttpMethod::default(),
            url: String::new(),
            params: KeyValueList::new(),
            headers: KeyValueList::new(),
            body: RequestBody::None,
            auth: AuthConfig::None,
        }
    }

    /// Creates a GET request with the given URL.
    #[must_use]
    pub fn get(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name).with_url(HttpMethod::Get, url)
    }

    /// Sets the method and URL.
    #[must_use]
    pub fn with_url(mut self, method: HttpMethod, url: impl Into<String>) -> Self {
        self.method = method;
        self.url = url.into();
        self
    }

    /// Replaces the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Appends an enabled query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.add(KeyValue::new(key, value));
        self
    }

    /// Appends an enabled header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(KeyValue::new(key, value));
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Sets the authentication.
    #[must_use]
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self::new("New Request")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_request() {
        let req = RequestSpec::default();
        assert_eq!(req.name, "New Request");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.url.is_empty());
        assert_eq!(req.body, RequestBody::None);
        assert_eq!(req.auth, AuthConfig::None);
    }

    #[test]
    fn test_get_request() {
        let req = RequestSpec::get("Users", "https://api.example.com/users")
            .with_param("page", "2")
            .with_header("Accept", "application/json");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://api.example.com/users");
        assert_eq!(req.params.len(), 1);
        assert_eq!(req.headers.all()[0].key, "Accept");
    }

    #[test]
    fn test_null_auth_deserializes_as_none() {
        let json = r#"{
            "id": "get-test",
            "name": "GET Request Test",
            "method": "GET",
            "url": "https://httpbin.org/get",
            "auth": null
        }"#;
        let req: RequestSpec = serde_json::from_str(json).unwrap();
        assert_eq!(req.auth, AuthConfig::None);
        assert!(req.params.is_empty());
    }
}
