//! HTTP Request body types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{KeyValue, KeyValueList};
use crate::error::{DomainError, DomainResult};

/// A form field of a `form-data` or `x-www-form-urlencoded` body.
pub type FormField = KeyValue;

/// Editor flavour of a raw body.
///
/// This only affects how the body is edited and displayed. It never changes
/// the bytes sent or the headers attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    /// Plain text
    #[default]
    Text,
    /// JSON document
    Json,
    /// XML document
    Xml,
    /// JavaScript source
    Javascript,
}

impl RawKind {
    /// Returns the kind as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Javascript => "javascript",
        }
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RawKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "javascript" | "script" | "js" => Ok(Self::Javascript),
            other => Err(DomainError::UnsupportedRawKind(other.to_string())),
        }
    }
}

/// HTTP request body description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RequestBody {
    /// No body
    #[default]
    None,
    /// Multipart form data
    FormData {
        /// Form fields, in send order
        #[serde(default)]
        fields: KeyValueList,
    },
    /// Form URL encoded body
    #[serde(rename = "x-www-form-urlencoded")]
    UrlEncoded {
        /// Form fields, in send order
        #[serde(default)]
        fields: KeyValueList,
    },
    /// Literal string payload
    Raw {
        /// The payload, sent verbatim
        #[serde(default)]
        content: String,
        /// Editor flavour
        #[serde(default, rename = "rawType", alias = "raw_type")]
        raw_type: RawKind,
    },
    /// File upload. Accepted in the model but never built into a payload.
    Binary,
}

impl RequestBody {
    /// Creates a raw body with the given editor flavour.
    #[must_use]
    pub fn raw(content: impl Into<String>, raw_type: RawKind) -> Self {
        Self::Raw {
            content: content.into(),
            raw_type,
        }
    }

    /// Creates a raw JSON body.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::raw(content, RawKind::Json)
    }

    /// Creates a raw plain text body.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::raw(content, RawKind::Text)
    }

    /// Creates a multipart body.
    #[must_use]
    pub fn form_data(fields: impl IntoIterator<Item = FormField>) -> Self {
        Self::FormData {
            fields: fields.into_iter().collect(),
        }
    }

    /// Creates a URL encoded body.
    #[must_use]
    pub fn url_encoded(fields: impl IntoIterator<Item = FormField>) -> Self {
        Self::UrlEncoded {
            fields: fields.into_iter().collect(),
        }
    }

    /// Returns the wire name of the body type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FormData { .. } => "form-data",
            Self::UrlEncoded { .. } => "x-www-form-urlencoded",
            Self::Raw { .. } => "raw",
            Self::Binary => "binary",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_body() {
        let body = RequestBody::json(r#"{"key": "value"}"#);
        assert_eq!(body.type_name(), "raw");
        let RequestBody::Raw { raw_type, .. } = body else {
            unreachable!("Expected Raw body variant");
        };
        assert_eq!(raw_type, RawKind::Json);
    }

    #[test]
    fn test_tagged_serialization() {
        let body = RequestBody::url_encoded([KeyValue::new("a", "1")]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "x-www-form-urlencoded");
        assert_eq!(json["fields"][0]["key"], "a");

        let parsed: RequestBody = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert_eq!(parsed, RequestBody::None);
    }

    #[test]
    fn test_raw_body_wire_format() {
        let json = serde_json::to_value(RequestBody::json("{}")).unwrap();
        assert_eq!(json["type"], "raw");
        assert_eq!(json["rawType"], "json");
        assert!(json.get("raw_type").is_none());

        let legacy: RequestBody =
            serde_json::from_str(r#"{"type":"raw","content":"<a/>","raw_type":"xml"}"#).unwrap();
        assert_eq!(legacy, RequestBody::raw("<a/>", RawKind::Xml));
    }

    #[test]
    fn test_raw_kind_parse() {
        assert_eq!("JSON".parse::<RawKind>().unwrap(), RawKind::Json);
        assert_eq!("script".parse::<RawKind>().unwrap(), RawKind::Javascript);
        assert!("yaml".parse::<RawKind>().is_err());
    }
}
