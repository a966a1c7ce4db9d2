//! Body presentation helpers.

use serde_json::Value;

/// How a response body should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyView {
    /// Nothing to show
    Empty,
    /// JSON, shown pretty-printed
    Json,
    /// HTML markup
    Html,
    /// XML markup
    Xml,
    /// Anything else
    Text,
}

impl BodyView {
    /// Classifies a decoded body.
    ///
    /// Null and blank strings are empty. Structured values are JSON. Strings are sniffed: a bracketed string that
    /// parses as JSON is JSON, markup is HTML or XML.
    #[must_use]
    pub fn classify(body: &Value) -> Self {
        let text = match body {
            Value::Null => return Self::Empty,
            Value::String(text) => text,
            _ => return Self::Json,
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
            || (trimmed.starts_with('[') && trimmed.ends_with(']'));

        if bracketed && serde_json::from_str::<Value>(trimmed).is_ok() {
            Self::Json
        } else if trimmed.starts_with("<!DOCTYPE html")
            || trimmed.starts_with("<html")
            || (trimmed.contains('<') && trimmed.contains('>') && !trimmed.starts_with("<?xml"))
        {
            Self::Html
        } else if trimmed.starts_with("<?xml") {
            Self::Xml
        } else {
            Self::Text
        }
    }

    /// Returns the view as an upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Json => "JSON",
            Self::Html => "HTML",
            Self::Xml => "XML",
            Self::Text => "TEXT",
        }
    }
}

/// Renders a body for display: JSON pretty-printed with two spaces, strings
/// as-is, null as an empty string.
#[must_use]
pub fn render_body(body: &Value) -> String {
    match body {
        Value::Null => String::new(),
        Value::String(text) => match BodyView::classify(body) {
            BodyView::Json => serde_json::from_str::<Value>(text)
                .and_then(|parsed| serde_json::to_string_pretty(&parsed))
                .unwrap_or_else(|_| text.clone()),
            _ => text.clone(),
        },
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
