//! Response specification type
//!
//! Contains the display shape of an HTTP response: status, timing, an
//! approximate size, headers and a body of whatever shape the transport
//! decoded it to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value reserved for "no response was received".
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Display category of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// No response was received (status 0)
    NoResponse,
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx and above
    ServerError,
}

impl StatusCategory {
    /// Classifies a numeric status code.
    #[must_use]
    pub const fn of(status: u16) -> Self {
        match status {
            NO_RESPONSE_STATUS => Self::NoResponse,
            1..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            _ => Self::ServerError,
        }
    }

    /// Returns a short label, e.g. "client-error".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoResponse => "no-response",
            Self::Informational => "informational",
            Self::Success => "success",
            Self::Redirection => "redirection",
            Self::ClientError => "client-error",
            Self::ServerError => "server-error",
        }
    }
}

/// HTTP response as shown to the user and stored in history.
///
/// Created once per execution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code, or 0 if no response was received.
    pub status: u16,
    /// Status text (e.g., "OK", or the failure message for status 0)
    pub status_text: String,
    /// Elapsed wall-clock time in milliseconds.
    pub time_ms: u64,
    /// Approximate size: header text plus body text length.
    pub size: usize,
    /// Response headers, one value per name.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Decoded body: a string, a parsed JSON structure, or null.
    #[serde(default)]
    pub body: Value,
}

impl ResponseSpec {
    /// Creates a response from its parts, computing the size.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        headers: BTreeMap<String, String>,
        body: Value,
        time_ms: u64,
    ) -> Self {
        let size = approximate_size(&headers, &body);
        Self {
            status,
            status_text: status_text.into(),
            time_ms,
            size,
            headers,
            body,
        }
    }

    /// Creates the sentinel response for a call that never got an answer.
    #[must_use]
    pub fn no_response(message: &str, time_ms: u64) -> Self {
        let status_text = if message.is_empty() {
            "Network Error"
        } else {
            message
        };
        let body = if message.is_empty() {
            "Request failed"
        } else {
            message
        };
        Self {
            status: NO_RESPONSE_STATUS,
            status_text: status_text.to_string(),
            time_ms,
            size: 0,
            headers: BTreeMap::new(),
            body: Value::String(body.to_string()),
        }
    }

    /// Returns true if a response was actually received.
    #[must_use]
    pub const fn is_received(&self) -> bool {
        self.status != NO_RESPONSE_STATUS
    }

    /// Returns the display category of the status.
    #[must_use]
    pub const fn category(&self) -> StatusCategory {
        StatusCategory::of(self.status)
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.category(), StatusCategory::Success)
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Returns the size in kilobytes with two decimals (e.g., "1.50 KB").
    #[must_use]
    pub fn size_display(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let kb = self.size as f64 / 1024.0;
        format!("{kb:.2} KB")
    }

    /// Returns the elapsed time for display (e.g., "124 ms").
    #[must_use]
    pub fn time_display(&self) -> String {
        format!("{} ms", self.time_ms)
    }
}

/// Computes the approximate size of a response.
///
/// Sums `len(key) + len(value)` over every header, then adds the body length:
/// a string counts as itself and any other value as its compact JSON text.
/// Empty bodies (null, `false`, `0`, `""`) add nothing. Lengths are counted in
/// characters, so this is a textual approximation and not the encoded byte
/// count on the wire.
#[must_use]
pub fn approximate_size(headers: &BTreeMap<String, String>, body: &Value) -> usize {
    let header_size: usize = headers
        .iter()
        .map(|(key, value)| key.chars().count() + value.chars().count())
        .sum();

    let body_size = match body {
        Value::Null | Value::Bool(false) => 0,
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => 0,
        Value::String(text) => text.chars().count(),
        other => serde_json::to_string(other).map_or(0, |text| text.chars().count()),
    };

    header_size + body_size
}
