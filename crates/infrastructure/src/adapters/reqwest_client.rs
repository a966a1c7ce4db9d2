//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the application.

use std::collections::BTreeMap;
use std::time::Duration;

use courier_application::ports::{
    HttpClient, HttpClientError, TransportRequest, TransportResponse,
};
use courier_domain::{ClientSettings, HttpMethod};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method, Url};
use serde_json::Value;

use crate::http::build_body;

/// HTTP client implementation using reqwest.
///
/// Non-2xx answers are returned as [`HttpClientError::Status`] carrying the
/// full response, so callers can tell "server said no" from "no answer".
pub struct ReqwestHttpClient {
    client: Client,
    max_redirects: usize,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client from the client settings.
    ///
    /// Uses the configured User-Agent and redirect limit. TLS verification
    /// stays enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &ClientSettings) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            max_redirects: settings.max_redirects,
        })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string())
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        HttpClientError::Other(error_chain(error))
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn send(
        &self,
        request: &TransportRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, HttpClientError> {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(timeout);

        let body = build_body(&request.body);
        // Multipart needs reqwest's own Content-Type carrying the boundary.
        let skip_content_type = body.is_multipart();
        let mut has_content_type = false;
        for (name, value) in &request.headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                if skip_content_type {
                    continue;
                }
                has_content_type = true;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = body.apply(builder, has_content_type);

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_error(&e, timeout_ms))?;

        let status = response.status();
        let headers = collect_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_error(&e, timeout_ms))?;
        let body = decode_body(headers.get(CONTENT_TYPE.as_str()).map(String::as_str), &bytes);

        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "response decoded");

        let response = TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        };

        if status.is_success() {
            Ok(response)
        } else {
            Err(HttpClientError::Status {
                response: Box::new(response),
            })
        }
    }
}

/// Flattens a header map to one value per name; repeated headers are joined
/// with ", ".
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .keys()
        .map(|name| {
            let value = headers
                .get_all(name)
                .iter()
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_str().to_string(), value)
        })
        .collect()
}

/// Decodes a body: JSON media types are parsed, anything else (or JSON that
/// fails to parse) stays text.
fn decode_body(content_type: Option<&str>, bytes: &[u8]) -> Value {
    if content_type.is_some_and(is_json) {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return value;
        }
    }
    Value::String(String::from_utf8_lossy(bytes).into_owned())
}

fn is_json(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .is_ok_and(|m| m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
}

/// Joins an error with its sources; reqwest's top-level message hides the
/// cause (e.g., "error sending request").
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
