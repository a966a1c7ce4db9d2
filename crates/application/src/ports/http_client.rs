//! HTTP Client port

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use courier_domain::HttpMethod;

/// Body payload handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransportBody {
    /// No body is attached.
    #[default]
    None,
    /// A string payload sent verbatim.
    Text(String),
    /// An `application/x-www-form-urlencoded` string.
    UrlEncoded(String),
    /// Multipart text fields, in send order.
    Multipart(Vec<(String, String)>),
}

impl TransportBody {
    /// Returns true if no body is attached.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Everything the transport needs to perform one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Final URL including the query string
    pub url: String,
    /// Header map; one value per name
    pub headers: BTreeMap<String, String>,
    /// Body payload
    pub body: TransportBody,
}

/// A response as decoded by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase
    pub status_text: String,
    /// Response headers, one value per name
    pub headers: BTreeMap<String, String>,
    /// Body: parsed JSON when the server declared JSON, otherwise text
    pub body: Value,
}

/// Errors raised by the transport.
///
/// `Status` carries a full response: the server answered, just not with a
/// success code. Every other variant means no response was received.
#[derive(Debug, Clone, Error)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The call did not finish within the timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// The timeout that was exceeded, in milliseconds
        timeout_ms: u64,
    },

    /// Host name resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that could not be resolved
        host: String,
        /// Underlying message
        message: String,
    },

    /// The remote host refused the connection.
    #[error("Connection refused: {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was reached.
    #[error("Too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured limit
        max: usize,
    },

    /// The server answered with a non-success status.
    #[error("Request failed with status code {}", .response.status)]
    Status {
        /// The error response
        response: Box<TransportResponse>,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl HttpClientError {
    /// Returns the embedded response, if the server answered.
    #[must_use]
    pub fn response(&self) -> Option<&TransportResponse> {
        match self {
            Self::Status { response } => Some(response),
            _ => None,
        }
    }
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Performs one call, bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives (network failure, timeout,
    /// DNS) or if the server answers with a non-success status.
    fn send(
        &self,
        request: &TransportRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<TransportResponse, HttpClientError>> + Send;
}
