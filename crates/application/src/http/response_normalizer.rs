//! Response normalizer.
//!
//! Folds every transport outcome into one [`ResponseSpec`] shape so callers
//! never branch on success versus failure.

use courier_domain::ResponseSpec;

use crate::ports::{HttpClientError, TransportResponse};

/// Normalizes a transport outcome measured over `elapsed_ms`.
///
/// A failure that still carries a server response is treated like a success
/// with that response's status. A failure without one becomes the status-0
/// sentinel whose status text and body are the error message.
#[must_use]
pub fn normalize(
    outcome: Result<TransportResponse, HttpClientError>,
    elapsed_ms: u64,
) -> ResponseSpec {
    match outcome {
        Ok(response) => from_transport(response, elapsed_ms),
        Err(HttpClientError::Status { response }) => from_transport(*response, elapsed_ms),
        Err(error) => ResponseSpec::no_response(&error.to_string(), elapsed_ms),
    }
}

fn from_transport(response: TransportResponse, elapsed_ms: u64) -> ResponseSpec {
    ResponseSpec::new(
        response.status,
        response.status_text,
        response.headers,
        response.body,
        elapsed_ms,
    )
}
