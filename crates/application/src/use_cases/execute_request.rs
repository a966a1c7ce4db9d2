//! Execute request use case.

use std::time::{Duration, Instant};

use courier_domain::{RequestSpec, ResponseSpec};

use crate::http::{build_request, normalize};
use crate::ports::{HttpClient, HttpClientError};

/// Sends one request and normalizes whatever comes back.
pub struct ExecuteRequest<C> {
    client: C,
    timeout: Duration,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case.
    #[must_use]
    pub const fn new(client: C, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Executes the request.
    ///
    /// Never fails: transport errors and timeouts come back as a status-0
    /// response. Elapsed time covers the whole call, failures included.
    pub async fn execute(&self, request: &RequestSpec) -> ResponseSpec {
        let transport = build_request(request);
        tracing::debug!(method = %transport.method, url = %transport.url, "sending request");

        let start = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.client.send(&transport, self.timeout))
            .await
            .unwrap_or_else(|_| {
                Err(HttpClientError::Timeout {
                    timeout_ms: millis(self.timeout),
                })
            });
        let elapsed_ms = millis(start.elapsed());

        match &outcome {
            Ok(response) => {
                tracing::info!(status = response.status, elapsed_ms, "response received");
            }
            Err(error) => tracing::warn!(%error, elapsed_ms, "request failed"),
        }

        normalize(outcome, elapsed_ms)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
