//! HTTP response handling

use crate::error::{Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A fully read HTTP response.
///
/// The body is buffered before this is constructed, so the underlying
/// connection has already been handed back to the pool.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self::with_elapsed(status, headers, body, Duration::ZERO)
    }

    /// Create a new response recording how long the exchange took.
    pub fn with_elapsed(
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Time from sending the request to having read the whole body.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether the API reported success. Only `200 OK` counts.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Parse)
    }

    /// Parse a successful body, or turn an unsuccessful one into an [`Error::Api`].
    pub fn parse_result<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.is_success() {
            return Err(Error::from_response(self.status, &self.body));
        }
        self.json()
    }
}
