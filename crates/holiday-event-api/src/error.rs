//! Error types for the Holiday and Event API client
//!
//! Every failure is returned to the caller as an [`Error`] value; nothing is
//! logged and dropped inside the client. Display strings are stable and are
//! what callers usually surface to their own users.

use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Holiday and Event API client.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider was not set, or named an unrecognized gateway.
    #[error("please provide a valid API provider")]
    ProviderRequired,

    /// The API key was empty.
    #[error("please provide a valid API key. Get one at {source_url}")]
    ApiKeyRequired {
        /// Where a key for the selected provider can be obtained
        source_url: &'static str,
    },

    /// `get_event_info` was called without an event id.
    #[error("event id is required")]
    EventIdRequired,

    /// `search` was called without a query.
    #[error("search query is required")]
    SearchQueryRequired,

    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The outgoing request could not be assembled (bad header value, etc).
    #[error("can't create request: {0}")]
    RequestBuild(String),

    /// Network or transport failure while the request was in flight.
    #[error("can't process request: {0}")]
    Request(String),

    /// The request did not complete before its deadline.
    ///
    /// Covers both the client timeout and a [`RequestContext`](crate::RequestContext)
    /// deadline. Only the budget is kept; the transport's own timeout message
    /// is logged at debug level instead.
    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    /// The request was cancelled through its [`RequestContext`](crate::RequestContext).
    #[error("request cancelled")]
    Cancelled,

    /// The API answered with a non-200 status.
    ///
    /// `message` is the API's own error string when the body carried one,
    /// otherwise the HTTP status line.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: StatusCode,
        /// Error message
        message: String,
    },

    /// A 200 response whose body did not match the expected schema.
    #[error("can't parse response: {0}")]
    Parse(#[source] serde_json::Error),
}

impl Error {
    /// Create an API error from a non-200 status and its body.
    ///
    /// Uses the body's `error` string when present and non-empty, falling back
    /// to the status line (`"500 Internal Server Error"`, or `"599 "` for codes
    /// without a canonical reason).
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ApiErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status_line(status));

        Error::Api { status, message }
    }

    /// HTTP status of an upstream error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Request(_) | Error::Timeout(_) => true,
            Error::Api { status, .. } => {
                status.is_server_error()
                    || *status == StatusCode::TOO_MANY_REQUESTS
                    || *status == StatusCode::REQUEST_TIMEOUT
            }
            _ => false,
        }
    }
}

/// Format a status the way an HTTP status line reads: code, space, reason.
pub(crate) fn status_line(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_str(),
        status.canonical_reason().unwrap_or_default()
    )
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: String,
}
