//! HTTP request builder

use super::Response;
use crate::{
    context::RequestContext,
    error::{Error, Result},
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::time::Duration;
use url::Url;

/// Builder for a single HTTP request.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    timeout: Duration,
    pub(crate) http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            timeout: Duration::from_secs(30),
            http_client: None,
        }
    }

    /// Set the HTTP client to use
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header, returning an error if the name or value is invalid.
    ///
    /// # Errors
    /// Returns [`Error::RequestBuild`] if the header name or value contains invalid characters.
    pub fn try_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|e| Error::RequestBuild(format!("invalid header name '{}': {}", key_str, e)))?;
        let value = value_str.parse::<HeaderValue>().map_err(|e| {
            Error::RequestBuild(format!("invalid header value for '{}': {}", key_str, e))
        })?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Mutable access to the headers, for callers that insert typed values.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the request and read the whole response body.
    ///
    /// The exchange is raced against `ctx`; if the context fires first the
    /// in-flight request is dropped and its connection released.
    pub async fn send(self, ctx: &RequestContext) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("No HTTP client configured".to_string()))?;

        ctx.check()?;

        let request = client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::RequestBuild(error_chain(&e)))?;

        let metadata = RequestMetadata::new(self.method.as_str(), self.url.path());
        metadata.log_request();
        let timer = RequestTimer::start();
        let timeout = self.timeout;

        let exchange = async {
            let resp = client
                .execute(request)
                .await
                .map_err(|e| transport_error(e, timeout))?;

            let status = resp.status();
            let headers = resp.headers().clone();
            let body = resp
                .bytes()
                .await
                .map_err(|e| transport_error(e, timeout))?
                .to_vec();

            Ok(Response::with_elapsed(status, headers, body, timer.elapsed()))
        };

        match ctx.run(exchange).await {
            Ok(response) => {
                let outcome = ResponseMetadata::new(response.status().as_u16(), response.elapsed())
                    .with_body_size(response.body().len());
                if response.is_success() {
                    outcome.log_success(&metadata);
                } else {
                    outcome.log_error(&metadata, "non-200 status");
                }
                Ok(response)
            }
            Err(error) => {
                metadata.log_failure(timer.elapsed(), &error);
                Err(error)
            }
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }
}

fn transport_error(error: reqwest::Error, timeout: Duration) -> Error {
    if error.is_timeout() {
        tracing::debug!(cause = %error_chain(&error), "HTTP request timed out");
        Error::Timeout(timeout)
    } else {
        Error::Request(error_chain(&error))
    }
}

/// Render an error with all of its sources, outermost first.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
