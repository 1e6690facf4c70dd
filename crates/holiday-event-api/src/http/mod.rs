//! HTTP layer: gateway selection, request building and response handling

pub use provider::ApiProvider;
pub use request::RequestBuilder;
pub use response::Response;

pub mod provider;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
