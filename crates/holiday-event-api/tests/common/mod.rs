//! Common test utilities and helpers

use holiday_event_api::{ApiProvider, Client};
use std::path::Path;
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test API key
#[allow(dead_code)]
pub fn test_api_key() -> String {
    "abc123".to_string()
}

/// Path prefix the mock gateway serves the API under, mirroring APILayer.
#[allow(dead_code)]
pub const API_PREFIX: &str = "/checkiday";

/// Create a client for `provider` that talks to the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, provider: ApiProvider) -> Client {
    Client::builder()
        .provider(provider)
        .api_key(test_api_key())
        .base_url(format!("{}{}/", server.uri(), API_PREFIX))
        .build()
        .expect("Failed to build client")
}

/// Full request path of an operation on the mock server.
#[allow(dead_code)]
pub fn api_path(operation: &str) -> String {
    format!("{}/{}", API_PREFIX, operation)
}
