/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ringline-sdk tests

use ringline_sdk::{ClientConfig, Credentials, RinglineClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API key every mock-backed test authenticates with
pub fn mock_api_key() -> String {
    "KEY-test-0123456789".to_string()
}

/// Build a client pointed at the mock server
pub fn test_client(server: &MockServer) -> RinglineClient {
    RinglineClient::with_config_and_base_url(
        Credentials::ApiKey(mock_api_key()),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}

/// A documented error payload with one entry
#[allow(dead_code)]
pub fn validation_error_body() -> serde_json::Value {
    serde_json::json!({
        "errors": [
            {
                "code": "10015",
                "title": "Invalid destination number",
                "detail": "The `to` number must be E.164 formatted.",
                "source": { "pointer": "/to" }
            }
        ]
    })
}
