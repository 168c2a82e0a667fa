/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for onesignal-client tests

use onesignal_client::{AppClient, ClientConfig, UserClient};
use wiremock::MockServer;

pub const TEST_APP_ID: &str = "92911750-242d-4260-9e00-9d9034f139ce";
pub const TEST_APP_KEY: &str = "NGEwMGZmMjItY2NkNy0xMWUzLTk5ZDUtMDAwYzI5NDBlNjJj";
pub const TEST_USER_KEY: &str = "YWJjZGVmZ2hpamtsbW5vcHFyc3R1dnd4eXo";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// App client pointed at the mock server's `/api/v1/` root
pub fn app_client(server: &MockServer) -> AppClient {
    AppClient::with_base_url(
        TEST_APP_ID,
        TEST_APP_KEY,
        ClientConfig::default(),
        &format!("{}/api/v1", server.uri()),
    )
    .expect("app client init")
}

/// User client pointed at the mock server's `/api/v1/` root
#[allow(dead_code)]
pub fn user_client(server: &MockServer) -> UserClient {
    UserClient::with_base_url(
        TEST_USER_KEY,
        ClientConfig::default(),
        &format!("{}/api/v1", server.uri()),
    )
    .expect("user client init")
}
