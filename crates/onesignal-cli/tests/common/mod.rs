/*
[INPUT]:  Mock server address
[OUTPUT]: CLI configuration fixtures for tests
[POS]:    Test infrastructure - shared across CLI test modules
[UPDATE]: When CliConfig fields change
*/

use onesignal_cli::CliConfig;
use wiremock::MockServer;

pub const TEST_APP_ID: &str = "92911750-242d-4260-9e00-9d9034f139ce";

/// Configuration pointing both clients at the mock server
pub fn config_for(server: &MockServer) -> CliConfig {
    CliConfig {
        app_id: Some(TEST_APP_ID.to_string()),
        app_api_key: Some("app-key".to_string()),
        user_auth_key: Some("user-key".to_string()),
        base_url: Some(format!("{}/api/v1", server.uri())),
        timeout_secs: 5,
    }
}
