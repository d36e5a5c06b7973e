use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use crate::{Client, Config, Credentials, TokenStrategy};

pub const TEST_CLIENT_ID: &str = "my client id";
pub const TEST_CLIENT_SECRET: &str = "my client secret";
pub const TEST_TOKEN: &str = "my token";

/// Create a standard test client.
pub fn test_client(base_url: String) -> Client {
    test_client_with_strategy(base_url, TokenStrategy::PerCall)
}

/// Create a test client with the given token strategy.
pub fn test_client_with_strategy(base_url: String, token_strategy: TokenStrategy) -> Client {
    Client::with_config(
        reqwest::Client::new(),
        Config {
            base_url,
            token_strategy,
        },
        Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
    )
}

/// Mount the token endpoint issuing [`TEST_TOKEN`], expecting exactly `calls` exchanges.
pub async fn mount_token(mock_server: &MockServer, calls: u64) {
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/auth/api/access-token"))
        .and(matchers::body_json(serde_json::json!({
            "clientId": TEST_CLIENT_ID,
            "clientSecret": TEST_CLIENT_SECRET,
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": TEST_TOKEN })),
        )
        .expect(calls)
        .mount(mock_server)
        .await;
}

/// The matcher for the authorization header carrying [`TEST_TOKEN`].
pub fn bearer() -> matchers::HeaderExactMatcher {
    matchers::header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
}
