/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for mercadopago-adapter tests

use mercadopago_adapter::{ClientConfig, Config, MercadoPagoClient};
use wiremock::MockServer;

/// Access token used by every test client
pub const TEST_ACCESS_TOKEN: &str = "TEST-access-token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Configuration used by every test client
pub fn test_config() -> Config {
    Config::new(TEST_ACCESS_TOKEN).expect("test config")
}

/// Client wired to the given mock server
pub fn test_client(server: &MockServer) -> MercadoPagoClient {
    MercadoPagoClient::with_config_and_base_url(
        test_config(),
        ClientConfig::default(),
        &server.uri(),
    )
    .expect("client init")
}
