//! Integration tests for the REST client and endpoint composition.
//!
//! These tests verify client construction, URL resolution across
//! environments and host overrides, and verb dispatch on the wire.

use rebilly_api::rest::{Endpoint, RestClient};
use rebilly_api::{ApiKey, ApiVersion, Environment, HostUrl, RebillyConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for the given environment.
fn create_test_config(environment: Environment) -> RebillyConfig {
    RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .environment(environment)
        .build()
        .unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_client_defaults_to_sandbox() {
    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    assert_eq!(client.environment(), Environment::Sandbox);
}

#[test]
fn test_client_targets_configured_environment() {
    let client = RestClient::new(&create_test_config(Environment::Production));

    assert_eq!(client.environment(), Environment::Production);
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// URL Resolution Tests
// ============================================================================

#[test]
fn test_sandbox_and_production_differ_only_in_host() {
    let sandbox = RestClient::new(&create_test_config(Environment::Sandbox));
    let production = RestClient::new(&create_test_config(Environment::Production));

    let version = ApiVersion::latest();
    let sandbox_endpoint = Endpoint::new(sandbox.environment(), &version, "contacts");
    let production_endpoint = Endpoint::new(production.environment(), &version, "contacts");

    assert_eq!(
        sandbox.url_for(&sandbox_endpoint),
        "https://api-sandbox.rebilly.com/v2.1/contacts/"
    );
    assert_eq!(
        production.url_for(&production_endpoint),
        "https://api.rebilly.com/v2.1/contacts/"
    );
    assert_eq!(sandbox_endpoint.path(), production_endpoint.path());
}

#[test]
fn test_host_override_replaces_base_host_for_any_environment() {
    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .environment(Environment::Production)
        .api_host(HostUrl::new("http://localhost:4010").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let version = ApiVersion::latest();
    let endpoint = Endpoint::new(client.environment(), &version, "transactions")
        .with_id("txn123")
        .with_action("refund");

    assert_eq!(
        client.url_for(&endpoint),
        "http://localhost:4010/v2.1/transactions/txn123/refund/"
    );
}

#[test]
fn test_url_resolution_is_deterministic() {
    let client = RestClient::new(&create_test_config(Environment::Sandbox));

    let version = ApiVersion::latest();
    let endpoint = Endpoint::new(client.environment(), &version, "contacts").with_id("con-42");

    assert_eq!(client.url_for(&endpoint), client.url_for(&endpoint));
}

// ============================================================================
// Verb Dispatch Tests
// ============================================================================

#[tokio::test]
async fn test_get_dispatches_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/contacts/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let version = ApiVersion::latest();
    let endpoint = Endpoint::new(client.environment(), &version, "contacts");

    let response = client.get(&endpoint).await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_post_dispatches_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.1/contacts/"))
        .and(body_json(serde_json::json!({"firstName": "John"})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let version = ApiVersion::latest();
    let endpoint = Endpoint::new(client.environment(), &version, "contacts");

    let response = client
        .post(&endpoint, r#"{"firstName":"John"}"#.to_string())
        .await
        .unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_put_dispatches_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2.1/contacts/con-42"))
        .and(body_json(serde_json::json!({"city": "Austin"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let version = ApiVersion::latest();
    let endpoint = Endpoint::new(client.environment(), &version, "contacts").with_id("con-42");

    let response = client
        .put(&endpoint, r#"{"city":"Austin"}"#.to_string())
        .await
        .unwrap();
    assert_eq!(response.code, 200);
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(rebilly_api::RestClient) = |_| {};
    let _: fn(rebilly_api::ResourceError) = |_| {};
    let _: fn(rebilly_api::Endpoint<'_>) = |_| {};
}

#[test]
fn test_types_exported_from_rest_module() {
    let _: fn(rebilly_api::rest::RestClient) = |_| {};
    let _: fn(rebilly_api::rest::ResourceError) = |_| {};
    let _: fn(rebilly_api::rest::resources::Contact) = |_| {};
    let _: fn(rebilly_api::rest::resources::Transaction) = |_| {};
}
