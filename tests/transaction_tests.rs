//! Integration tests for the Transaction resource.
//!
//! These tests verify the refund action endpoint and body shapes, the
//! standard operations, and the validation behavior for missing
//! identifiers.

use rebilly_api::rest::resources::Transaction;
use rebilly_api::rest::{ResourceError, RestClient, RestResource};
use rebilly_api::{ApiKey, HostUrl, RebillyConfig};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client whose requests are routed to the mock server.
fn create_mock_client(server: &MockServer) -> RestClient {
    let config = RebillyConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();

    RestClient::new(&config)
}

// ============================================================================
// Refund Tests
// ============================================================================

#[tokio::test]
async fn test_refund_posts_amount_to_action_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.1/transactions/txn123/refund/"))
        .and(header("REB-APIKEY", "test-api-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"amount": "9.99"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"id":"txn124","amount":"9.99"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let transaction = Transaction {
        id: Some("txn123".to_string()),
        amount: Some("9.99".to_string()),
    };

    let response = transaction.refund(&client).await.unwrap();

    assert_eq!(response.code, 201);
    assert!(response.is_success());
}

#[tokio::test]
async fn test_refund_without_amount_sends_empty_object() {
    let mock_server = MockServer::start().await;

    // Full refund: the body must be exactly {}, with no null amount
    Mock::given(method("POST"))
        .and(path("/v2.1/transactions/txn123/refund/"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"txn125"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let transaction = Transaction::with_id("txn123");

    let response = transaction.refund(&client).await.unwrap();

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_refund_without_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let transaction = Transaction {
        id: None,
        amount: Some("9.99".to_string()),
    };

    let result = transaction.refund(&client).await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingId {
            resource: "transaction"
        })
    ));
    assert_eq!(
        result.unwrap_err().to_string(),
        "transaction id cannot be empty"
    );
}

#[tokio::test]
async fn test_refund_with_empty_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let transaction = Transaction::with_id("");

    let result = transaction.refund(&client).await;

    assert!(matches!(
        result,
        Err(ResourceError::MissingId {
            resource: "transaction"
        })
    ));
}

#[tokio::test]
async fn test_refund_passes_through_api_rejections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.1/transactions/txn123/refund/"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_string(r#"{"error":"amount exceeds remaining balance"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let transaction = Transaction {
        id: Some("txn123".to_string()),
        amount: Some("10000.00".to_string()),
    };

    // The rejection is a normal response, not an Err
    let response = transaction.refund(&client).await.unwrap();

    assert_eq!(response.code, 422);
    assert!(!response.is_success());
    assert_eq!(
        response.body,
        r#"{"error":"amount exceeds remaining balance"}"#
    );
}

// ============================================================================
// Standard Operation Tests
// ============================================================================

#[tokio::test]
async fn test_retrieve_gets_instance_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/transactions/txn123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id":"txn123","amount":"199.65"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let response = Transaction::with_id("txn123")
        .retrieve(&client)
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    let transaction: Transaction = serde_json::from_str(&response.body).unwrap();
    assert_eq!(transaction.amount.as_deref(), Some("199.65"));
}

#[tokio::test]
async fn test_list_all_gets_collection_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/transactions/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"id":"txn1","amount":"5.00"},{"id":"txn2","amount":"7.50"}]"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let response = Transaction::list_all(&client).await.unwrap();

    assert_eq!(response.code, 200);
    let listing = response.json().unwrap();
    assert_eq!(listing.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_action_ids_are_percent_encoded_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2.1/transactions/txn%20123/refund/"))
        .and(body_json(serde_json::json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let response = Transaction::with_id("txn 123").refund(&client).await.unwrap();
    assert_eq!(response.code, 201);
}
