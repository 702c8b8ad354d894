//! Integration tests for error classification
//!
//! These tests verify that every failure mode maps to its own error
//! variant: server rejections keep their status, transport failures stay
//! distinguishable from not-found, and local rejections never reach the
//! wire.

use std::time::Duration;

use pdbe_client::{CancellationToken, ClientConfig, Endpoint, PdbeClient, PdbeError};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::create_mock_client;

// ================================================================================================
// Server Rejection Tests
// ================================================================================================

#[tokio::test]
#[traced_test]
async fn test_404_maps_to_entry_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/0xxx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_summary("0xxx").await.unwrap_err();

    match err {
        PdbeError::EntryNotFound { pdb_id } => assert_eq!(pdb_id, "0xxx"),
        other => panic!("Expected EntryNotFound, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_404_wins_over_error_body() {
    let mock_server = MockServer::start().await;

    // The live server attaches a JSON error document to 404s; the status
    // is classified before the body is read.
    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/asdasdasd"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Invalid format"})),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_summary("asdasdasd").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
#[traced_test]
async fn test_unknown_chain_on_valid_entry_is_not_found() {
    let mock_server = MockServer::start().await;

    // Only chain A is mounted; any other chain id falls through to the
    // server's 404, same as the live API for a chain the entry lacks.
    Mock::given(method("GET"))
        .and(path("/pdb/entry/polymer_coverage/1cbs/chain/A"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"1cbs": {"molecules": []}})),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch_observed_ranges_in_chain("1cbs", "ZZ")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, PdbeError::EntryNotFound { ref pdb_id } if pdb_id == "1cbs"));
}

#[tokio::test]
#[traced_test]
async fn test_500_maps_to_api_error_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/molecules/1cbs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_molecules("1cbs").await.unwrap_err();

    match err {
        PdbeError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_other_client_errors_keep_their_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/files/1cbs"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_files("1cbs").await.unwrap_err();

    assert!(matches!(err, PdbeError::ApiError { status: 403, .. }));
    assert!(!err.is_not_found());
    assert!(!err.is_transport());
}

// ================================================================================================
// Body Decoding Tests
// ================================================================================================

#[tokio::test]
#[traced_test]
async fn test_empty_success_body_maps_to_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/1cbs"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_summary("1cbs").await.unwrap_err();

    assert!(matches!(err, PdbeError::EmptyResponse { ref pdb_id } if pdb_id == "1cbs"));
}

#[tokio::test]
#[traced_test]
async fn test_invalid_utf8_maps_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/1cbs"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0x01, 0x02]))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_summary("1cbs").await.unwrap_err();

    assert!(matches!(err, PdbeError::DecodeError(_)));
}

#[tokio::test]
#[traced_test]
async fn test_malformed_json_maps_to_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/1cbs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"1cbs\": [unterminated"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.fetch_summary("1cbs").await.unwrap_err();

    assert!(matches!(err, PdbeError::JsonError(_)));
}

// ================================================================================================
// Transport Failure Tests
// ================================================================================================

#[tokio::test]
#[traced_test]
async fn test_connection_refused_is_a_transport_failure() {
    // A non-pooled server actually releases its port on drop; pooled
    // `MockServer::start()` keeps the listener bound and answers 404.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let config = ClientConfig::new().with_base_url(uri);
    let client = PdbeClient::with_config(config);
    let err = client.fetch_summary("1cbs").await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_not_found());
}

#[tokio::test]
#[traced_test]
async fn test_timeout_is_a_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/1cbs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"1cbs": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = PdbeClient::with_config(config);

    let err = client.fetch_summary("1cbs").await.unwrap_err();

    assert!(err.is_transport());
    match err {
        PdbeError::RequestError(inner) => assert!(inner.is_timeout()),
        other => panic!("Expected RequestError, got {other:?}"),
    }
}

// ================================================================================================
// Cancellation Tests
// ================================================================================================

#[tokio::test]
#[traced_test]
async fn test_cancellation_mid_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdb/entry/summary/1cbs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"1cbs": []}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let token = CancellationToken::new();

    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let err = client
        .fetch_with_cancellation(Endpoint::Summary, "1cbs", None, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PdbeError::Cancelled));
}

#[tokio::test]
#[traced_test]
async fn test_pre_cancelled_token_sends_nothing() {
    let mock_server = MockServer::start().await;

    let client = create_mock_client(&mock_server);
    let token = CancellationToken::new();
    token.cancel();

    let err = client
        .fetch_with_cancellation(Endpoint::Summary, "1cbs", None, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, PdbeError::Cancelled));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 0);
}

// ================================================================================================
// Local Rejection Tests
// ================================================================================================

#[tokio::test]
#[traced_test]
async fn test_chain_misuse_is_rejected_before_any_request() {
    let mock_server = MockServer::start().await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch_in_chain(Endpoint::Summary, "1cbs", "A")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PdbeError::ChainNotSupported {
            endpoint: Endpoint::Summary
        }
    ));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_every_entry_level_endpoint_rejects_chain_queries() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    for endpoint in Endpoint::ALL {
        if endpoint.supports_chain() {
            continue;
        }
        let err = client
            .fetch_in_chain(endpoint, "1cbs", "A")
            .await
            .unwrap_err();
        assert!(
            matches!(err, PdbeError::ChainNotSupported { .. }),
            "{endpoint} should reject chain-scoped queries"
        );
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 0);
}
