use httpmock::prelude::*;
use managed_records::{ErrorKind, RecordsClient, RecordsError, ReqwestTransport, RequestOptions};
use std::time::Duration;

fn page_of(n: usize, color: &str, disposition: &str) -> serde_json::Value {
    serde_json::Value::Array(
        (0..n)
            .map(|i| {
                serde_json::json!({
                    "id": format!("{}-{}", color, i),
                    "color": color,
                    "disposition": disposition
                })
            })
            .collect(),
    )
}

fn client_for(server: &MockServer) -> RecordsClient<ReqwestTransport> {
    RecordsClient::new(ReqwestTransport::default(), server.url("/records"))
}

#[tokio::test]
async fn test_second_page_with_color_filters() {
    let server = MockServer::start_async().await;

    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/records")
                .query_param("limit", "10")
                .query_param_exists("color[]")
                .query_param("offset", "10");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page_of(10, "red", "closed"));
        })
        .await;
    let probe_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/records")
                .query_param("limit", "10")
                .query_param_exists("color[]")
                .query_param("offset", "20");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(page_of(3, "blue", "open"));
        })
        .await;

    let options = RequestOptions::new()
        .with_colors(["red", "blue"])
        .with_page(2);
    let result = client_for(&server).retrieve(&options).await.unwrap();

    page_mock.assert_async().await;
    probe_mock.assert_async().await;

    assert_eq!(result.ids.len(), 10);
    assert!(result.open.is_empty());
    assert_eq!(result.closed_primary_count, 10);
    assert_eq!(result.previous_page, Some(1));
    assert_eq!(result.next_page, Some(3));
}

#[tokio::test]
async fn test_single_record_without_next_page() {
    let server = MockServer::start_async().await;

    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/records").query_param("offset", "0");
            then.status(200).json_body(serde_json::json!([
                {"id": "1", "color": "red", "disposition": "open"}
            ]));
        })
        .await;
    let probe_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/records").query_param("offset", "10");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let result = client_for(&server)
        .retrieve(&RequestOptions::default())
        .await
        .unwrap();

    page_mock.assert_async().await;
    probe_mock.assert_async().await;

    assert_eq!(result.ids, vec!["1"]);
    assert_eq!(result.open.len(), 1);
    assert_eq!(result.open[0].id, "1");
    assert!(result.open[0].is_primary);
    assert_eq!(result.closed_primary_count, 0);
    assert_eq!(result.previous_page, None);
    assert_eq!(result.next_page, None);
}

#[tokio::test]
async fn test_single_color_is_sent_as_scalar() {
    let server = MockServer::start_async().await;

    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/records")
                .query_param("colors", "brown")
                .query_param("offset", "0");
            then.status(200).json_body(serde_json::json!([
                {"id": 4, "color": "brown", "disposition": "closed"}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/records").query_param("offset", "10");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let result = client_for(&server)
        .retrieve(&RequestOptions::new().with_color("brown"))
        .await
        .unwrap();

    page_mock.assert_async().await;
    assert_eq!(result.ids, vec!["4"]);
    assert_eq!(result.closed_primary_count, 0);
}

#[tokio::test]
async fn test_server_error_resolves_to_none() {
    let server = MockServer::start_async().await;

    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/records").query_param("offset", "0");
            then.status(500);
        })
        .await;
    let probe_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/records").query_param("offset", "10");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let client = client_for(&server);
    assert!(client.retrieve(&RequestOptions::default()).await.is_none());

    let err = client
        .try_retrieve(&RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RecordsError::HttpStatus { status: 500, .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);

    assert_eq!(page_mock.hits_async().await, 2);
    assert_eq!(probe_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/records");
            then.status(200).body("this is not json");
        })
        .await;

    let err = client_for(&server)
        .try_retrieve(&RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_retrieve_from_overrides_endpoint() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/archive");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let client = RecordsClient::new(ReqwestTransport::default(), "http://127.0.0.1:1/unused");
    let result = client
        .retrieve_from(&RequestOptions::new().with_page(4), &server.url("/archive"))
        .await
        .unwrap();

    assert_eq!(mock.hits_async().await, 2);
    assert!(result.ids.is_empty());
    assert_eq!(result.previous_page, Some(3));
    assert_eq!(result.next_page, None);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
    let client = RecordsClient::new(transport, "http://127.0.0.1:1/records");

    let err = client
        .try_retrieve(&RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(client.retrieve(&RequestOptions::default()).await.is_none());
}

#[tokio::test]
async fn test_transport_with_custom_client() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/records")
                .header("user-agent", "managed-records-tests/1.0");
            then.status(200).json_body(serde_json::json!([
                {"id": "9", "color": "blue", "disposition": "closed"}
            ]));
        })
        .await;

    let http = reqwest::Client::builder()
        .user_agent("managed-records-tests/1.0")
        .build()
        .unwrap();
    let client = RecordsClient::new(ReqwestTransport::with_client(http), server.url("/records"));

    let result = client
        .try_retrieve(&RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(mock.hits_async().await, 2);
    assert_eq!(result.ids, vec!["9"]);
    assert_eq!(result.closed_primary_count, 1);
    assert_eq!(result.next_page, Some(2));
}
