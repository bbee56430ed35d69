//! Integration tests for resources/read against a mock upstream.

use reader_config::Config;
use reader_core::Session;
use reader_mcp::{JsonRpcRequest, McpServer};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer) -> McpServer {
    let mut config = Config::from_token(Some("test-token".to_string())).unwrap();
    config.base_url = mock.uri();
    McpServer::new(Session::new(&config).unwrap())
}

fn read_request(uri: &str) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: "resources/read".to_string(),
        params: Some(json!({ "uri": uri })),
    }
}

#[tokio::test]
async fn test_read_round_trips_upstream_body() {
    let mock = MockServer::start().await;
    let body = json!({
        "count": 2,
        "results": [{"id": "doc1"}, {"id": "doc2"}],
        "nextPageCursor": null
    });

    Mock::given(method("GET"))
        .and(path("/list/"))
        .and(header("authorization", "Token test-token"))
        .and(query_param("location", "later"))
        .and(query_param("updatedAfter", "2024-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock)
        .await;

    let uri = "reader://documents/location=later;after=2024-01-01T00:00:00Z";
    let resp = server_for(&mock)
        .handle_request(read_request(uri))
        .await
        .unwrap();

    assert!(resp.error.is_none(), "unexpected error: {:?}", resp.error);
    let result = resp.result.unwrap();
    let contents = &result["contents"][0];
    assert_eq!(contents["uri"], uri);
    assert_eq!(contents["mimeType"], "application/json");

    let text: Value = serde_json::from_str(contents["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, body);
}

#[tokio::test]
async fn test_read_with_unusable_filters_still_lists() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list/"))
        .and(query_param_is_missing("location"))
        .and(query_param_is_missing("updatedAfter"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"count": 0, "results": []})),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let resp = server_for(&mock)
        .handle_request(read_request(
            "reader://documents/location=trash;after=not-a-date",
        ))
        .await
        .unwrap();

    assert!(resp.error.is_none(), "unexpected error: {:?}", resp.error);
}

#[tokio::test]
async fn test_read_surfaces_upstream_http_error() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock)
        .await;

    let resp = server_for(&mock)
        .handle_request(read_request(
            "reader://documents/location=later;after=2024-01-01T00:00:00Z",
        ))
        .await
        .unwrap();

    assert!(resp.result.is_none());
    let error = resp.error.unwrap();
    assert_eq!(error.code, 1001);
    assert_eq!(error.data.unwrap()["status"], 401);
}

#[tokio::test]
async fn test_read_rejects_malformed_uri_without_calling_upstream() {
    let mock = MockServer::start().await;

    let resp = server_for(&mock)
        .handle_request(read_request("reader://highlights/location=later"))
        .await
        .unwrap();

    let error = resp.error.unwrap();
    assert_eq!(error.code, -32602);

    assert_eq!(mock.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_read_requires_uri_param() {
    let mock = MockServer::start().await;

    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: "resources/read".to_string(),
        params: None,
    };

    let resp = server_for(&mock).handle_request(request).await.unwrap();
    assert_eq!(resp.error.unwrap().code, -32602);
}
