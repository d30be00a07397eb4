//! Integration tests for `MikrusClient` against a local HTTP stub

use std::time::Duration;

use mikrus_core::{ApiError, MikrusClient};
use secrecy::SecretString;
use tokio::net::TcpListener;

use super::stub::serve_once;

fn client(base_url: &str) -> MikrusClient {
    MikrusClient::with_timeout(
        SecretString::from("k3y/with+chars".to_string()),
        "a123",
        Duration::from_secs(5),
    )
    .unwrap()
    .with_base_url(base_url)
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn info_posts_form_encoded_credentials() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"server_id":"a123","server_name":"test","expires":"2025-01-01 00:00:00","param_ram":"1024","param_disk":"10","lastlog_panel":"2024-06-01 12:00:00","mikrus_pro":"nie"}"#,
    )
    .await;

    let server_info = client(&base_url).info().await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line, "POST /info HTTP/1.1");
    assert_eq!(
        captured.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(captured.body, "key=k3y%2Fwith%2Bchars&srv=a123");
    assert_eq!(server_info.server_id, "a123");
    assert_eq!(server_info.server_name.as_deref(), Some("test"));
    assert_eq!(server_info.param_ram, "1024");
}

#[tokio::test]
async fn servers_uses_polish_endpoint_name() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"server_id":"a123","server_name":"one","expires":"2025-01-01","param_ram":"1024","param_disk":"10"},
            {"server_id":"b456","server_name":"two","expires":"2025-02-01","param_ram":"2048","param_disk":"20"}]"#,
    )
    .await;

    let servers = client(&base_url).servers().await.unwrap();
    let captured = server.await.unwrap();

    assert_eq!(captured.request_line, "POST /serwery HTTP/1.1");
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].server_id, "b456");
}

#[tokio::test]
async fn logs_decode_entries() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"id":"1","server_id":"a123","task":"restart","when_created":"2024-06-01 12:00:00","when_done":"2024-06-01 12:00:05","output":"ok"}]"#,
    )
    .await;

    let logs = client(&base_url).logs().await.unwrap();
    server.await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].task, "restart");
    assert_eq!(logs[0].output, "ok");
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn non_200_status_is_status_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", "boom").await;

    let err = client(&base_url).stats().await.unwrap_err();
    server.await.unwrap();

    match err {
        ApiError::Status { verb, status, body } => {
            assert_eq!(verb, "stats");
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_body_with_200_is_remote_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"error":"Niepoprawny klucz API"}"#).await;

    let err = client(&base_url).info().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ApiError::Remote { verb: "info", ref message } if message == "Niepoprawny klucz API"));
}

#[tokio::test]
async fn unexpected_json_is_decode_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"unexpected": true}"#).await;

    let err = client(&base_url).logs().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ApiError::Decode { verb: "logs", .. }));
    assert!(!err.to_string().contains("k3y"));
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&base_url).info().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
