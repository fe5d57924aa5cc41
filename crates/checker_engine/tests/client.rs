use std::time::Duration;

use checker_engine::{
    CheckError, CheckFailure, ClientHandle, ClientSettings, ReqwestScanClient, ScanClient,
    ScanEvent,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        endpoint: format!("{}/check", server.uri()),
        ..ClientSettings::default()
    }
}

fn safe_payload() -> serde_json::Value {
    json!({
        "status": "safe",
        "reason": "No threats detected",
        "url": "example.com",
        "details": {
            "blocklistProvider": { "errored": false, "matches": [] },
            "multiEngineProvider": {
                "errored": false,
                "stats": { "malicious": 0, "suspicious": 0, "harmless": 70, "undetected": 10 }
            }
        }
    })
}

#[tokio::test]
async fn check_posts_url_and_returns_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .and(body_json(json!({ "url": "example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(safe_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestScanClient::new(settings_for(&server)).expect("client");
    let payload = client.check("example.com").await.expect("check ok");
    assert_eq!(payload, safe_payload());
}

#[tokio::test]
async fn http_error_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "internal error" })),
        )
        .mount(&server)
        .await;

    let client = ReqwestScanClient::new(settings_for(&server)).expect("client");
    let err = client.check("example.com").await.unwrap_err();
    assert_eq!(
        err.kind,
        CheckFailure::HttpStatus {
            status: 500,
            server_message: Some("internal error".to_string()),
        }
    );
    assert_eq!(err.message, "internal error");
}

#[tokio::test]
async fn http_error_without_json_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = ReqwestScanClient::new(settings_for(&server)).expect("client");
    let err = client.check("example.com").await.unwrap_err();
    match err.kind {
        CheckFailure::HttpStatus {
            status,
            server_message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(server_message, None);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(err.message.contains("404"), "got {:?}", err.message);
}

#[tokio::test]
async fn malformed_success_body_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = ReqwestScanClient::new(settings_for(&server)).expect("client");
    let err = client.check("example.com").await.unwrap_err();
    assert_eq!(err.kind, CheckFailure::MalformedBody);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(safe_payload()),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReqwestScanClient::new(settings).expect("client");
    let err = client.check("example.com").await.unwrap_err();
    assert_eq!(err.kind, CheckFailure::Timeout);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let settings = ClientSettings {
        endpoint: "http://127.0.0.1:9/check".to_string(),
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
    };
    let client = ReqwestScanClient::new(settings).expect("client");
    let err = client.check("example.com").await.unwrap_err();
    assert!(
        matches!(err.kind, CheckFailure::Network | CheckFailure::Timeout),
        "got {:?}",
        err.kind
    );
}

#[test]
fn check_errors_are_real_errors() {
    let err = CheckError {
        kind: CheckFailure::Timeout,
        message: "deadline elapsed".to_string(),
    };
    assert_eq!(err.to_string(), "deadline elapsed");
    assert_eq!(err.kind.to_string(), "timeout");
    assert_eq!(
        CheckFailure::HttpStatus {
            status: 500,
            server_message: None,
        }
        .to_string(),
        "http status 500"
    );

    let _: &dyn std::error::Error = &err;
}

#[tokio::test]
async fn handle_delivers_completion_on_event_channel() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(safe_payload()))
        .mount(&server)
        .await;

    let (handle, event_rx) = ClientHandle::new(settings_for(&server)).expect("handle");
    handle.check("example.com");

    let event = tokio::task::spawn_blocking(move || {
        event_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("completion event")
    })
    .await
    .expect("join");

    let ScanEvent::CheckFinished { result } = event;
    assert_eq!(result.expect("check ok"), safe_payload());
}
