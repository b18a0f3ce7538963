//! End-to-end coverage against a throwaway local HTTP JSON-RPC
//! server.

use std::time::Duration;

use axum::response::IntoResponse;
use axum::{Json, Router, routing::post};
use serde_json::{Value, json};

use ethcurl::{CallError, Client, Config, HttpTransport};

async fn rpc_handler(Json(req): Json<Value>) -> axum::response::Response {
    let id = req["id"].clone();
    match req["method"].as_str().unwrap_or_default() {
        "net_version" => Json(json!({"jsonrpc": "2.0", "id": id, "result": "1"})).into_response(),
        "test_echoParams" => {
            Json(json!({"jsonrpc": "2.0", "id": id, "result": req["params"]})).into_response()
        }
        "test_garbage" => "<html>oops</html>".into_response(),
        "test_empty" => Json(json!({"jsonrpc": "2.0", "id": id})).into_response(),
        "test_slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"jsonrpc": "2.0", "id": id, "result": null})).into_response()
        }
        method => Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": -32601, "message": format!("the method {method} does not exist")},
        }))
        .into_response(),
    }
}

async fn spawn_server() -> String {
    let app = Router::new().route("/", post(rpc_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(timeout: Option<Duration>) -> Client<HttpTransport> {
    let config = Config {
        fixed_id: Some(1),
        timeout,
        ..Config::default()
    };
    let transport = HttpTransport::new(timeout).unwrap();
    Client::new(transport, config)
}

#[tokio::test]
async fn test_successful_call() {
    let url = spawn_server().await;
    let result = client(None).call(&url, "net_version", &[]).await.unwrap();
    assert_eq!(result, br#""1""#);
}

#[tokio::test]
async fn test_params_are_coerced_on_the_wire() {
    let url = spawn_server().await;
    let args = vec!["255".to_string(), "true".to_string(), "latest".to_string()];
    let result = client(None)
        .call(&url, "test_echoParams", &args)
        .await
        .unwrap();
    assert_eq!(result, br#"["0xff",true,"latest"]"#);
}

#[tokio::test]
async fn test_protocol_error_from_server() {
    let url = spawn_server().await;
    let err = client(None)
        .call(&url, "eth_noSuchMethod", &[])
        .await
        .unwrap_err();
    match err {
        CallError::Rpc(e) => {
            assert_eq!(e.code, -32601);
            assert!(e.message.contains("eth_noSuchMethod"));
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_failure() {
    let url = spawn_server().await;
    let err = client(None).call(&url, "test_garbage", &[]).await.unwrap_err();
    assert!(matches!(err, CallError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_neither_result_nor_error_is_a_decode_failure() {
    let url = spawn_server().await;
    let err = client(None).call(&url, "test_empty", &[]).await.unwrap_err();
    assert!(matches!(err, CallError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_deadline_aborts_the_call() {
    let url = spawn_server().await;
    let err = client(Some(Duration::from_millis(100)))
        .call(&url, "test_slow", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, CallError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_failure() {
    // Nothing listens here.
    let err = client(Some(Duration::from_secs(1)))
        .call("http://127.0.0.1:9", "net_version", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, CallError::Transport(_)), "got {err:?}");
}
