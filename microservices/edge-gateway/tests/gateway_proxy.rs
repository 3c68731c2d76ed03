//! Edge gateway integration tests
//!
//! The gateway and a real dialog service are mounted in-process on ephemeral
//! ports, so these cover the full edge-to-dialog path over the wire.

use std::time::{Duration, Instant};

use serde_json::Value;

use edge_gateway::{create_router as gateway_router, DialogClient};
use socialite_core::USER_ID_HEADER;

async fn spawn_dialog_service() -> String {
    let app = dialog_service::create_router(dialog_service::DialogStore::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_gateway(dialog_url: &str, timeout: Duration) -> String {
    let client = DialogClient::new(dialog_url, timeout).unwrap();
    let app = gateway_router(client);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_end_to_end_send_and_list() {
    let dialog_url = spawn_dialog_service().await;
    let gateway = spawn_gateway(&dialog_url, Duration::from_secs(5)).await;
    let client = reqwest::Client::new();

    let send = client
        .post(format!("{gateway}/dialog/bob/send"))
        .header(USER_ID_HEADER, "alice")
        .json(&serde_json::json!({ "text": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(send.status(), 200);
    let ack: Value = send.json().await.unwrap();
    assert_eq!(ack["message"], "Message sent successfully");

    let as_alice: Vec<Value> = client
        .get(format!("{gateway}/dialog/bob/list"))
        .header(USER_ID_HEADER, "alice")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let as_bob: Vec<Value> = client
        .get(format!("{gateway}/dialog/alice/list"))
        .header(USER_ID_HEADER, "bob")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for messages in [&as_alice, &as_bob] {
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["from"], "alice");
        assert_eq!(messages[0]["to"], "bob");
        assert_eq!(messages[0]["text"], "hello");
    }
}

#[tokio::test]
async fn test_upstream_validation_errors_pass_through() {
    let dialog_url = spawn_dialog_service().await;
    let gateway = spawn_gateway(&dialog_url, Duration::from_secs(5)).await;
    let client = reqwest::Client::new();

    // Self-send: the dialog service's 400 and body come back verbatim.
    let resp = client
        .post(format!("{gateway}/dialog/alice/send"))
        .header(USER_ID_HEADER, "alice")
        .json(&serde_json::json!({ "text": "hi me" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Cannot send message to yourself");

    // Empty text as well.
    let resp = client
        .post(format!("{gateway}/dialog/bob/send"))
        .header(USER_ID_HEADER, "alice")
        .json(&serde_json::json!({ "text": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_gateway_rejects_missing_identity_before_proxying() {
    // No dialog service at all: a missing header must still come back 401,
    // proving the gateway rejects before it ever dials upstream.
    let gateway = spawn_gateway("http://127.0.0.1:9", Duration::from_secs(5)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{gateway}/dialog/bob/send"))
        .json(&serde_json::json!({ "text": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_unreachable_dialog_service_is_503() {
    // Port 9 (discard) is not listening; connection is refused immediately.
    let gateway = spawn_gateway("http://127.0.0.1:9", Duration::from_secs(1)).await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let resp = client
        .post(format!("{gateway}/dialog/bob/send"))
        .header(USER_ID_HEADER, "alice")
        .json(&serde_json::json!({ "text": "hello" }))
        .send()
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Dialog service unavailable");
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
}

#[tokio::test]
async fn test_hung_dialog_service_times_out_to_503() {
    // A listener that accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                // Hold the connection open without responding.
                let _socket = socket;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });

    let timeout = Duration::from_millis(500);
    let gateway = spawn_gateway(&format!("http://{addr}"), timeout).await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let resp = client
        .get(format!("{gateway}/dialog/bob/list"))
        .header(USER_ID_HEADER, "alice")
        .send()
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(resp.status(), 503);
    assert!(elapsed >= timeout, "returned before the timeout: {elapsed:?}");
    assert!(
        elapsed < timeout + Duration::from_secs(2),
        "took {elapsed:?}, well past the timeout bound"
    );
}

#[tokio::test]
async fn test_dialogs_listing_via_gateway() {
    let dialog_url = spawn_dialog_service().await;
    let gateway = spawn_gateway(&dialog_url, Duration::from_secs(5)).await;
    let client = reqwest::Client::new();

    for (from, to, text) in [("alice", "bob", "one"), ("carol", "alice", "two")] {
        let resp = client
            .post(format!("{gateway}/dialog/{to}/send"))
            .header(USER_ID_HEADER, from)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let dialogs: Value = client
        .get(format!("{gateway}/dialogs"))
        .header(USER_ID_HEADER, "alice")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let map = dialogs.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("alice_bob"));
    assert!(map.contains_key("alice_carol"));
}

#[tokio::test]
async fn test_readiness_tracks_dialog_dependency() {
    let dialog_url = spawn_dialog_service().await;
    let gateway = spawn_gateway(&dialog_url, Duration::from_secs(1)).await;

    let ready: Value = reqwest::get(format!("{gateway}/ready"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ready["ready"], true);
    assert_eq!(ready["dependencies"][0]["name"], "dialog-service");
    assert_eq!(ready["dependencies"][0]["available"], true);

    let dark_gateway = spawn_gateway("http://127.0.0.1:9", Duration::from_secs(1)).await;
    let not_ready: Value = reqwest::get(format!("{dark_gateway}/ready"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(not_ready["ready"], false);
    assert_eq!(not_ready["dependencies"][0]["available"], false);
}
