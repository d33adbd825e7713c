//! Integration tests for `ZabbixClient` against a stub JSON-RPC endpoint.
//!
//! The stub is a small axum server bound to an ephemeral port. It records
//! every request body so the tests can assert on what actually went over
//! the wire (auth field presence, method names, params).

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use zg_domain::config::ZabbixConfig;
use zg_zabbix::{RpcError, ZabbixApi, ZabbixClient};

const TOKEN: &str = "0424bd59b807674191e7d77572075f33";

// ── stub endpoint ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubState {
    fn recorded(&self) -> Vec<Value> {
        self.requests.lock().clone()
    }
}

async fn stub_handler(State(state): State<StubState>, Json(body): Json<Value>) -> Json<Value> {
    state.requests.lock().push(body.clone());

    let method = body["method"].as_str().unwrap_or_default();
    let reply = match method {
        "user.login" => {
            if body["params"]["password"] == "zabbix" {
                json!({ "jsonrpc": "2.0", "result": TOKEN, "id": 1 })
            } else {
                json!({
                    "jsonrpc": "2.0",
                    "error": {
                        "code": -32602,
                        "message": "Invalid params",
                        "data": "Incorrect credentials",
                    },
                    "id": 1,
                })
            }
        }
        "apiinfo.version" => json!({ "jsonrpc": "2.0", "result": "6.0.0", "id": 1 }),
        "host.get" => json!({
            "jsonrpc": "2.0",
            "result": [{ "hostid": "1", "host": "server1" }],
            "id": 1,
        }),
        "host.delete" => json!({
            "jsonrpc": "2.0",
            "result": { "hostids": ["10", "11"] },
            "id": 1,
        }),
        other => json!({
            "jsonrpc": "2.0",
            "error": { "code": -32601, "message": "Method not found", "data": other },
            "id": 1,
        }),
    };
    Json(reply)
}

async fn spawn_stub() -> (SocketAddr, StubState) {
    let state = StubState::default();
    let app = Router::new()
        .route("/api_jsonrpc.php", post(stub_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

fn client_for(addr: SocketAddr) -> ZabbixClient {
    let cfg = ZabbixConfig {
        api_url: format!("http://{addr}/api_jsonrpc.php"),
        username: "Admin".into(),
        timeout_ms: 2_000,
        ..ZabbixConfig::default()
    };
    ZabbixClient::new(&cfg).unwrap()
}

// ── login & session token ─────────────────────────────────────────────

#[tokio::test]
async fn login_stores_token_and_later_calls_send_it() {
    let (addr, stub) = spawn_stub().await;
    let client = client_for(addr);

    client.login("Admin", "zabbix").await.unwrap();
    assert!(client.is_authenticated());

    client
        .call("host.get", json!({ "output": ["hostid", "host"] }))
        .await
        .unwrap();

    let requests = stub.recorded();
    assert_eq!(requests.len(), 2);
    // The login envelope itself must not carry an auth field.
    assert!(requests[0].get("auth").is_none());
    // The follow-up call carries the stored token.
    assert_eq!(requests[1]["auth"], TOKEN);
}

#[tokio::test]
async fn rejected_login_is_an_auth_error_and_stores_no_token() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let err = client.login("admin", "wrong").await.unwrap_err();
    match err {
        RpcError::Auth { fault } => {
            assert_eq!(fault.code, -32602);
            assert!(fault.message.contains("Invalid params"));
            assert_eq!(fault.data, "Incorrect credentials");
        }
        other => panic!("expected Auth error, got {other:?}"),
    }
    assert!(!client.is_authenticated());
}

// ── call passthrough ──────────────────────────────────────────────────

#[tokio::test]
async fn host_get_result_is_relayed_unmodified() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let result = client
        .call("host.get", json!({ "output": ["hostid", "host"] }))
        .await
        .unwrap();
    assert_eq!(result, json!([{ "hostid": "1", "host": "server1" }]));
}

#[tokio::test]
async fn host_delete_result_is_relayed_unmodified() {
    let (addr, stub) = spawn_stub().await;
    let client = client_for(addr);

    let result = client.call("host.delete", json!(["10", "11"])).await.unwrap();
    assert_eq!(result, json!({ "hostids": ["10", "11"] }));

    // Params went out as the bare array Zabbix expects.
    assert_eq!(stub.recorded()[0]["params"], json!(["10", "11"]));
}

#[tokio::test]
async fn remote_fault_is_surfaced_verbatim() {
    let (addr, _stub) = spawn_stub().await;
    let client = client_for(addr);

    let err = client.call("no.such.method", json!({})).await.unwrap_err();
    match err {
        RpcError::Remote { fault } => {
            assert_eq!(fault.code, -32601);
            assert_eq!(fault.message, "Method not found");
            assert_eq!(fault.data, "no.such.method");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

// ── pre-auth version probe ────────────────────────────────────────────

#[tokio::test]
async fn api_version_needs_no_login() {
    let (addr, stub) = spawn_stub().await;
    let client = client_for(addr);

    let version = client.api_version().await.unwrap();
    assert_eq!(version, "6.0.0");

    // No token existed, so no auth field went over the wire.
    assert!(stub.recorded()[0].get("auth").is_none());
}

// ── transport failures ────────────────────────────────────────────────

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind a port, then free it so connecting is refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.call("host.get", json!({})).await.unwrap_err();
    assert!(matches!(err, RpcError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    async fn garbage() -> &'static str {
        "<html>proxy error</html>"
    }
    let app = Router::new().route("/api_jsonrpc.php", post(garbage));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(addr);
    let err = client.call("host.get", json!({})).await.unwrap_err();
    assert!(matches!(err, RpcError::Decode(_)), "got {err:?}");
}
