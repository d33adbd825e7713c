pub mod health;
pub mod hosts;
pub mod version;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the full API router.
///
/// Every host endpoint maps 1:1 to one JSON-RPC call; `/v1/health` is
/// the only route that never touches the remote API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/health", get(health::health))
        .route("/v1/version", get(version::version))
        .route(
            "/v1/hosts",
            get(hosts::list_hosts)
                .post(hosts::create_host)
                .delete(hosts::delete_hosts),
        )
}

/// Build a standardized JSON error response: `{ "error": "<message>" }`.
pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

/// Relay an RPC outcome: the raw `result` value on success, or the
/// error message with an internal-error status.
pub(crate) fn relay(outcome: Result<serde_json::Value, zg_zabbix::RpcError>) -> Response {
    match outcome {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "RPC call failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
