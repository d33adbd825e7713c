//! Remote API version probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::api::api_error;
use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /v1/version
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Relays `apiinfo.version`. Works before (and without) authentication.
pub async fn version(State(state): State<AppState>) -> Response {
    match state.zabbix.api_version().await {
        Ok(version) => Json(serde_json::json!({ "version": version })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "version probe failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
