//! Host management endpoints.
//!
//! Each handler decodes its request body, builds the typed method
//! params, makes exactly one RPC call, and relays the raw result.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Response};
use serde::Deserialize;
use serde_json::Value;

use zg_domain::config::HostsConfig;
use zg_zabbix::hosts::{GroupRef, HostCreateParams, HostDeleteParams, HostGetParams, HostInterface};

use crate::api::{api_error, relay};
use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Deserialize)]
pub struct CreateHostRequest {
    pub host: String,
    pub ip: String,
    /// Agent port override; falls back to `[hosts] agent_port`.
    #[serde(default)]
    pub port: Option<String>,
    /// Host group override; falls back to `[hosts] group_ids`.
    #[serde(default)]
    pub groupids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteHostsRequest {
    pub hostids: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /v1/hosts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn list_hosts(State(state): State<AppState>) -> Response {
    let params = match serde_json::to_value(HostGetParams::default()) {
        Ok(v) => v,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    relay(state.zabbix.call("host.get", params).await)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /v1/hosts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn create_host(
    State(state): State<AppState>,
    Json(req): Json<CreateHostRequest>,
) -> Response {
    let params = match build_create_params(&req, &state.config.hosts) {
        Ok(p) => p,
        Err(message) => return api_error(StatusCode::BAD_REQUEST, message),
    };
    let params = match serde_json::to_value(&params) {
        Ok(v) => v,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    relay(state.zabbix.call("host.create", params).await)
}

/// Resolve the request against the configured creation defaults.
///
/// Group ids come from the request when present, otherwise from config;
/// ending up with none at all is a caller error, not a baked-in value.
fn build_create_params(
    req: &CreateHostRequest,
    defaults: &HostsConfig,
) -> Result<HostCreateParams, String> {
    if req.host.trim().is_empty() {
        return Err("host must not be empty".into());
    }
    if req.ip.trim().is_empty() {
        return Err("ip must not be empty".into());
    }

    let group_ids = if req.groupids.is_empty() {
        defaults.group_ids.clone()
    } else {
        req.groupids.clone()
    };
    if group_ids.is_empty() {
        return Err("no groupids in request and no [hosts] group_ids configured".into());
    }

    let port = req.port.clone().unwrap_or_else(|| defaults.agent_port.clone());

    Ok(HostCreateParams {
        host: req.host.clone(),
        interfaces: vec![HostInterface::agent(req.ip.clone(), port)],
        groups: group_ids
            .into_iter()
            .map(|groupid| GroupRef { groupid })
            .collect(),
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DELETE /v1/hosts
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn delete_hosts(
    State(state): State<AppState>,
    Json(req): Json<DeleteHostsRequest>,
) -> Response {
    if req.hostids.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "hostids must not be empty");
    }
    let params = match serde_json::to_value(HostDeleteParams(req.hostids)) {
        Ok(v) => v,
        Err(e) => return api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    relay(state.zabbix.call("host.delete", params).await)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
