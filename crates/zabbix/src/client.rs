//! `reqwest`-backed implementation of [`ZabbixApi`].

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::time::Duration;

use zg_domain::config::ZabbixConfig;
use zg_domain::error::{Error, Result};

use crate::api::ZabbixApi;
use crate::error::{from_reqwest, RpcError};
use crate::hosts::LoginParams;
use crate::protocol::{RpcRequest, RpcResponse};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A client for one Zabbix JSON-RPC endpoint.
///
/// Created once and reused for the lifetime of the gateway process. The
/// underlying `reqwest::Client` maintains a connection pool; every call
/// is a single POST bounded by the configured timeout, with no retries.
///
/// The session token is the only mutable state. The gateway dispatches
/// concurrent requests onto one client instance, so the slot is guarded
/// by an `RwLock`: `login` (once, at startup) takes the write side and
/// every call takes the read side.
#[derive(Debug)]
pub struct ZabbixClient {
    http: reqwest::Client,
    api_url: String,
    auth: RwLock<Option<String>>,
}

impl ZabbixClient {
    /// Build a new client from the shared `ZabbixConfig`.
    pub fn new(cfg: &ZabbixConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            api_url: cfg.api_url.clone(),
            auth: RwLock::new(None),
        })
    }

    /// Whether a login has succeeded on this client.
    pub fn is_authenticated(&self) -> bool {
        self.auth.read().is_some()
    }

    // ── request helpers ──────────────────────────────────────────────

    /// Envelope for an authenticated method call. The token is omitted
    /// entirely until a login has stored one, which is what the
    /// pre-auth methods expect.
    fn envelope(&self, method: &str, params: Value) -> RpcRequest {
        RpcRequest::new(method, params, self.auth.read().clone())
    }

    /// Send one envelope and decode the response body.
    ///
    /// The HTTP status is deliberately ignored: Zabbix reports 200 even
    /// for faults, and the `error` member is the only source of truth.
    async fn dispatch(&self, request: &RpcRequest) -> std::result::Result<RpcResponse, RpcError> {
        tracing::debug!(method = %request.method, "dispatching JSON-RPC call");

        let response = self
            .http
            .post(&self.api_url)
            .json(request)
            .send()
            .await
            .map_err(from_reqwest)?;

        let body = response.text().await.map_err(from_reqwest)?;
        serde_json::from_str(&body)
            .map_err(|e| RpcError::Decode(format!("{}: {e}: {body}", request.method)))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait]
impl ZabbixApi for ZabbixClient {
    async fn login(&self, username: &str, password: &str) -> std::result::Result<(), RpcError> {
        let params = serde_json::to_value(LoginParams {
            user: username.to_owned(),
            password: password.to_owned(),
        })?;

        // Login never carries a token, even when re-authenticating.
        let request = RpcRequest::new("user.login", params, None);
        let response = self.dispatch(&request).await?;

        let result = response
            .into_result()
            .map_err(|fault| RpcError::Auth { fault })?;

        let token: String = serde_json::from_value(result)
            .map_err(|e| RpcError::Decode(format!("user.login result is not a token string: {e}")))?;

        *self.auth.write() = Some(token);
        tracing::info!(user = %username, "authenticated against Zabbix API");
        Ok(())
    }

    async fn call(&self, method: &str, params: Value) -> std::result::Result<Value, RpcError> {
        let request = self.envelope(method, params);
        let response = self.dispatch(&request).await?;
        response
            .into_result()
            .map_err(|fault| RpcError::Remote { fault })
    }

    async fn api_version(&self) -> std::result::Result<String, RpcError> {
        let result = self.call("apiinfo.version", serde_json::json!({})).await?;
        serde_json::from_value(result).map_err(|e| {
            RpcError::Decode(format!("apiinfo.version result is not a version string: {e}"))
        })
    }
}
