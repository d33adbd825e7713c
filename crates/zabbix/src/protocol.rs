//! JSON-RPC 2.0 wire types for the Zabbix API.
//!
//! Zabbix always answers with HTTP 200 and reports failures only through
//! the `error` member of the response body, so nothing here looks at
//! HTTP status codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version sent in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id used for every call.
///
/// Calls are strictly synchronous request/response over one connection,
/// so the id carries no correlation information and never needs to vary.
pub const REQUEST_ID: u64 = 1;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Request
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A JSON-RPC 2.0 request envelope.
///
/// `auth` holds the session token and is omitted from the serialized
/// body entirely when absent — `user.login` and `apiinfo.version` are
/// called before any token exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Value, auth: Option<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.into(),
            method: method.into(),
            params,
            auth,
            id: REQUEST_ID,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Response
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A JSON-RPC 2.0 response envelope.
///
/// Exactly one of `result`/`error` is populated per the remote contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcFault>,
    #[serde(default)]
    pub id: u64,
}

impl RpcResponse {
    /// Check if the response carries a fault.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Extract the raw result value, treating a populated `error` member
    /// as authoritative.
    pub fn into_result(self) -> Result<Value, RpcFault> {
        if let Some(fault) = self.error {
            Err(fault)
        } else {
            Ok(self.result.unwrap_or(Value::Null))
        }
    }
}

/// The structured fault object inside a failed response.
///
/// Zabbix puts the human-readable summary in `message` and the detail
/// (e.g. which parameter was rejected) in `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: String,
}

impl std::fmt::Display for RpcFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.data.is_empty() {
            write!(f, "{} (code {})", self.message, self.code)
        } else {
            write!(f, "{} ({}) (code {})", self.message, self.data, self.code)
        }
    }
}

impl std::error::Error for RpcFault {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
