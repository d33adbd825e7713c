//! The method-call abstraction collaborators program against.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

/// Handle to the Zabbix JSON-RPC API.
///
/// The gateway handlers hold an `Arc<dyn ZabbixApi>` so the concrete
/// client is injected at startup and tests can substitute a stub.
#[async_trait]
pub trait ZabbixApi: Send + Sync {
    /// Authenticate and store the session token for subsequent calls.
    ///
    /// A fault from the remote (bad credentials) leaves any previously
    /// stored token untouched.
    async fn login(&self, username: &str, password: &str) -> Result<(), RpcError>;

    /// Invoke `method` with `params` and return the raw `result` value
    /// unmodified. The caller interprets its shape per method.
    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError>;

    /// `apiinfo.version` — the one method that requires no session token.
    async fn api_version(&self) -> Result<String, RpcError>;
}
