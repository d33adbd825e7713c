//! `zg-zabbix` — JSON-RPC 2.0 client for the Zabbix API.
//!
//! This crate provides:
//! - The JSON-RPC wire envelope types (request, response, fault).
//! - Typed parameter structs for the host management methods.
//! - A [`ZabbixApi`] trait so collaborators depend on an injected handle
//!   rather than a concrete client (and tests can use a stub).
//! - The `reqwest`-backed [`ZabbixClient`]: logs in once, caches the
//!   session token, and forwards method calls over HTTP POST.
//!
//! # Usage
//!
//! ```rust,ignore
//! use zg_zabbix::{ZabbixApi, ZabbixClient};
//!
//! let client = ZabbixClient::new(&config.zabbix)?;
//! client.login("Admin", &password).await?;
//!
//! let hosts = client
//!     .call("host.get", serde_json::json!({ "output": ["hostid", "host"] }))
//!     .await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod hosts;
pub mod protocol;

// Re-exports for convenience.
pub use api::ZabbixApi;
pub use client::ZabbixClient;
pub use error::RpcError;
pub use protocol::{RpcFault, RpcRequest, RpcResponse};
