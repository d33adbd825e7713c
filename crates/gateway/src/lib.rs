//! `zg-gateway` — REST façade over the Zabbix JSON-RPC API.
//!
//! Translates plain HTTP endpoints into JSON-RPC method calls through an
//! injected [`zg_zabbix::ZabbixApi`] handle. The gateway logs in once at
//! startup and relays raw RPC results to its callers unmodified.

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod state;
