//! `zg-domain` — shared types for the Zabbix gateway.
//!
//! Holds the configuration model and the workspace-wide error type.
//! This crate does no I/O of its own.

pub mod config;
pub mod error;

pub use error::{Error, Result};
