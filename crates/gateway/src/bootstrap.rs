//! Startup wiring: config → client → login.

use std::sync::Arc;

use anyhow::Context;

use zg_domain::config::Config;
use zg_zabbix::{ZabbixApi, ZabbixClient};

use crate::state::AppState;

/// Read the Zabbix password from the environment variable named by the
/// config. The password never lives in the config file itself.
pub fn resolve_password(config: &Config) -> anyhow::Result<String> {
    std::env::var(&config.zabbix.password_env).with_context(|| {
        format!(
            "environment variable {} is not set (it must hold the Zabbix password)",
            config.zabbix.password_env
        )
    })
}

/// Build the shared state: construct the client and perform the startup
/// login. A rejected login or unreachable endpoint is fatal — the
/// gateway must not come up without a session token.
pub async fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    let password = resolve_password(&config)?;

    let client = ZabbixClient::new(&config.zabbix).context("building Zabbix client")?;

    client
        .login(&config.zabbix.username, &password)
        .await
        .with_context(|| format!("logging in to {}", config.zabbix.api_url))?;

    Ok(AppState {
        config,
        zabbix: Arc::new(client),
    })
}
