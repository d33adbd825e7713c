use std::sync::Arc;

use zg_domain::config::Config;
use zg_zabbix::ZabbixApi;

/// Shared application state passed to all API handlers.
///
/// The Zabbix client is a trait object injected at startup — handlers
/// never reach for a global, and tests substitute a stub implementation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub zabbix: Arc<dyn ZabbixApi>,
}
