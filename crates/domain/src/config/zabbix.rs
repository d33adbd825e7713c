use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Zabbix API
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Connection settings for the remote Zabbix JSON-RPC endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZabbixConfig {
    /// Full URL of the JSON-RPC endpoint, e.g.
    /// `http://zabbix.example.com/zabbix/api_jsonrpc.php`.
    #[serde(default)]
    pub api_url: String,
    /// Account used for the startup login.
    #[serde(default)]
    pub username: String,
    /// Environment variable holding the account password.
    /// The password itself never lives in the config file.
    #[serde(default = "d_password_env")]
    pub password_env: String,
    /// Request timeout for every JSON-RPC call. There is exactly one
    /// bounded timeout; nothing is retried.
    #[serde(default = "d_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ZabbixConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            username: String::new(),
            password_env: d_password_env(),
            timeout_ms: d_timeout_ms(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_password_env() -> String {
    "ZG_ZABBIX_PASSWORD".into()
}
fn d_timeout_ms() -> u64 {
    30_000
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
