use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Host creation defaults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Deployment-specific defaults applied when creating hosts.
///
/// Group ids vary per Zabbix installation, so they are configuration
/// rather than built-in constants. A create request may still override
/// them with its own `groupids` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostsConfig {
    /// Host groups new hosts are placed into when the request does not
    /// name any.
    #[serde(default)]
    pub group_ids: Vec<String>,
    /// Port of the Zabbix agent interface registered for new hosts.
    #[serde(default = "d_agent_port")]
    pub agent_port: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            group_ids: Vec::new(),
            agent_port: d_agent_port(),
        }
    }
}

fn d_agent_port() -> String {
    "10050".into()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
