//! Typed parameter structs for the Zabbix methods the gateway uses.
//!
//! Each struct carries the serialization contract for one method so the
//! shapes are explicit and testable instead of being assembled as
//! untyped JSON at the call sites.

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// user.login
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parameters for `user.login`. The result is the session token string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginParams {
    pub user: String,
    pub password: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// host.get
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parameters for `host.get`. The result is an array of host objects
/// restricted to the requested output columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostGetParams {
    pub output: Vec<String>,
}

impl Default for HostGetParams {
    fn default() -> Self {
        Self {
            output: vec!["hostid".into(), "host".into()],
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// host.create
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parameters for `host.create`. The result carries the created ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostCreateParams {
    pub host: String,
    pub interfaces: Vec<HostInterface>,
    pub groups: Vec<GroupRef>,
}

/// One host interface definition.
///
/// Zabbix expects the numeric discriminators as numbers and the port as
/// a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostInterface {
    #[serde(rename = "type")]
    pub kind: u8,
    pub main: u8,
    pub useip: u8,
    pub ip: String,
    pub dns: String,
    pub port: String,
}

impl HostInterface {
    /// The default agent interface: type 1 (agent), main, addressed by
    /// IP with no DNS name.
    pub fn agent(ip: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            kind: 1,
            main: 1,
            useip: 1,
            ip: ip.into(),
            dns: String::new(),
            port: port.into(),
        }
    }
}

/// Reference to a host group by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupRef {
    pub groupid: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// host.delete
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parameters for `host.delete` — a bare array of host ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct HostDeleteParams(pub Vec<String>);

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn host_get_default_outputs_id_and_name() {
        let params = serde_json::to_value(HostGetParams::default()).unwrap();
        assert_eq!(params, json!({ "output": ["hostid", "host"] }));
    }

    #[test]
    fn agent_interface_serializes_with_renamed_type_field() {
        let iface = HostInterface::agent("10.0.0.5", "10050");
        let value = serde_json::to_value(&iface).unwrap();
        assert_eq!(
            value,
            json!({
                "type": 1,
                "main": 1,
                "useip": 1,
                "ip": "10.0.0.5",
                "dns": "",
                "port": "10050",
            })
        );
    }

    #[test]
    fn host_create_params_match_the_wire_shape() {
        let params = HostCreateParams {
            host: "server1".into(),
            interfaces: vec![HostInterface::agent("10.0.0.5", "10050")],
            groups: vec![GroupRef { groupid: "2".into() }],
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["host"], "server1");
        assert_eq!(value["groups"], json!([{ "groupid": "2" }]));
        assert_eq!(value["interfaces"][0]["useip"], 1);
    }

    #[test]
    fn host_delete_params_serialize_as_a_bare_array() {
        let params = HostDeleteParams(vec!["10".into(), "11".into()]);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!(["10", "11"]));
    }

    #[test]
    fn login_params_use_the_user_field_name() {
        let value = serde_json::to_value(LoginParams {
            user: "Admin".into(),
            password: "zabbix".into(),
        })
        .unwrap();
        assert_eq!(value, json!({ "user": "Admin", "password": "zabbix" }));
    }
}
