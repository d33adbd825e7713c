//! Error taxonomy for the RPC client.

use crate::protocol::RpcFault;

/// Errors surfaced by [`crate::ZabbixClient`].
///
/// `Http`, `Timeout`, and `Decode` are transport-class failures: the
/// conversation with the endpoint never produced a usable envelope.
/// `Auth` and `Remote` are faults reported by Zabbix itself inside an
/// HTTP-200 body. Nothing is ever retried; every error propagates to
/// the immediate caller.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("zabbix transport: {0}")]
    Http(String),

    #[error("zabbix request timed out: {0}")]
    Timeout(String),

    #[error("zabbix response decode: {0}")]
    Decode(String),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("zabbix login rejected: {fault}")]
    Auth { fault: RpcFault },

    #[error("zabbix error: {fault}")]
    Remote { fault: RpcFault },
}

/// Convert a `reqwest::Error` into an [`RpcError`].
///
/// Timeouts become `Timeout`; everything else becomes `Http`.
pub(crate) fn from_reqwest(e: reqwest::Error) -> RpcError {
    if e.is_timeout() {
        RpcError::Timeout(e.to_string())
    } else {
        RpcError::Http(e.to_string())
    }
}

impl From<RpcError> for zg_domain::Error {
    fn from(e: RpcError) -> Self {
        match e {
            RpcError::Http(msg) => zg_domain::Error::Http(msg),
            RpcError::Timeout(msg) => zg_domain::Error::Timeout(msg),
            auth @ RpcError::Auth { .. } => zg_domain::Error::Auth(auth.to_string()),
            other => zg_domain::Error::Zabbix(other.to_string()),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_display_carries_the_remote_message() {
        let err = RpcError::Auth {
            fault: RpcFault {
                code: -32602,
                message: "Invalid params".into(),
                data: "Incorrect credentials".into(),
            },
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Invalid params"));
        assert!(rendered.contains("Incorrect credentials"));
    }

    #[test]
    fn auth_error_maps_to_domain_auth() {
        let err = RpcError::Auth {
            fault: RpcFault {
                code: -32602,
                message: "Invalid params".into(),
                data: String::new(),
            },
        };
        assert!(matches!(zg_domain::Error::from(err), zg_domain::Error::Auth(_)));
    }

    #[test]
    fn timeout_maps_to_domain_timeout() {
        let err = RpcError::Timeout("deadline elapsed".into());
        assert!(matches!(
            zg_domain::Error::from(err),
            zg_domain::Error::Timeout(_)
        ));
    }
}
