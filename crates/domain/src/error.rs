/// Shared error type used across the gateway crates.
///
/// Transport and remote-fault details live in the client crate's own
/// error enum; they collapse into the coarse variants here when they
/// cross a crate boundary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("auth: {0}")]
    Auth(String),

    #[error("zabbix: {0}")]
    Zabbix(String),
}

pub type Result<T> = std::result::Result<T, Error>;
