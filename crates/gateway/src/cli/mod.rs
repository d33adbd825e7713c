pub mod config;
pub mod doctor;

use clap::{Parser, Subcommand};

use zg_domain::config::Config;
use zg_domain::{Error, Result};

/// zabbix-gateway — a REST façade over the Zabbix JSON-RPC API.
#[derive(Debug, Parser)]
#[command(name = "zabbix-gateway", version, about)]
pub struct Cli {
    /// Path to the configuration file. Takes precedence over the
    /// `ZG_CONFIG` environment variable.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the gateway server (default when no subcommand is given).
    Serve,
    /// Run diagnostic checks against the current configuration.
    Doctor,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Resolve the config file path and parse it.
///
/// Precedence: the `--config` flag, then `ZG_CONFIG`, then
/// `config.toml` in the working directory. A missing file is not an
/// error; the defaults stand in so `doctor` and `config show` still
/// work on a fresh machine.
pub fn load_config(flag: Option<&str>) -> Result<(Config, String)> {
    let config_path = flag
        .map(str::to_owned)
        .or_else(|| std::env::var("ZG_CONFIG").ok())
        .unwrap_or_else(|| "config.toml".into());

    if !std::path::Path::new(&config_path).exists() {
        return Ok((Config::default(), config_path));
    }

    let raw = std::fs::read_to_string(&config_path)?;
    let config = toml::from_str(&raw)
        .map_err(|e| Error::Config(format!("parsing {config_path}: {e}")))?;

    Ok((config, config_path))
}
