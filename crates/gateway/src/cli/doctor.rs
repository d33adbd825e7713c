use zg_domain::config::{Config, ConfigSeverity};
use zg_zabbix::{ZabbixApi, ZabbixClient};

/// Diagnostic checks for the `doctor` subcommand.
///
/// Checks run in dependency order: config first, then the endpoint,
/// then credentials (which only mean anything once the endpoint
/// answers). Returns `Ok(true)` when every check passed.
pub async fn run(config: &Config, config_path: &str) -> anyhow::Result<bool> {
    println!("zabbix-gateway doctor\n");

    let mut ok = report("config file", check_config_file(config_path));
    ok &= report("config values", check_config_values(config));

    let endpoint = check_endpoint(config).await;
    let endpoint_ok = endpoint.is_ok();
    ok &= report("zabbix endpoint", endpoint);

    if endpoint_ok {
        ok &= report("zabbix login", check_login(config).await);
    } else {
        println!("  skip zabbix login: endpoint unreachable");
    }

    println!();
    if ok {
        println!("All checks passed.");
    } else {
        println!("Some checks failed. Review the output above.");
    }
    Ok(ok)
}

// ── Individual checks ─────────────────────────────────────────────────
// Each check returns Ok(detail) or Err(reason); `report` renders it.

fn check_config_file(config_path: &str) -> Result<String, String> {
    if std::path::Path::new(config_path).exists() {
        Ok(config_path.to_owned())
    } else {
        Err(format!("{config_path} not found (running on defaults)"))
    }
}

fn check_config_values(config: &Config) -> Result<String, String> {
    let issues = config.validate();
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .map(|i| i.to_string())
        .collect();

    if !errors.is_empty() {
        return Err(errors.join("; "));
    }
    if issues.is_empty() {
        Ok("no issues".into())
    } else {
        Ok(format!("{} warning(s)", issues.len()))
    }
}

async fn check_endpoint(config: &Config) -> Result<String, String> {
    let client = ZabbixClient::new(&config.zabbix).map_err(|e| e.to_string())?;
    match client.api_version().await {
        Ok(version) => Ok(format!("{} (API {version})", config.zabbix.api_url)),
        Err(e) => Err(format!("{} ({e})", config.zabbix.api_url)),
    }
}

async fn check_login(config: &Config) -> Result<String, String> {
    let password = std::env::var(&config.zabbix.password_env)
        .ok()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| format!("{} is not set", config.zabbix.password_env))?;

    let client = ZabbixClient::new(&config.zabbix).map_err(|e| e.to_string())?;
    match client.login(&config.zabbix.username, &password).await {
        Ok(()) => Ok(format!("authenticated as {}", config.zabbix.username)),
        Err(e) => Err(format!("login as {} failed: {e}", config.zabbix.username)),
    }
}

// ── Reporting helper ──────────────────────────────────────────────────

fn report(name: &str, outcome: Result<String, String>) -> bool {
    match outcome {
        Ok(detail) => {
            println!("  ok   {name}: {detail}");
            true
        }
        Err(reason) => {
            println!("  FAIL {name}: {reason}");
            false
        }
    }
}
