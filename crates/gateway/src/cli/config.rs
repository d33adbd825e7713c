use zg_domain::config::{Config, ConfigSeverity};
use zg_domain::{Error, Result};

/// Validate the config and print one line per issue.
///
/// Warnings are tolerated; returns `false` only when at least one
/// error-severity issue exists.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = config.validate();
    if issues.is_empty() {
        println!("{config_path}: OK");
        return true;
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for issue in &issues {
        println!("{issue}");
        match issue.severity {
            ConfigSeverity::Error => errors += 1,
            ConfigSeverity::Warning => warnings += 1,
        }
    }

    println!("\n{config_path}: {errors} error(s), {warnings} warning(s)");
    errors == 0
}

/// Dump the resolved config (all defaults filled in) as TOML.
///
/// The config model only ever holds the NAME of the environment
/// variable carrying the Zabbix password, so the dump contains no
/// secrets.
pub fn show(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("serializing config: {e}")))?;
    print!("{rendered}");
    Ok(())
}
