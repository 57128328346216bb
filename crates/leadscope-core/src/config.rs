use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, PriorityTier};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default; only malformed values are rejected.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("LEADSCOPE_ENV", "development"))?;
    let log_level = or_default("LEADSCOPE_LOG_LEVEL", "info");
    let businesses_path = PathBuf::from(or_default(
        "LEADSCOPE_BUSINESSES_PATH",
        "./config/businesses.yaml",
    ));
    let leads_path = PathBuf::from(or_default("LEADSCOPE_LEADS_PATH", "./data/leads.csv"));
    let output_dir = PathBuf::from(or_default("LEADSCOPE_OUTPUT_DIR", "./data/reports"));
    let city = or_default("LEADSCOPE_CITY", "Monterrey");

    let fetch_timeout_secs = parse_u64("LEADSCOPE_FETCH_TIMEOUT_SECS", "10")?;
    if fetch_timeout_secs == 0 {
        return Err(invalid(
            "LEADSCOPE_FETCH_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let fetch_user_agent = or_default("LEADSCOPE_FETCH_USER_AGENT", "leadscope/0.1 (site-audit)");
    let max_concurrent_fetches = parse_usize("LEADSCOPE_MAX_CONCURRENT_FETCHES", "4")?;

    let task_threshold = or_default("LEADSCOPE_TASK_THRESHOLD", "HIGH")
        .parse::<PriorityTier>()
        .map_err(|reason| invalid("LEADSCOPE_TASK_THRESHOLD", reason))?;

    let digest_recipient = lookup("LEADSCOPE_DIGEST_RECIPIENT")
        .ok()
        .filter(|s| !s.trim().is_empty());

    Ok(AppConfig {
        env,
        log_level,
        businesses_path,
        leads_path,
        output_dir,
        city,
        fetch_timeout_secs,
        fetch_user_agent,
        max_concurrent_fetches,
        task_threshold,
        digest_recipient,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOPE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
