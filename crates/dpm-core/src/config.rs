use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::app_config::{AppConfig, Environment};
use crate::faq::{load_faq_catalog, FaqCatalog};
use crate::ConfigError;

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
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let env = parse_environment(&or_default("DPM_ENV", "development"));
    let log_level = or_default("DPM_LOG_LEVEL", "info");
    let faq_path = optional("DPM_FAQ_PATH").map(PathBuf::from);

    let default_regular_admission_cost = optional("DPM_REGULAR_ADMISSION_COST")
        .map(|raw| {
            let cost = Decimal::from_str(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar {
                var: "DPM_REGULAR_ADMISSION_COST".to_string(),
                reason: e.to_string(),
            })?;
            if cost < Decimal::ZERO {
                return Err(ConfigError::InvalidEnvVar {
                    var: "DPM_REGULAR_ADMISSION_COST".to_string(),
                    reason: format!("must be non-negative, got {cost}"),
                });
            }
            Ok(cost)
        })
        .transpose()?;

    Ok(AppConfig {
        env,
        log_level,
        faq_path,
        default_regular_admission_cost,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

impl AppConfig {
    /// Development output is pretty-printed for reading at a terminal; other
    /// environments emit compact single-line JSON for the page to consume.
    #[must_use]
    pub fn pretty_output(&self) -> bool {
        self.env == Environment::Development
    }

    /// The FAQ catalog this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured file (or the embedded catalog)
    /// cannot be loaded.
    pub fn faq_catalog(&self) -> Result<FaqCatalog, ConfigError> {
        match &self.faq_path {
            Some(path) => load_faq_catalog(path),
            None => FaqCatalog::builtin(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
