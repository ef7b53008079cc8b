//! Environment-based harness configuration.

use std::str::FromStr;

use cadwatch_domain::HarnessConfig;
use thiserror::Error;

/// Base URL override.
pub const BASE_URL_VAR: &str = "CADWATCH_BASE_URL";
/// Endpoint override.
pub const ENDPOINT_VAR: &str = "CADWATCH_ENDPOINT";
/// Per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "CADWATCH_TIMEOUT_SECS";
/// Delay between concurrent launches in milliseconds.
pub const STAGGER_VAR: &str = "CADWATCH_STAGGER_MS";
/// Row limit for sampled cases.
pub const SAMPLE_LIMIT_VAR: &str = "CADWATCH_SAMPLE_LIMIT";
/// Comma-separated concurrency levels.
pub const CONCURRENCY_VAR: &str = "CADWATCH_CONCURRENCY_LEVELS";

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds something other than a non-negative integer.
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Loads configuration from the process environment.
///
/// # Errors
///
/// Returns an error if a numeric variable cannot be parsed.
pub fn load_config_from_env() -> Result<HarnessConfig, ConfigError> {
    load_config_with(|var| std::env::var(var).ok())
}

/// Loads configuration through `lookup`, falling back to defaults.
///
/// Blank values count as unset.
///
/// # Errors
///
/// Returns an error if a numeric variable cannot be parsed.
pub fn load_config_with<F>(lookup: F) -> Result<HarnessConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
    let mut config = HarnessConfig::default();

    if let Some(base_url) = read(BASE_URL_VAR) {
        config.base_url = base_url;
    }
    if let Some(endpoint) = read(ENDPOINT_VAR) {
        config.endpoint = endpoint.trim().to_string();
    }
    if let Some(value) = read(TIMEOUT_VAR) {
        config.timeout_secs = Some(parse_number(TIMEOUT_VAR, &value)?);
    }
    if let Some(value) = read(STAGGER_VAR) {
        config.stagger_ms = parse_number(STAGGER_VAR, &value)?;
    }
    if let Some(value) = read(SAMPLE_LIMIT_VAR) {
        config.sample_limit = parse_number(SAMPLE_LIMIT_VAR, &value)?;
    }
    if let Some(value) = read(CONCURRENCY_VAR) {
        config.concurrency_levels = value
            .split(',')
            .map(|level| parse_number(CONCURRENCY_VAR, level))
            .collect::<Result<_, _>>()?;
    }

    Ok(config)
}

fn parse_number<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
