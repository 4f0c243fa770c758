//! Environment overrides.

use crate::error::ConfigError;

use super::RuntimeOverrides;

/// Env var overriding the theme repository base URL.
pub const THEMES_URL_ENV: &str = "JUSTD_THEMES_URL";
/// Env var overriding the stylesheet fetch timeout, in seconds.
pub const FETCH_TIMEOUT_ENV: &str = "JUSTD_FETCH_TIMEOUT_SECS";

/// Read runtime overrides from the process environment.
pub fn load_runtime_overrides() -> Result<RuntimeOverrides, ConfigError> {
    runtime_overrides_with(&|name: &str| std::env::var(name).ok())
}

pub(super) fn runtime_overrides_with<FEnv>(env_lookup: &FEnv) -> Result<RuntimeOverrides, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let themes_url = non_empty(env_lookup, THEMES_URL_ENV);
    let fetch_timeout_secs = match non_empty(env_lookup, FETCH_TIMEOUT_ENV) {
        Some(timeout) => {
            let parsed = timeout.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "invalid {FETCH_TIMEOUT_ENV} value `{timeout}`: expected positive integer seconds"
                ))
            })?;
            // Clamp to at least 1 second so a zero never disables the timeout.
            Some(parsed.max(1))
        }
        None => None,
    };
    Ok(RuntimeOverrides {
        themes_url,
        fetch_timeout_secs,
    })
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
