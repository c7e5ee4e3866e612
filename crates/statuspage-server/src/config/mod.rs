//! Status server config loader (environment variables, strict validation).

pub mod schema;

use std::env;

use statuspage_core::error::Result;

pub use schema::{ServerSection, StatusConfig};

/// Load and validate config from the process environment.
pub fn load_from_env() -> Result<StatusConfig> {
    load_from_lookup(|key| match env::var(key) {
        Ok(v) => Some(v),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "ignoring non UTF-8 environment variable");
            None
        }
    })
}

/// Load and validate config from an arbitrary variable source.
///
/// Unset keys fall back to their defaults; a key set to the empty string is
/// taken verbatim.
pub fn load_from_lookup<F>(lookup: F) -> Result<StatusConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = StatusConfig::from_lookup(&lookup)?;
    cfg.validate()?;
    Ok(cfg)
}
