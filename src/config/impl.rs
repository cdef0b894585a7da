use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// # Panics
/// If `init_config()` has not been called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .clone()
}

/// Initialize the global configuration
///
/// Loads `config.toml` from the current directory (optional), then applies
/// environment overrides. Calling it a second time is a no-op and returns
/// the configuration that is already installed.
///
/// # Examples
/// ```no_run
/// use shortener::config::init_config;
/// init_config().expect("invalid configuration");
/// ```
pub fn init_config() -> Result<Arc<StaticConfig>, config::ConfigError> {
    if let Some(existing) = CONFIG.get() {
        return Ok(existing.clone());
    }
    let loaded = Arc::new(StaticConfig::load()?);
    Ok(CONFIG.get_or_init(|| loaded).clone())
}
