//! Tracing subscriber configuration.
//!
//! Services and binaries call [`init_tracing`] once at startup; libraries
//! only emit events through the `tracing` macros.

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

/// Tracing configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Service name for tracing
    pub service_name: String,
    /// Log level filter
    pub log_level: String,
    /// Whether to output JSON format
    pub json_output: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "rust-service".to_string(),
            log_level: "info".to_string(),
            json_output: false,
        }
    }
}

impl TracingConfig {
    /// Load configuration from `SERVICE_NAME`, `LOG_LEVEL` and `LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their defaults. `LOG_FORMAT=json`
    /// (case-insensitive) enables JSON output.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(name) = non_empty("SERVICE_NAME") {
            config.service_name = name;
        }
        if let Some(level) = non_empty("LOG_LEVEL") {
            config.log_level = level;
        }
        config.json_output = non_empty("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));
        config
    }

    /// Create config with custom service name.
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Create config with custom log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON output.
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over [`TracingConfig::log_level`].
///
/// # Panics
///
/// Panics if a global subscriber has already been installed. Use
/// [`try_init_tracing`] where that can happen.
pub fn init_tracing(config: &TracingConfig) {
    if let Err(e) = try_init_tracing(config) {
        panic!("failed to install tracing subscriber: {e}");
    }
}

/// Initialize tracing, returning an error if a global subscriber exists.
///
/// # Errors
///
/// Returns [`TryInitError`] when the global default subscriber is already set.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    tracing::debug!(service = %config.service_name, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.service_name, "rust-service");
        assert_eq!(config.log_level, "info");
        assert!(!config.json_output);
    }

    #[test]
    fn test_config_builder() {
        let config = TracingConfig::default()
            .with_service_name("assertion-probe")
            .with_log_level("debug")
            .with_json_output();

        assert_eq!(config.service_name, "assertion-probe");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_output);
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = TracingConfig::from_lookup(lookup(&[
            ("SERVICE_NAME", "token-reader"),
            ("LOG_LEVEL", "trace"),
            ("LOG_FORMAT", "JSON"),
        ]));

        assert_eq!(config.service_name, "token-reader");
        assert_eq!(config.log_level, "trace");
        assert!(config.json_output);
    }

    #[test]
    fn test_from_lookup_ignores_empty_values() {
        let config = TracingConfig::from_lookup(lookup(&[("LOG_LEVEL", "  "), ("LOG_FORMAT", "text")]));

        assert_eq!(config.log_level, "info");
        assert!(!config.json_output);
    }
}
