//! Signed assertion provider configuration.

use crate::source::{AZURE_FEDERATED_TOKEN_FILE, AssertionSource};
use std::path::PathBuf;

/// Signed assertion provider configuration.
///
/// Holds only where to look. Nothing is read from the environment or the
/// filesystem when the configuration is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionConfig {
    /// Explicit token file path; takes precedence over `env_var`
    pub token_file: Option<PathBuf>,
    /// Variable naming the token file when no explicit path is set
    pub env_var: String,
}

impl Default for AssertionConfig {
    fn default() -> Self {
        Self {
            token_file: None,
            env_var: AZURE_FEDERATED_TOKEN_FILE.to_string(),
        }
    }
}

impl AssertionConfig {
    /// Create a configuration that reads the given file.
    #[must_use]
    pub fn new(token_file: impl Into<PathBuf>) -> Self {
        Self::default().with_token_file(token_file)
    }

    /// Set an explicit token file path.
    #[must_use]
    pub fn with_token_file(mut self, token_file: impl Into<PathBuf>) -> Self {
        self.token_file = Some(token_file.into());
        self
    }

    /// Set the environment variable consulted when no path is given.
    #[must_use]
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = env_var.into();
        self
    }

    /// Source the provider will resolve on every call.
    #[must_use]
    pub fn source(&self) -> AssertionSource {
        self.token_file.as_ref().map_or_else(
            || AssertionSource::Environment(self.env_var.clone()),
            |path| AssertionSource::File(path.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssertionConfig::default();
        assert_eq!(config.token_file, None);
        assert_eq!(config.env_var, "AZURE_FEDERATED_TOKEN_FILE");
        assert_eq!(config.source(), AssertionSource::default());
    }

    #[test]
    fn test_explicit_file_wins() {
        let config = AssertionConfig::default()
            .with_env_var("CUSTOM_TOKEN_FILE")
            .with_token_file("/var/run/secrets/azure/tokens/azure-identity-token");

        assert_eq!(
            config.source(),
            AssertionSource::File(PathBuf::from(
                "/var/run/secrets/azure/tokens/azure-identity-token"
            ))
        );
    }

    #[test]
    fn test_custom_env_var() {
        let config = AssertionConfig::default().with_env_var("CUSTOM_TOKEN_FILE");
        assert_eq!(
            config.source(),
            AssertionSource::Environment("CUSTOM_TOKEN_FILE".to_string())
        );
    }
}
