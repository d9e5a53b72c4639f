//! Where a signed assertion file is found.

use crate::env::Environment;
use crate::error::{AssertionError, AssertionResult};
use std::fmt;
use std::path::PathBuf;

/// Environment variable set by the Azure workload identity webhook.
pub const AZURE_FEDERATED_TOKEN_FILE: &str = "AZURE_FEDERATED_TOKEN_FILE";

/// Location of the signed assertion file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionSource {
    /// Explicit file path
    File(PathBuf),
    /// Path taken from this environment variable when the assertion is read
    Environment(String),
}

impl Default for AssertionSource {
    fn default() -> Self {
        Self::Environment(AZURE_FEDERATED_TOKEN_FILE.to_string())
    }
}

impl AssertionSource {
    /// Resolve the path to read right now.
    ///
    /// Never memoized: an environment-backed source sees the variable's
    /// current value on every call.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionError::EmptyPath`] when the explicit path is empty
    /// and [`AssertionError::MissingSource`] when the variable is unset or
    /// empty.
    pub fn resolve(&self, env: &dyn Environment) -> AssertionResult<PathBuf> {
        match self {
            Self::File(path) if path.as_os_str().is_empty() => Err(AssertionError::EmptyPath),
            Self::File(path) => Ok(path.clone()),
            Self::Environment(var) => env
                .var(var)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .ok_or_else(|| AssertionError::missing_source(var.as_str())),
        }
    }
}

impl fmt::Display for AssertionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Environment(var) => write!(f, "env:{var}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvironment;

    #[test]
    fn test_explicit_path_ignores_environment() {
        let env: MapEnvironment = [(AZURE_FEDERATED_TOKEN_FILE, "/from/env")].into_iter().collect();
        let source = AssertionSource::File(PathBuf::from("/explicit/token"));

        assert_eq!(source.resolve(&env).ok(), Some(PathBuf::from("/explicit/token")));
    }

    #[test]
    fn test_environment_resolved_each_call() {
        let env = MapEnvironment::new();
        let source = AssertionSource::default();

        assert!(matches!(
            source.resolve(&env),
            Err(AssertionError::MissingSource { ref var }) if var == AZURE_FEDERATED_TOKEN_FILE
        ));

        env.set(AZURE_FEDERATED_TOKEN_FILE, "/first");
        assert_eq!(source.resolve(&env).ok(), Some(PathBuf::from("/first")));

        env.set(AZURE_FEDERATED_TOKEN_FILE, "/second");
        assert_eq!(source.resolve(&env).ok(), Some(PathBuf::from("/second")));
    }

    #[test]
    fn test_empty_variable_is_missing_source() {
        let env: MapEnvironment = [(AZURE_FEDERATED_TOKEN_FILE, "")].into_iter().collect();
        assert!(matches!(
            AssertionSource::default().resolve(&env),
            Err(AssertionError::MissingSource { .. })
        ));
    }

    #[test]
    fn test_empty_explicit_path_does_not_name_variable() {
        let env: MapEnvironment = [("MY_TOKEN_FILE", "/from/env")].into_iter().collect();
        let source = crate::config::AssertionConfig::default()
            .with_env_var("MY_TOKEN_FILE")
            .with_token_file("")
            .source();

        let err = source.resolve(&env).unwrap_err();
        assert!(matches!(err, AssertionError::EmptyPath));
        assert!(!err.to_string().contains("MY_TOKEN_FILE"));
        assert!(!err.to_string().contains(AZURE_FEDERATED_TOKEN_FILE));
    }

    #[test]
    fn test_display() {
        assert_eq!(AssertionSource::default().to_string(), "env:AZURE_FEDERATED_TOKEN_FILE");
        assert_eq!(
            AssertionSource::File(PathBuf::from("token.jwt")).to_string(),
            "file:token.jwt"
        );
    }
}
