//! File-backed signed assertion provider for Kubernetes workload identity.

use crate::{
    assertion::SignedAssertion,
    config::AssertionConfig,
    env::{Environment, ProcessEnvironment},
    error::{AssertionError, AssertionResult},
    provider::ClientAssertionProvider,
    source::AssertionSource,
};
use async_trait::async_trait;
use std::{path::PathBuf, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, instrument};

/// Reads the signed assertion from a projected token file.
///
/// The file is re-read on every call, so rotation by the kubelet is picked
/// up without rebuilding the provider. Clones share the same environment.
#[derive(Debug, Clone)]
pub struct FileAssertionProvider {
    source: AssertionSource,
    env: Arc<dyn Environment>,
}

impl FileAssertionProvider {
    /// Create a provider from configuration.
    #[must_use]
    pub fn new(config: &AssertionConfig) -> Self {
        Self {
            source: config.source(),
            env: Arc::new(ProcessEnvironment),
        }
    }

    /// Create a provider that reads the given file.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(&AssertionConfig::new(path))
    }

    /// Create a provider that looks up `AZURE_FEDERATED_TOKEN_FILE` on each call.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(&AssertionConfig::default())
    }

    /// Use a different environment for variable lookups.
    #[must_use]
    pub fn with_environment(mut self, env: impl Environment + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Where this provider looks for the assertion.
    #[must_use]
    pub const fn source(&self) -> &AssertionSource {
        &self.source
    }

    async fn read(&self, cancel: &CancellationToken) -> AssertionResult<SignedAssertion> {
        if cancel.is_cancelled() {
            return Err(AssertionError::Cancelled);
        }

        let path = self.source.resolve(self.env.as_ref())?;
        Span::current().record("path", tracing::field::display(path.display()));

        let contents = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(AssertionError::Cancelled),
            read = tokio::fs::read_to_string(&path) => {
                read.map_err(|e| AssertionError::from_io(path.clone(), e))?
            }
        };

        debug!(len = contents.len(), "Signed assertion read");
        Ok(SignedAssertion::new(contents))
    }
}

#[async_trait]
impl ClientAssertionProvider for FileAssertionProvider {
    #[instrument(skip_all, fields(source = %self.source, path))]
    async fn get_signed_assertion(&self, cancel: &CancellationToken) -> AssertionResult<SignedAssertion> {
        self.read(cancel).await
    }
}
