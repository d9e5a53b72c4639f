//! Generic client assertion provider trait.

use crate::assertion::SignedAssertion;
use crate::error::AssertionResult;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Supplies the signed assertion a confidential client presents instead of a
/// client secret.
///
/// Token-exchange clients hold a `dyn ClientAssertionProvider` and call it
/// before every token request; implementations decide where the assertion
/// comes from.
#[async_trait]
pub trait ClientAssertionProvider: Send + Sync {
    /// Produce the current signed assertion.
    ///
    /// Pass a fresh [`CancellationToken`] when the caller never cancels.
    async fn get_signed_assertion(&self, cancel: &CancellationToken) -> AssertionResult<SignedAssertion>;
}
