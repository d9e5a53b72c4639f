//! Signed assertion provider for workload identity federation.
//!
//! Reads the service account token projected into a Kubernetes pod (path
//! given explicitly or through `AZURE_FEDERATED_TOKEN_FILE`) and hands it to
//! an OAuth client as its `client_assertion`. The file is re-read on every
//! call; nothing is cached.
//!
//! ```no_run
//! use auth_federated_assertion::{ClientAssertionProvider, FileAssertionProvider};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> auth_federated_assertion::AssertionResult<()> {
//! let provider = FileAssertionProvider::from_env();
//! let assertion = provider.get_signed_assertion(&CancellationToken::new()).await?;
//! let form = assertion.client_assertion_params();
//! # let _ = form;
//! # Ok(())
//! # }
//! ```

pub mod assertion;
pub mod config;
pub mod env;
pub mod error;
pub mod file;
pub mod provider;
pub mod source;

pub use assertion::{ClientAssertionParams, JWT_BEARER_ASSERTION_TYPE, SignedAssertion};
pub use config::AssertionConfig;
pub use env::{Environment, MapEnvironment, ProcessEnvironment};
pub use error::{AssertionError, AssertionResult};
pub use file::FileAssertionProvider;
pub use provider::ClientAssertionProvider;
pub use source::{AZURE_FEDERATED_TOKEN_FILE, AssertionSource};
