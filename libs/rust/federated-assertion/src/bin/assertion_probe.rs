//! Exec probe: checks that the federated token file is readable.
//!
//! Usage: `assertion-probe [TOKEN_FILE]`. Without an argument the path comes
//! from `AZURE_FEDERATED_TOKEN_FILE`. Prints the token length, never the token.

use anyhow::Context;
use auth_federated_assertion::{ClientAssertionProvider, FileAssertionProvider};
use rust_common::{TracingConfig, init_tracing};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const TIMEOUT_VAR: &str = "ASSERTION_PROBE_TIMEOUT_MS";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Read timeout from `ASSERTION_PROBE_TIMEOUT_MS`, defaulting when unset.
fn probe_timeout(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Duration> {
    let Some(raw) = lookup(TIMEOUT_VAR) else {
        return Ok(Duration::from_millis(DEFAULT_TIMEOUT_MS));
    };
    let millis: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid {TIMEOUT_VAR}: {raw}"))?;
    Ok(Duration::from_millis(millis))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&TracingConfig::from_env().with_service_name("assertion-probe"));

    let timeout = probe_timeout(|key| std::env::var(key).ok())?;

    let provider = std::env::args()
        .nth(1)
        .map_or_else(FileAssertionProvider::from_env, FileAssertionProvider::from_path);

    let cancel = CancellationToken::new();
    let deadline = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            tokio::time::sleep(timeout).await;
            cancel.cancel();
        }
    });

    let result = provider.get_signed_assertion(&cancel).await;
    deadline.abort();

    match result {
        Ok(assertion) => {
            info!(source = %provider.source(), len = assertion.len(), "Signed assertion readable");
            println!("{}", assertion.len());
            Ok(())
        }
        Err(e) => {
            error!(source = %provider.source(), error = %e, "Signed assertion unavailable");
            Err(e).context("signed assertion probe failed")
        }
    }
}
