//! Property-based tests for the signed assertion provider.
//!
//! Tests validate:
//! - Contents are returned verbatim
//! - Assertions never appear in Debug output
//! - Not-found errors always name the attempted path

use auth_federated_assertion::{
    AssertionError, ClientAssertionProvider, FileAssertionProvider, SignedAssertion,
};
use proptest::prelude::*;
use test_utils::{TokenFile, secret_value_strategy, token_contents_strategy, token_file_name_strategy};
use tokio_util::sync::CancellationToken;

fn read(provider: &FileAssertionProvider) -> Result<SignedAssertion, AssertionError> {
    tokio_test::block_on(provider.get_signed_assertion(&CancellationToken::new()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever text is in the file comes back unchanged, whitespace included.
    #[test]
    fn prop_contents_returned_verbatim(contents in token_contents_strategy()) {
        let file = TokenFile::with_contents(&contents).unwrap();
        let provider = FileAssertionProvider::from_path(file.path());

        let assertion = read(&provider).unwrap();

        prop_assert_eq!(assertion.expose_secret(), contents.as_str());
        prop_assert_eq!(assertion.len(), contents.len());
    }

    /// Debug output of an assertion or its form parameters never leaks the token.
    #[test]
    fn prop_assertion_not_exposed_in_debug(secret in secret_value_strategy()) {
        let assertion = SignedAssertion::new(secret.clone());

        let debug_output = format!("{assertion:?}");
        prop_assert!(!debug_output.contains(&secret), "Debug output should not contain the assertion");
        prop_assert!(debug_output.contains("[REDACTED]"));

        let params_output = format!("{:?}", assertion.client_assertion_params());
        prop_assert!(!params_output.contains(&secret));
    }

    /// A missing file produces FileNotFound mentioning the file name.
    #[test]
    fn prop_not_found_names_path(name in token_file_name_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileAssertionProvider::from_path(dir.path().join(&name));

        let err = read(&provider).unwrap_err();

        prop_assert!(err.is_not_found());
        prop_assert!(err.to_string().to_lowercase().contains(&name.to_lowercase()));
    }

    /// Two reads around a rotation each see the contents current at the time.
    #[test]
    fn prop_each_read_sees_current_contents(
        before in token_contents_strategy(),
        after in token_contents_strategy(),
    ) {
        let file = TokenFile::with_contents(&before).unwrap();
        let provider = FileAssertionProvider::from_path(file.path());

        let first = read(&provider).unwrap();
        file.rotate(&after).unwrap();
        let second = read(&provider).unwrap();

        prop_assert_eq!(first.expose_secret(), before.as_str());
        prop_assert_eq!(second.expose_secret(), after.as_str());
    }
}

/// Serialized form parameters carry the token in clear text.
#[test]
fn test_form_params_serialize_token() {
    let assertion = SignedAssertion::new("header.payload.signature");

    let json = serde_json::to_string(&assertion.client_assertion_params()).unwrap();

    assert!(json.contains(r#""client_assertion":"header.payload.signature""#));
}
