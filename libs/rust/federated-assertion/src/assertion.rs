//! Signed assertion value and the form parameters it is sent as.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use std::fmt;

/// `client_assertion_type` for JWT bearer client authentication (RFC 7523).
pub const JWT_BEARER_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// Contents of a signed assertion file.
///
/// Kept exactly as read: no trimming, parsing or validation. `Debug` never
/// shows the token.
#[derive(Clone)]
pub struct SignedAssertion {
    value: SecretString,
}

impl SignedAssertion {
    /// Wrap raw assertion text.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: SecretString::from(value.into()),
        }
    }

    /// The assertion text, verbatim.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.value.expose_secret()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose_secret().len()
    }

    /// Whether the file was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    /// Form parameters for a `client_credentials` token request.
    #[must_use]
    pub fn client_assertion_params(&self) -> ClientAssertionParams<'_> {
        ClientAssertionParams {
            client_assertion_type: JWT_BEARER_ASSERTION_TYPE,
            client_assertion: &self.value,
        }
    }
}

impl fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedAssertion")
            .field("value", &"[REDACTED]")
            .field("len", &self.len())
            .finish()
    }
}

/// `client_assertion_type` and `client_assertion` form fields.
///
/// Serializes the token in clear text since that is what goes on the wire;
/// `Debug` stays redacted.
#[derive(Serialize)]
pub struct ClientAssertionParams<'a> {
    /// Always [`JWT_BEARER_ASSERTION_TYPE`]
    pub client_assertion_type: &'static str,
    /// The signed assertion
    #[serde(serialize_with = "serialize_exposed")]
    pub client_assertion: &'a SecretString,
}

impl fmt::Debug for ClientAssertionParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientAssertionParams")
            .field("client_assertion_type", &self.client_assertion_type)
            .field("client_assertion", &"[REDACTED]")
            .finish()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_exposed<S: Serializer>(value: &&SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.expose_secret())
}
