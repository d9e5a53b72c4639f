//! Shared proptest generators.
//!
//! Reusable strategies for token file contents and file names.

use proptest::prelude::*;

/// Generate JWT-shaped tokens: three base64url segments, signature optional.
pub fn jwt_like_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9_-]{10,40}",
        "[A-Za-z0-9_-]{10,200}",
        "[A-Za-z0-9_-]{0,86}",
    )
        .prop_map(|(header, payload, signature)| format!("{header}.{payload}.{signature}"))
}

/// Generate arbitrary text a token file could hold, including surrounding
/// whitespace, newlines and non-ASCII characters.
pub fn token_contents_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        jwt_like_strategy(),
        jwt_like_strategy().prop_map(|jwt| format!("{jwt}\n")),
        jwt_like_strategy().prop_map(|jwt| format!("  {jwt}\r\n")),
        "\\PC{0,256}",
    ]
}

/// Generate secret-looking values long enough to never collide with
/// formatting output by accident.
pub fn secret_value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!@#$%^&*]{16,64}"
}

/// Generate plausible token file names.
pub fn token_file_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("azure-identity-token".to_string()),
        Just("doesNotExist.txt".to_string()),
        "[a-zA-Z][a-zA-Z0-9_-]{2,20}\\.(txt|jwt|token)",
    ]
}
