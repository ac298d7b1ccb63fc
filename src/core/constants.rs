//! Constants used throughout mksecret.
//!
//! Centralizes the key format so the provider, the template and the tests
//! agree on it.

/// Setting name written in front of the generated value.
pub const SETTING_NAME: &str = "SECRET_KEY";

/// Number of characters in a generated key.
pub const KEY_LENGTH: usize = 50;

/// Characters a generated key is drawn from.
///
/// Contains no quote characters, backslash or whitespace, so the value can
/// sit inside a single-quoted literal unescaped.
pub const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*(-_=+)";
