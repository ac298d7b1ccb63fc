//! Captured runs and the checks made on them.

use std::process::Output;

use mksecret::core::constants::{KEY_ALPHABET, KEY_LENGTH, SETTING_NAME};

/// Exit code and decoded streams of one finished run.
pub struct Captured {
    pub code: Option<i32>,
    pub out: String,
    pub err: String,
}

impl From<Output> for Captured {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            out: String::from_utf8_lossy(&output.stdout).into_owned(),
            err: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Captured {
    /// Panic with stderr unless the run exited 0.
    pub fn ok(&self) -> &Self {
        assert_eq!(self.code, Some(0), "mksecret failed:\n{}", self.err);
        self
    }

    /// Panic unless the run exited with `code`.
    pub fn exited(&self, code: i32) -> &Self {
        assert_eq!(
            self.code,
            Some(code),
            "unexpected exit status\nstdout: {}\nstderr: {}",
            self.out,
            self.err
        );
        self
    }

    /// The key carried by stdout, which must be exactly one settings line
    /// of the default shape.
    pub fn key(&self) -> String {
        let key = key_from_line(&self.out);
        assert_key_shape(&key);
        key
    }
}

/// Extract the key from a `SECRET_KEY = '<key>'\n` line, panicking on any
/// other shape.
pub fn key_from_line(out: &str) -> String {
    let line = out
        .strip_suffix('\n')
        .unwrap_or_else(|| panic!("output should end with a newline, got: {:?}", out));
    assert!(!line.contains('\n'), "expected one line, got: {:?}", out);

    let value = line
        .strip_prefix(SETTING_NAME)
        .and_then(|rest| rest.strip_prefix(" = '"))
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or_else(|| panic!("line does not match template: {:?}", line));
    assert!(!value.contains('\''), "key contains a quote: {:?}", value);
    value.to_string()
}

/// Assert the key has the default length and alphabet.
pub fn assert_key_shape(key: &str) {
    assert_eq!(key.len(), KEY_LENGTH, "unexpected key length: {:?}", key);
    for b in key.bytes() {
        assert!(
            KEY_ALPHABET.contains(&b),
            "unexpected char {:?} in {:?}",
            b as char,
            key
        );
    }
}
