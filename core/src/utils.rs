//! Utility functions and types.

use std::fmt::Debug;

/// Redact hides a secret when it's printed through `Debug`.
///
/// - Empty secrets print as `EMPTY` so a missing value is still visible.
/// - Secrets shorter than 12 bytes are fully hidden.
/// - Longer secrets keep their first and last three characters, which is
///   enough to tell two keys apart without leaking them.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        let length = s.len();
        if length == 0 {
            return f.write_str("EMPTY");
        }
        if length < 12 || !s.is_char_boundary(3) || !s.is_char_boundary(length - 3) {
            return f.write_str("***");
        }

        write!(f, "{}***{}", &s[..3], &s[length - 3..])
    }
}
