//! Percent-encoding as AWS expects it.
//!
//! AWS wants every byte outside of the unreserved set escaped as `%XX` with
//! uppercase hex digits. Neither `form_urlencoded` (which turns spaces into
//! `+`) nor a plain URI encoder (which keeps `~` and sub-delims) produce that,
//! so both flavours are built on dedicated [`AsciiSet`](percent_encoding::AsciiSet)s.
//!
//! Input is never decoded first: a `%` already present in the input is
//! escaped as `%25`.

use crate::constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET};
use percent_encoding::utf8_percent_encode;

/// Percent-encode a request path, keeping `/` as is.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, &AWS_URI_ENCODE_SET).to_string()
}

/// Percent-encode the name or the value of a query parameter.
pub fn encode_query_component(s: &str) -> String {
    utf8_percent_encode(s, &AWS_QUERY_ENCODE_SET).to_string()
}
