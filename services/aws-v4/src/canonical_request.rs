use crate::constants::S3;
use crate::encoding::{encode_path, encode_query_component};
use crate::{CanonicalHeaders, HttpRequest};
use http::uri::PathAndQuery;
use log::debug;
use sigv4_core::{Error, Result};
use std::fmt::{self, Display, Write};
use std::str::FromStr;

/// The canonical form of a request, hashed into the string to sign.
///
/// ```text
/// METHOD
/// normalized path
/// normalized query
/// canonical headers (each line ends with '\n')
/// signed headers
/// content sha256
/// ```
///
/// The string is built once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    value: String,
}

impl CanonicalRequest {
    /// Build the canonical request.
    ///
    /// `content_sha256` is used verbatim: the hex SHA-256 of the payload,
    /// `UNSIGNED-PAYLOAD` or a streaming sentinel.
    pub fn new(
        service: &str,
        req: &HttpRequest,
        headers: &CanonicalHeaders,
        content_sha256: &str,
    ) -> Result<Self> {
        Self::with_extra_query(service, req, headers, content_sha256, &[])
    }

    /// Build the canonical request with extra (unencoded) query parameters
    /// mixed into the request's own ones before sorting.
    pub(crate) fn with_extra_query(
        service: &str,
        req: &HttpRequest,
        headers: &CanonicalHeaders,
        content_sha256: &str,
        extra_query: &[(String, String)],
    ) -> Result<Self> {
        let path = normalize_path(service, req.path())?;
        let query = normalize_query(req.query(), extra_query);

        // 256 is specially chosen to avoid reallocation for most requests.
        let mut f = String::with_capacity(256);
        writeln!(f, "{}", req.method())?;
        writeln!(f, "{path}")?;
        writeln!(f, "{query}")?;
        writeln!(f, "{}", headers.canonical_text())?;
        writeln!(f, "{}", headers.signed_headers())?;
        write!(f, "{content_sha256}")?;

        debug!("calculated canonical request: {f}");
        Ok(Self { value: f })
    }

    /// The canonical request string.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Normalize the request path.
///
/// The path is percent-encoded first. S3 treats repeated slashes and dot
/// segments as part of the object key, so for it the encoded path is used as
/// is; every other service gets `.`/`..` resolved and empty segments removed.
pub fn normalize_path(service: &str, path: &str) -> Result<String> {
    if path.is_empty() {
        return Ok("/".to_string());
    }

    let encoded = encode_path(path);
    if service == S3 {
        return Ok(encoded);
    }

    let normalized = remove_dot_segments(&encoded);
    PathAndQuery::from_str(&normalized).map_err(|e| {
        Error::malformed_path_encoding(format!(
            "the encoded path '{normalized}' of '{path}' is not a valid uri path"
        ))
        .with_source(e)
    })?;

    Ok(normalized)
}

/// Resolve `.` and `..` segments and drop empty ones.
///
/// A trailing slash survives, `..` never climbs above the root.
fn remove_dot_segments(path: &str) -> String {
    let mut stack: Vec<&str> = Vec::new();
    let mut last = "";
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
        last = segment;
    }

    let mut normalized = String::with_capacity(path.len());
    normalized.push('/');
    normalized.push_str(&stack.join("/"));
    if !stack.is_empty() && matches!(last, "" | "." | "..") {
        normalized.push('/');
    }
    normalized
}

/// Normalize the raw query string.
///
/// Parameters are sorted by their raw name (stable, so equal names keep their
/// order), then every name and value is percent-encoded.
pub fn normalize_query(raw: Option<&str>, extra: &[(String, String)]) -> String {
    let mut params = raw.map(parse_query).unwrap_or_default();
    params.extend(extra.iter().map(|(k, v)| (k.as_str(), Some(v.as_str()))));
    if params.is_empty() {
        return String::new();
    }

    params.sort_by(|l, r| l.0.cmp(r.0));

    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_query_component(k),
                encode_query_component(v.unwrap_or_default())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Split a raw query into `(name, value)` pairs without decoding anything.
///
/// NOTE: this is not the usual "split on `&`, then on the first `=`". AWS
/// looks for the next `=` first and only then for the `&` that follows it, so
/// `foo&bar=qux` is a single parameter `foo&bar` with value `qux`. The
/// `post-vanilla-query-nonunreserved` case of the AWS SigV4 test suite relies
/// on this.
fn parse_query(raw: &str) -> Vec<(&str, Option<&str>)> {
    let mut params = Vec::new();
    let mut index = 0;
    while index < raw.len() {
        let rest = &raw[index..];
        let Some(eq) = rest.find('=') else {
            params.push((rest, None));
            break;
        };

        let after = &rest[eq + 1..];
        let end = after.find('&').unwrap_or(after.len());
        params.push((&rest[..eq], Some(&after[..end])));
        index += eq + 1 + end + 1;
    }
    params
}
