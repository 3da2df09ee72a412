use http::HeaderName;
use sigv4_core::{Error, Result};
use std::collections::BTreeMap;

/// Canonical headers of a request.
///
/// Header names are lower-cased and sorted, values are normalized and values
/// sharing a name are joined with `,` in the order they were added.
///
/// See <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaders {
    names: String,
    canonical: String,
    headers: BTreeMap<String, Vec<String>>,
}

impl CanonicalHeaders {
    /// Create a new builder.
    pub fn builder() -> CanonicalHeadersBuilder {
        CanonicalHeadersBuilder::default()
    }

    /// Sorted, `;`-joined, lower-cased header names: `host;x-amz-date`.
    pub fn signed_headers(&self) -> &str {
        &self.names
    }

    /// The canonical headers block, one `name:value\n` line per header.
    pub fn canonical_text(&self) -> &str {
        &self.canonical
    }

    /// Get the first (normalized) value of a header, ignoring case.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether no header was added.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Copy of these headers without the given (case-insensitive) name.
    pub(crate) fn without(&self, name: &str) -> Self {
        let mut headers = self.headers.clone();
        headers.remove(&name.to_ascii_lowercase());
        CanonicalHeadersBuilder { headers }.build()
    }
}

/// Builder for [`CanonicalHeaders`].
#[derive(Debug, Default, Clone)]
pub struct CanonicalHeadersBuilder {
    headers: BTreeMap<String, Vec<String>>,
}

impl CanonicalHeadersBuilder {
    /// Add a header.
    ///
    /// Returns an `InvalidArgument` error if `name` is not a valid HTTP
    /// header name (empty, or holding `:`, whitespace or control characters).
    pub fn add(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            Error::invalid_argument(format!("header name '{name}' is invalid")).with_source(e)
        })?;

        self.headers
            .entry(name.as_str().to_string())
            .or_default()
            .push(normalize_value(value));
        Ok(self)
    }

    /// Build the canonical headers.
    pub fn build(self) -> CanonicalHeaders {
        let names = self
            .headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        let mut canonical = String::with_capacity(names.len() * 4);
        for (name, values) in &self.headers {
            canonical.push_str(name);
            canonical.push(':');
            canonical.push_str(&values.join(","));
            canonical.push('\n');
        }

        CanonicalHeaders {
            names,
            canonical,
            headers: self.headers,
        }
    }
}

/// Normalize a header value.
///
/// An embedded newline separates values instead of continuing the line: AWS's
/// own test suite (`get-header-value-multiline`) expects every line trimmed
/// and the lines joined with `,`. Interior runs of spaces collapse to one.
fn normalize_value(value: &str) -> String {
    value
        .split('\n')
        .map(|line| collapse_spaces(line.trim_matches(' ')))
        .collect::<Vec<_>>()
        .join(",")
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_is_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !last_is_space {
                out.push(c);
            }
            last_is_space = true;
        } else {
            out.push(c);
            last_is_space = false;
        }
    }
    out
}
