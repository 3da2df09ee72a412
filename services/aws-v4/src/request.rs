use http::request::Parts;
use http::Uri;
use sigv4_core::Result;

/// The parts of an HTTP request that take part in the canonical request.
///
/// Path and query are kept raw: nothing here decodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: String,
    path: String,
    query: Option<String>,
}

impl HttpRequest {
    /// Create a request from an already split path and query.
    pub fn new(method: &str, path: &str, query: Option<&str>) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            query: query.map(str::to_string),
        }
    }

    /// Create a request from a raw request target such as `/path?query`.
    ///
    /// The target is split at the first `?` and not parsed any further, so
    /// characters a URI would reject (spaces, non-ASCII) are kept as given.
    pub fn from_path_and_query(method: &str, path_and_query: &str) -> Self {
        match path_and_query.split_once('?') {
            Some((path, query)) => Self::new(method, path, Some(query)),
            None => Self::new(method, path_and_query, None),
        }
    }

    /// Create a request from a URI such as `https://host/path?query`.
    ///
    /// Returns an `InvalidArgument` error if the URI can't be parsed.
    pub fn from_uri(method: &str, uri: &str) -> Result<Self> {
        let uri: Uri = uri.parse()?;
        Ok(Self::from_parsed_uri(method, &uri))
    }

    /// Create a request from `http::request::Parts`.
    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_parsed_uri(parts.method.as_str(), &parts.uri)
    }

    fn from_parsed_uri(method: &str, uri: &Uri) -> Self {
        Self::new(method, uri.path(), uri.query())
    }

    /// HTTP method, not validated.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Raw path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}
