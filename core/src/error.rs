use std::fmt;
use thiserror::Error;

/// The error type for signing operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
///
/// Every kind is terminal: the same input always produces the same failure,
/// so none of them is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A header required for signing (such as `X-Amz-Date`) is absent
    MissingRequiredHeader,

    /// An argument is malformed (invalid header name, bad date, bad expiry, ...)
    InvalidArgument,

    /// Text could not be represented in the encoding signing requires
    EncodingFailure,

    /// The HMAC/SHA-256 primitive rejected its input
    CryptoPrimitiveFailure,

    /// No credential source yielded a complete access key / secret key pair
    NoCredentialsAvailable,

    /// The percent-encoded path is not a syntactically valid URI path
    MalformedPathEncoding,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Convenience constructors
impl Error {
    /// Create a missing required header error
    pub fn missing_required_header(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredHeader, message)
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an encoding failure error
    pub fn encoding_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncodingFailure, message)
    }

    /// Create a crypto primitive failure error
    pub fn crypto_primitive_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CryptoPrimitiveFailure, message)
    }

    /// Create a no credentials available error
    pub fn no_credentials_available(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoCredentialsAvailable, message)
    }

    /// Create a malformed path encoding error
    pub fn malformed_path_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPathEncoding, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingRequiredHeader => write!(f, "missing required header"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::EncodingFailure => write!(f, "encoding failure"),
            ErrorKind::CryptoPrimitiveFailure => write!(f, "crypto primitive failure"),
            ErrorKind::NoCredentialsAvailable => write!(f, "no credentials available"),
            ErrorKind::MalformedPathEncoding => write!(f, "malformed path encoding"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::encoding_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(err: hmac::digest::InvalidLength) -> Self {
        Self::crypto_primitive_failure(format!("hmac rejected its key: {err}"))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::encoding_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
