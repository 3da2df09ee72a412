use std::time::Duration;

/// SigningMethod is the method that used in signing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with the `Authorization` header.
    Header,
    /// Signing with query parameters that stay valid for the given duration.
    Query(Duration),
}
