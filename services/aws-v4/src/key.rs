use crate::constants::{AWS4, TERMINATION};
use crate::CredentialScope;
use sigv4_core::hash::hmac_sha256;
use sigv4_core::Result;

/// Derive the signing key for a scope.
///
/// ```text
/// kSecret  = "AWS4" + secret
/// kDate    = HMAC(kSecret, date)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
pub fn generate_signing_key(secret: &str, scope: &CredentialScope) -> Result<Vec<u8>> {
    // Sign secret
    let secret = format!("{AWS4}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), scope.date().as_bytes())?;
    // Sign region
    let sign_region = hmac_sha256(&sign_date, scope.region().as_bytes())?;
    // Sign service
    let sign_service = hmac_sha256(&sign_region, scope.service().as_bytes())?;
    // Sign request
    hmac_sha256(&sign_service, TERMINATION.as_bytes())
}
