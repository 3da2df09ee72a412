use crate::constants::TERMINATION;
use sigv4_core::{Error, Result};
use std::fmt::{self, Display};

/// Credential scope: `20150830/us-east-1/iam/aws4_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Create a scope from a `YYYYMMDD` date stamp.
    pub fn new(date: &str, region: &str, service: &str) -> Self {
        Self {
            date: date.to_string(),
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// Create a scope from a full `X-Amz-Date` timestamp (`20150830T123600Z`).
    ///
    /// The date stamp is its first 8 characters, the rest is not inspected.
    /// Returns an `InvalidArgument` error if those aren't 8 ASCII digits.
    pub fn from_timestamp(timestamp: &str, region: &str, service: &str) -> Result<Self> {
        let date = timestamp
            .get(..8)
            .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "'{timestamp}' does not start with a YYYYMMDD date stamp"
                ))
            })?;

        Ok(Self::new(date, region, service))
    }

    /// Date stamp, `YYYYMMDD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Region the scope is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service the scope is bound to.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for CredentialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, TERMINATION
        )
    }
}
