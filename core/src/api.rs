use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait implemented by credentials used to sign.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is complete enough to sign with.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used to load a credential from a source.
///
/// Lookups are synchronous: every source consulted here (explicit values,
/// environment variables) answers immediately.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from the given context.
    ///
    /// - `Ok(Some(cred))`: the source holds a complete credential.
    /// - `Ok(None)`: the source holds nothing (or only half a pair).
    /// - `Err(_)`: the source could not be read.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}
