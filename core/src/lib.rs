//! Core components for signing API requests with AWS Signature Version 4.
//!
//! This crate provides the foundational types shared by the service signers:
//!
//! - **Error**: the signing error taxonomy ([`Error`], [`ErrorKind`])
//! - **Context**: a container that holds the [`Env`] used to look up credentials
//! - **Traits**: abstract interfaces for credential loading ([`ProvideCredential`])
//!   and credential validation ([`SigningCredential`])
//! - **Chain**: [`ProvideCredentialChain`], an ordered list of providers where the
//!   first one yielding a credential wins
//!
//! ## Example
//!
//! ```
//! use sigv4_core::{Context, ProvideCredential, ProvideCredentialChain, Result, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! let chain = ProvideCredentialChain::new().push(MyLoader);
//! let cred = chain.provide_credential(&Context::new()).unwrap();
//! assert!(cred.is_some());
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and HMAC-SHA256 helpers
//! - [`time`]: timestamp formatting used by the signing scope
//! - [`utils`]: general utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod context;
pub use context::Context;

mod api;
pub use api::{ProvideCredential, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod method;
pub use method::SigningMethod;
