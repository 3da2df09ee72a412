use crate::constants::*;
use sigv4_core::Context;

/// Config for signing requests to aws services.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `region` is the region the scope is bound to.
    ///
    /// - env value: `AWS_REGION`, then `AWS_DEFAULT_REGION`
    pub region: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field(
                "access_key_id",
                &self.access_key_id.as_deref().map(sigv4_core::utils::Redact::from),
            )
            .field(
                "secret_access_key",
                &self
                    .secret_access_key
                    .as_deref()
                    .map(sigv4_core::utils::Redact::from),
            )
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.region.is_none() {
            self.region = ctx.env_var_any(&[AWS_REGION, AWS_DEFAULT_REGION]);
        }
        if self.access_key_id.is_none() {
            self.access_key_id = ctx.env_var(AWS_ACCESS_KEY_ID);
        }
        if self.secret_access_key.is_none() {
            self.secret_access_key = ctx.env_var(AWS_SECRET_ACCESS_KEY);
        }

        self
    }
}
