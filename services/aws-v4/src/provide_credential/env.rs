// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{constants::*, Credential};
use sigv4_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads AWS credentials from a pair of environment variables.
///
/// Two well-known pairs exist:
/// - [`EnvCredentialProvider::new`]: `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
/// - [`EnvCredentialProvider::legacy`]: `AWS_ACCESS_KEY` and `AWS_SECRET_KEY`
///
/// A credential is returned only if both variables of the pair are set and
/// non-empty.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    access_key_var: &'static str,
    secret_key_var: &'static str,
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCredentialProvider {
    /// Create a provider reading `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
    pub fn new() -> Self {
        Self {
            access_key_var: AWS_ACCESS_KEY_ID,
            secret_key_var: AWS_SECRET_ACCESS_KEY,
        }
    }

    /// Create a provider reading `AWS_ACCESS_KEY` and `AWS_SECRET_KEY`.
    pub fn legacy() -> Self {
        Self {
            access_key_var: AWS_ACCESS_KEY,
            secret_key_var: AWS_SECRET_KEY,
        }
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var(self.access_key_var);
        let secret_access_key = ctx.env_var(self.secret_key_var);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => Ok(Some(Credential {
                access_key_id: ak,
                secret_access_key: sk,
            })),
            _ => Ok(None),
        }
    }
}
