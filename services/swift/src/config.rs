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

use std::fmt::{self, Debug};

use swiftsign_core::Context;
use swiftsign_core::utils::Redact;

use crate::constants::*;

/// Config carries every option that decides how swift credentials are obtained.
///
/// Fields that are already set win over the environment, and empty values are
/// treated as absent.
#[derive(Clone, Default)]
pub struct Config {
    /// A pre-obtained storage URL, used verbatim together with `auth_token`.
    ///
    /// Loaded from env: [`SWIFT_STORAGE_URL`]
    pub storage_url: Option<String>,
    /// A pre-obtained auth token, used verbatim together with `storage_url`.
    ///
    /// Loaded from env: [`SWIFT_AUTH_TOKEN`]
    pub auth_token: Option<String>,
    /// The key exchange (v1) endpoint, e.g. `http://127.0.0.1:8080/auth/v1.0`.
    ///
    /// Loaded from env: [`SWIFT_AUTH_V1_URL`]
    pub auth_v1_url: Option<String>,
    /// The Keystone v3 token endpoint, e.g. `https://keystone.example.com/v3/auth/tokens`.
    ///
    /// Loaded from env: [`SWIFT_AUTH_V3_URL`]
    pub auth_v3_url: Option<String>,
    /// The user name for both exchanges.
    ///
    /// Loaded from env: [`SWIFT_USER`]
    pub user: Option<String>,
    /// The secret key (v1) or password (v3).
    ///
    /// Loaded from env: [`SWIFT_KEY`]
    pub key: Option<String>,
    /// The user domain name. Defaults to "Default" if not set.
    ///
    /// Loaded from env: [`SWIFT_USER_DOMAIN_NAME`]
    pub user_domain_name: Option<String>,
    /// The project name for scoped tokens.
    ///
    /// Loaded from env: [`SWIFT_PROJECT_NAME`]
    pub project_name: Option<String>,
    /// The project domain name. Falls back to `user_domain_name` if not set.
    ///
    /// Loaded from env: [`SWIFT_PROJECT_DOMAIN_NAME`]
    pub project_domain_name: Option<String>,
    /// The region whose object-store endpoint should be used.
    ///
    /// Loaded from env: [`SWIFT_REGION_NAME`]
    pub region_name: Option<String>,
    /// Restrict catalog endpoints to this interface (`public`, `internal`, `admin`).
    ///
    /// Loaded from env: [`SWIFT_INTERFACE`]
    pub interface: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("storage_url", &self.storage_url)
            .field("auth_token", &Redact::from(&self.auth_token))
            .field("auth_v1_url", &self.auth_v1_url)
            .field("auth_v3_url", &self.auth_v3_url)
            .field("user", &self.user)
            .field("key", &Redact::from(&self.key))
            .field("user_domain_name", &self.user_domain_name)
            .field("project_name", &self.project_name)
            .field("project_domain_name", &self.project_domain_name)
            .field("region_name", &self.region_name)
            .field("interface", &self.interface)
            .finish()
    }
}

impl Config {
    /// Load config from the environment of `ctx`.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let load = |field: &mut Option<String>, key: &str| {
            if field.as_deref().is_some_and(|v| !v.is_empty()) {
                return;
            }
            *field = ctx.env_var(key).filter(|v| !v.is_empty());
        };

        load(&mut self.storage_url, SWIFT_STORAGE_URL);
        load(&mut self.auth_token, SWIFT_AUTH_TOKEN);
        load(&mut self.auth_v1_url, SWIFT_AUTH_V1_URL);
        load(&mut self.auth_v3_url, SWIFT_AUTH_V3_URL);
        load(&mut self.user, SWIFT_USER);
        load(&mut self.key, SWIFT_KEY);
        load(&mut self.user_domain_name, SWIFT_USER_DOMAIN_NAME);
        load(&mut self.project_name, SWIFT_PROJECT_NAME);
        load(&mut self.project_domain_name, SWIFT_PROJECT_DOMAIN_NAME);
        load(&mut self.region_name, SWIFT_REGION_NAME);
        load(&mut self.interface, SWIFT_INTERFACE);

        self
    }

    /// Set the static storage URL and token.
    pub fn with_static(
        mut self,
        storage_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        self.storage_url = Some(storage_url.into());
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Set the key exchange endpoint and its user and key.
    pub fn with_key_exchange(
        mut self,
        auth_url: impl Into<String>,
        user: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.auth_v1_url = Some(auth_url.into());
        self.user = Some(user.into());
        self.key = Some(key.into());
        self
    }

    /// Set the Keystone v3 endpoint and its user and password.
    pub fn with_keystone(
        mut self,
        auth_url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth_v3_url = Some(auth_url.into());
        self.user = Some(user.into());
        self.key = Some(password.into());
        self
    }

    /// Set the preferred region.
    pub fn with_region_name(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = Some(region_name.into());
        self
    }

    /// Set the project that Keystone tokens are scoped to.
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }
}

/// Returns the value if it is set and not empty.
pub(crate) fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|v| !v.is_empty())
}
