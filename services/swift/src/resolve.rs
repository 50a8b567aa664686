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

use std::sync::Arc;

use log::debug;
use swiftsign_core::{Context, Error, Result};

use crate::cache::CredentialCache;
use crate::config::{Config, non_empty};
use crate::constants::DEFAULT_DOMAIN_NAME;
use crate::credential::{Credential, Identity};
use crate::provide_credential::{
    KeyExchangeCredentialProvider, KeystoneCredentialProvider, StaticCredentialProvider,
};

/// AuthMethod is the way credentials are obtained for a given [`Config`].
#[derive(Debug, Clone)]
pub enum AuthMethod {
    /// A pre-obtained storage URL and token.
    Static(StaticCredentialProvider),
    /// Keystone v3 password authentication with catalog lookup.
    Keystone(KeystoneCredentialProvider),
    /// Swift v1 user/key exchange.
    KeyExchange(KeyExchangeCredentialProvider),
}

impl AuthMethod {
    /// Select the auth method for `config`.
    ///
    /// Static credentials win, then Keystone, then key exchange. A method only
    /// applies when its endpoint, user and key are all set.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(storage_url) = non_empty(&config.storage_url) {
            let Some(token) = non_empty(&config.auth_token) else {
                return Err(Error::config_invalid("missing SWIFT_AUTH_TOKEN"));
            };
            return Ok(AuthMethod::Static(StaticCredentialProvider::new(
                storage_url,
                token,
            )));
        }

        let user = non_empty(&config.user);
        let key = non_empty(&config.key);

        if let (Some(auth_url), Some(user), Some(key)) = (non_empty(&config.auth_v3_url), user, key)
        {
            let user_domain_name =
                non_empty(&config.user_domain_name).unwrap_or(DEFAULT_DOMAIN_NAME);

            let mut provider = KeystoneCredentialProvider::new(auth_url)
                .with_username(user)
                .with_password(key)
                .with_user_domain_name(user_domain_name);
            if let Some(project_name) = non_empty(&config.project_name) {
                provider = provider.with_project_name(project_name);
            }
            if let Some(project_domain_name) = non_empty(&config.project_domain_name) {
                provider = provider.with_project_domain_name(project_domain_name);
            }
            if let Some(region_name) = non_empty(&config.region_name) {
                provider = provider.with_region_name(region_name);
            }
            if let Some(interface) = non_empty(&config.interface) {
                provider = provider.with_interface(interface);
            }
            return Ok(AuthMethod::Keystone(provider));
        }

        if let (Some(auth_url), Some(user), Some(key)) = (non_empty(&config.auth_v1_url), user, key)
        {
            return Ok(AuthMethod::KeyExchange(
                KeyExchangeCredentialProvider::new(auth_url)
                    .with_user(user)
                    .with_key(key),
            ));
        }

        Err(Error::config_invalid(
            "missing SWIFT_STORAGE_URL+SWIFT_AUTH_TOKEN, \
             SWIFT_AUTH_V3_URL+SWIFT_USER+SWIFT_KEY or \
             SWIFT_AUTH_V1_URL+SWIFT_USER+SWIFT_KEY configuration options",
        ))
    }

    /// The identity credentials of this method are cached under, `None` for
    /// static credentials which are never cached.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthMethod::Static(_) => None,
            AuthMethod::Keystone(p) => Some(p.identity()),
            AuthMethod::KeyExchange(p) => Some(p.identity()),
        }
    }

    /// Obtain credentials, contacting the auth service if needed.
    pub async fn provide_credential(&self, ctx: &Context) -> Result<Credential> {
        match self {
            AuthMethod::Static(p) => p.provide_credential(),
            AuthMethod::Keystone(p) => p.provide_credential(ctx).await,
            AuthMethod::KeyExchange(p) => p.provide_credential(ctx).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AuthMethod::Static(_) => "static",
            AuthMethod::Keystone(_) => "keystone",
            AuthMethod::KeyExchange(_) => "key exchange",
        }
    }
}

/// CredentialResolver turns a [`Config`] into a [`Credential`], reusing the
/// cached credential of the same identity when there is one.
///
/// ```no_run
/// # async fn example() -> swiftsign_core::Result<()> {
/// use swiftsign_core::{Context, OsEnv};
/// use swiftsign_swift::{Config, CredentialResolver};
///
/// let ctx = Context::new().with_env(OsEnv);
/// let resolver = CredentialResolver::new(Config::default().from_env(&ctx));
/// let cred = resolver.resolve(&ctx).await?;
/// println!("storage url: {}", cred.storage_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    config: Config,
    cache: Arc<CredentialCache>,
}

impl CredentialResolver {
    /// Create a resolver that shares the process-wide cache.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cache: CredentialCache::global(),
        }
    }

    /// Use `cache` instead of the process-wide cache.
    pub fn with_cache(mut self, cache: Arc<CredentialCache>) -> Self {
        self.cache = cache;
        self
    }

    /// The config this resolver was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cache this resolver reads and writes.
    pub fn cache(&self) -> &Arc<CredentialCache> {
        &self.cache
    }

    /// Resolve credentials, from the cache if the identity matches, otherwise
    /// by authenticating.
    ///
    /// A failed authentication is returned as-is; no other method is tried.
    pub async fn resolve(&self, ctx: &Context) -> Result<Credential> {
        let method = AuthMethod::from_config(&self.config)?;

        if let Some(identity) = method.identity() {
            if let Some(cred) = self.cache.get(identity) {
                return Ok(cred);
            }
        }

        self.provide_and_cache(ctx, &method).await
    }

    /// Authenticate again, ignoring whatever the cache holds.
    ///
    /// The new credential replaces the cached one.
    pub async fn authenticate(&self, ctx: &Context) -> Result<Credential> {
        let method = AuthMethod::from_config(&self.config)?;
        self.provide_and_cache(ctx, &method).await
    }

    /// Drop the cached credential, forcing the next resolve to authenticate.
    pub fn invalidate_cache(&self) {
        self.cache.clear();
    }

    async fn provide_and_cache(&self, ctx: &Context, method: &AuthMethod) -> Result<Credential> {
        debug!("resolving swift credential via {} auth", method.name());

        let cred = method.provide_credential(ctx).await?;

        if let Some(identity) = method.identity() {
            self.cache.put(identity.clone(), cred.clone());
        }

        Ok(cred)
    }
}
