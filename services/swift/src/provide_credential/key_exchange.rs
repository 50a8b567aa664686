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

use bytes::Bytes;
use http::HeaderValue;
use log::debug;
use swiftsign_core::{Context, Error, Result};

use super::header_text;
use crate::constants::*;
use crate::credential::{Credential, Identity};

/// Credential provider that authenticates with the Swift key exchange (v1 auth).
///
/// This provider sends a GET to the auth URL with `X-Auth-User` and
/// `X-Auth-Key`, and reads the storage URL and token from the `X-Storage-Url`
/// and `X-Auth-Token` response headers.
#[derive(Debug, Clone)]
pub struct KeyExchangeCredentialProvider {
    identity: Identity,
}

impl KeyExchangeCredentialProvider {
    /// Create a new KeyExchangeCredentialProvider with the auth URL,
    /// e.g. `http://127.0.0.1:8080/auth/v1.0`.
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(auth_url, "", ""),
        }
    }

    /// Set the user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.identity.user = user.into();
        self
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.identity.key = key.into();
        self
    }

    /// The identity credentials from this provider are cached under.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    fn build_request(&self) -> Result<http::Request<Bytes>> {
        let user = HeaderValue::from_bytes(self.identity.user.as_bytes()).map_err(|e| {
            Error::request_invalid("failed to parse user as header value").with_source(e)
        })?;
        let mut key = HeaderValue::from_bytes(self.identity.key.as_bytes()).map_err(|e| {
            Error::request_invalid("failed to parse key as header value").with_source(e)
        })?;
        key.set_sensitive(true);

        http::Request::builder()
            .method(http::Method::GET)
            .uri(&self.identity.auth_url)
            .header(X_AUTH_USER, user)
            .header(X_AUTH_KEY, key)
            .body(Bytes::new())
            .map_err(|e| Error::request_invalid("failed to build HTTP request").with_source(e))
    }

    /// Exchange the user and key for a storage URL and token.
    pub async fn provide_credential(&self, ctx: &Context) -> Result<Credential> {
        let Identity { auth_url, user, key } = &self.identity;
        if auth_url.is_empty() || user.is_empty() || key.is_empty() {
            return Err(Error::config_invalid(
                "key exchange requires SWIFT_AUTH_V1_URL, SWIFT_USER and SWIFT_KEY",
            ));
        }

        debug!("authenticating with swift key exchange at {auth_url} as user {user}");

        let req = self.build_request()?;
        let resp = ctx.http_send_as_string(req).await?;

        let status = resp.status();
        let storage_url = header_text(resp.headers(), X_STORAGE_URL);
        let token = header_text(resp.headers(), X_AUTH_TOKEN);

        if !status.is_success() || storage_url.is_empty() || token.is_empty() {
            let msg = resp.into_body();
            debug!("swift key exchange failed with status {status}: {msg}");
            return Err(Error::credential_invalid("authentication failed")
                .with_context(format!("auth_url: {auth_url}"))
                .with_context(format!("status: {status}"))
                .with_diagnostic(msg));
        }

        debug!("swift key exchange successful, storage url is {storage_url}");

        Ok(Credential { storage_url, token })
    }
}
