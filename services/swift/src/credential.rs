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

use swiftsign_core::utils::Redact;

/// Credential is a resolved storage root URL paired with the token that
/// authorizes requests against it.
///
/// An empty field means the credential is absent or invalid.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// The storage root URL, e.g. `https://swift.example.com/v1/AUTH_test`.
    pub storage_url: String,
    /// The X-Auth-Token value.
    pub token: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("storage_url", &self.storage_url)
            .field("token", &Redact::from(&self.token))
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    pub fn new(storage_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            storage_url: storage_url.into(),
            token: token.into(),
        }
    }

    /// Check if both the storage URL and the token are present.
    pub fn is_valid(&self) -> bool {
        !self.storage_url.is_empty() && !self.token.is_empty()
    }
}

/// Identity is the configuration that a credential was obtained with.
///
/// A cached credential may only be reused by an identical identity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Identity {
    /// The authentication endpoint.
    pub auth_url: String,
    /// The user name.
    pub user: String,
    /// The secret key or password.
    pub key: String,
}

impl Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("auth_url", &self.auth_url)
            .field("user", &self.user)
            .field("key", &Redact::from(&self.key))
            .finish()
    }
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        auth_url: impl Into<String>,
        user: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            auth_url: auth_url.into(),
            user: user.into(),
            key: key.into(),
        }
    }
}
