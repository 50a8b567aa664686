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

use std::collections::BTreeMap;

use http::HeaderMap;
use log::debug;
use swiftsign_core::{Context, Result};

use crate::credential::Credential;
use crate::resolve::CredentialResolver;
use crate::sign_request::{build_auth_headers, sign_request};
use crate::uri::{build_query_string, build_resource_url};

/// HandleHelper holds everything needed to address one remote object: the
/// resolved credential, the bucket and object key, and the resource URL
/// derived from them.
///
/// The URL is recomputed whenever one of its inputs changes, so it is never
/// stale.
#[derive(Debug, Clone)]
pub struct HandleHelper {
    credential: Credential,
    bucket: String,
    object_key: String,
    query_parameters: BTreeMap<String, String>,
    url: String,
}

impl HandleHelper {
    /// Create a helper from an already resolved credential.
    pub fn new(
        credential: Credential,
        bucket: impl Into<String>,
        object_key: impl Into<String>,
    ) -> Self {
        let mut helper = Self {
            credential,
            bucket: bucket.into(),
            object_key: object_key.into(),
            query_parameters: BTreeMap::new(),
            url: String::new(),
        };
        helper.rebuild_url();
        helper
    }

    /// Resolve credentials and address `object_key` in `bucket`.
    pub async fn open(
        ctx: &Context,
        resolver: &CredentialResolver,
        bucket: &str,
        object_key: &str,
    ) -> Result<Self> {
        let credential = resolver.resolve(ctx).await?;
        Ok(Self::new(credential, bucket, object_key))
    }

    /// Resolve credentials and address a `bucket/object/key` path.
    ///
    /// Everything before the first `/` is the bucket, the rest is the object key.
    pub async fn build_from_uri(
        ctx: &Context,
        resolver: &CredentialResolver,
        uri: &str,
    ) -> Result<Self> {
        let (bucket, object_key) = uri.split_once('/').unwrap_or((uri, ""));
        Self::open(ctx, resolver, bucket, object_key).await
    }

    /// The resource URL, including the query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The bucket.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key.
    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    /// The credential requests are signed with.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Point the helper at another object without authenticating again.
    pub fn set_bucket_object_key(
        &mut self,
        bucket: impl Into<String>,
        object_key: impl Into<String>,
    ) {
        self.bucket = bucket.into();
        self.object_key = object_key.into();
        self.rebuild_url();
    }

    /// Add or replace a query parameter.
    pub fn add_query_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_parameters.insert(key.into(), value.into());
        self.rebuild_url();
    }

    /// Remove all query parameters.
    pub fn reset_query_parameters(&mut self) {
        self.query_parameters.clear();
        self.rebuild_url();
    }

    /// The headers to send with every request for this object.
    pub fn headers(&self) -> Result<HeaderMap> {
        build_auth_headers(&self.credential.token)
    }

    /// Insert the auth headers into an outgoing request.
    pub fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        sign_request(req, &self.credential.token)
    }

    /// Replace a rejected credential with a freshly authenticated one.
    ///
    /// The cache is cleared first so that other handles of the same identity
    /// don't keep picking up the rejected token.
    pub async fn reauthenticate(
        &mut self,
        ctx: &Context,
        resolver: &CredentialResolver,
    ) -> Result<()> {
        debug!("re-authenticating swift handle for {}", self.url);

        resolver.invalidate_cache();
        self.credential = resolver.resolve(ctx).await?;
        self.rebuild_url();
        Ok(())
    }

    fn rebuild_url(&mut self) {
        self.url = build_resource_url(
            &self.credential.storage_url,
            &self.bucket,
            &self.object_key,
        );
        self.url.push_str(&build_query_string(&self.query_parameters));
    }
}
