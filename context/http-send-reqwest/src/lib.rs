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

//! Reqwest-based HTTP transport for swiftsign.
//!
//! [`ReqwestHttpSend`] implements [`HttpSend`] on top of a [`reqwest::Client`].
//! Connection pooling, TLS, proxies and timeouts are configured on the client
//! and are not this crate's concern.
//!
//! ```no_run
//! use swiftsign_core::Context;
//! use swiftsign_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use swiftsign_core::{Error, HttpSend, Result};

/// HTTP transport backed by a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Wrap a preconfigured client.
    ///
    /// Auth endpoints can be slow to answer; bound them with a client timeout:
    ///
    /// ```no_run
    /// use std::time::Duration;
    ///
    /// use swiftsign_http_send_reqwest::ReqwestHttpSend;
    ///
    /// let client = reqwest::Client::builder()
    ///     .connect_timeout(Duration::from_secs(5))
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .expect("client must build");
    /// let http_send = ReqwestHttpSend::new(client);
    /// ```
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let method = req.method().clone();
        let uri = req.uri().clone();

        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;

        let resp = self.client.execute(req).await.map_err(|e| {
            Error::transport("failed to send HTTP request")
                .with_context(format!("{method} {uri}"))
                .with_source(e)
        })?;

        debug!("{method} {uri} returned {}", resp.status());

        let resp: http::Response<_> = resp.into();
        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to collect response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
