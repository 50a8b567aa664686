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

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::env::{Env, NoopEnv};
use crate::{Error, Result};

/// HttpSend is the transport used to reach authentication services.
///
/// Implementations must return `Err` only when the round trip itself failed.
/// Any response the server produced, whatever its status, is returned as `Ok`.
#[async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send an HTTP request and collect the full response body.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Context carries the runtime collaborators a credential resolution needs.
#[derive(Debug, Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context without transport and with an empty environment.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
        }
    }

    /// Set the HTTP transport.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Set the environment used for configuration lookup.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send an HTTP request through the configured transport.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Send an HTTP request and decode the response body as a lossy UTF-8 string.
    pub async fn http_send_as_string(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<String>> {
        let (parts, body) = self.http.http_send(req).await?.into_parts();
        let body = String::from_utf8_lossy(&body).to_string();
        Ok(http::Response::from_parts(parts, body))
    }

    /// Get an environment variable.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// Transport used when none was configured; every send fails.
#[derive(Debug, Clone, Copy, Default)]
struct NoopHttpSend;

#[async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport(
            "no http transport configured, call Context::with_http_send first",
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{ErrorKind, StaticEnv};

    #[derive(Debug)]
    struct EchoHttpSend;

    #[async_trait]
    impl HttpSend for EchoHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            Ok(http::Response::builder()
                .status(http::StatusCode::OK)
                .body(req.into_body())
                .expect("response must build"))
        }
    }

    #[tokio::test]
    async fn test_context_without_transport_fails() {
        let ctx = Context::new();
        let req = http::Request::builder()
            .uri("http://127.0.0.1:8080/auth/v1.0")
            .body(Bytes::new())
            .unwrap();

        let err = ctx.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_context_http_send_as_string() {
        let ctx = Context::new().with_http_send(EchoHttpSend);
        let req = http::Request::builder()
            .uri("http://127.0.0.1:8080/auth/v1.0")
            .body(Bytes::from_static(b"hello swift"))
            .unwrap();

        let resp = ctx.http_send_as_string(req).await.unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.body(), "hello swift");
    }

    #[test]
    fn test_context_env_var() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("SWIFT_USER".to_string(), "test:tester".to_string())]),
        });

        assert_eq!(ctx.env_var("SWIFT_USER").as_deref(), Some("test:tester"));
        assert_eq!(ctx.env_var("SWIFT_KEY"), None);
        assert_eq!(Context::new().env_var("SWIFT_USER"), None);
    }
}
