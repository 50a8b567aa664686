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

use http::{HeaderMap, HeaderValue, header};
use swiftsign_core::{Error, Result};

use crate::constants::X_AUTH_TOKEN;

/// Build the headers every authenticated swift request carries: `Accept:
/// application/json` and `X-Auth-Token` with `token` verbatim.
pub fn build_auth_headers(token: &str) -> Result<HeaderMap> {
    let mut value: HeaderValue = token.parse().map_err(|e| {
        Error::request_invalid("failed to parse token as header value").with_source(e)
    })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(X_AUTH_TOKEN, value);
    Ok(headers)
}

/// Insert the auth headers for `token` into `req`, replacing existing ones.
pub fn sign_request(req: &mut http::request::Parts, token: &str) -> Result<()> {
    for (name, value) in build_auth_headers(token)? {
        if let Some(name) = name {
            req.headers.insert(name, value);
        }
    }
    Ok(())
}
