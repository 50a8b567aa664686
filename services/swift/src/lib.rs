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

//! OpenStack Swift authentication and request addressing.
//!
//! This crate obtains a storage URL and auth token for a Swift object store,
//! caches them for reuse across handles, and turns a bucket and object key
//! into the URL and headers of an authenticated request.
//!
//! Credentials come from one of three sources, picked from [`Config`]:
//!
//! - a pre-obtained storage URL and token ([`StaticCredentialProvider`]),
//! - Keystone v3 password authentication with a service catalog lookup
//!   ([`KeystoneCredentialProvider`]),
//! - the Swift v1 user/key exchange ([`KeyExchangeCredentialProvider`]).
//!
//! ## Example
//!
//! ```no_run
//! use swiftsign_core::{Context, OsEnv, Result};
//! use swiftsign_http_send_reqwest::ReqwestHttpSend;
//! use swiftsign_swift::{Config, CredentialResolver, HandleHelper};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!     let resolver = CredentialResolver::new(Config::default().from_env(&ctx));
//!
//!     let helper = HandleHelper::build_from_uri(&ctx, &resolver, "bucket/path/to/object").await?;
//!
//!     let req = http::Request::get(helper.url()).body(()).unwrap();
//!     let (mut parts, _body) = req.into_parts();
//!     helper.sign(&mut parts)?;
//!
//!     println!("signed request: {parts:?}");
//!     Ok(())
//! }
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;
pub use credential::Identity;

mod cache;
pub use cache::CredentialCache;

mod provide_credential;
pub use provide_credential::*;

mod resolve;
pub use resolve::AuthMethod;
pub use resolve::CredentialResolver;

mod uri;
pub use uri::build_resource_url;

mod sign_request;
pub use sign_request::build_auth_headers;
pub use sign_request::sign_request;

mod handle;
pub use handle::HandleHelper;
