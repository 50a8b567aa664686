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

//! Signing and addressing requests to OpenStack Swift.
//!
//! This crate re-exports [`swiftsign_core`] and the Swift service crate, and
//! with the `default-context` feature offers ready-to-use constructors:
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> swiftsign::Result<()> {
//! let ctx = swiftsign::default_context();
//! let resolver = swiftsign::swift::default_resolver(&ctx);
//!
//! let helper =
//!     swiftsign::swift::HandleHelper::build_from_uri(&ctx, &resolver, "bucket/key").await?;
//! println!("{}", helper.url());
//! # Ok(())
//! # }
//! ```

pub use swiftsign_core::*;

pub mod swift;

#[cfg(feature = "default-context")]
use swiftsign_http_send_reqwest::ReqwestHttpSend;

/// Create a context backed by reqwest and the process environment.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
