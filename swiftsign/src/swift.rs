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

//! OpenStack Swift support with convenience APIs.

pub use swiftsign_swift::*;

#[cfg(feature = "default-context")]
use swiftsign_core::Context;

/// Create a credential resolver configured from `SWIFT_*` env vars.
///
/// The resolver shares the process-wide credential cache, so every handle
/// built for the same account reuses one token.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> swiftsign::Result<()> {
/// let ctx = swiftsign::default_context();
/// let resolver = swiftsign::swift::default_resolver(&ctx);
///
/// let helper =
///     swiftsign::swift::HandleHelper::open(&ctx, &resolver, "container", "object").await?;
///
/// let mut req = http::Request::builder()
///     .method("GET")
///     .uri(helper.url())
///     .body(())
///     .unwrap()
///     .into_parts()
///     .0;
///
/// helper.sign(&mut req)?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_resolver(ctx: &Context) -> CredentialResolver {
    CredentialResolver::new(Config::default().from_env(ctx))
}
