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

mod r#static;
pub use r#static::StaticCredentialProvider;

mod key_exchange;
pub use key_exchange::KeyExchangeCredentialProvider;

mod keystone;
pub use keystone::CatalogEntry;
pub use keystone::Endpoint;
pub use keystone::KeystoneCredentialProvider;
pub use keystone::find_storage_url;

/// Read a response header, returning an empty string if it's missing or not text.
fn header_text(headers: &http::HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
