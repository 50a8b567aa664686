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

use swiftsign_core::{Error, Result};

use crate::credential::Credential;

/// StaticCredentialProvider returns a pre-obtained storage URL and token
/// without contacting any service.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    storage_url: String,
    token: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the storage URL and token.
    pub fn new(storage_url: &str, token: &str) -> Self {
        Self {
            storage_url: storage_url.to_string(),
            token: token.to_string(),
        }
    }

    /// Return the configured credential verbatim.
    pub fn provide_credential(&self) -> Result<Credential> {
        let cred = Credential::new(&self.storage_url, &self.token);
        if !cred.is_valid() {
            return Err(Error::config_invalid(
                "static credential requires both SWIFT_STORAGE_URL and SWIFT_AUTH_TOKEN",
            ));
        }
        Ok(cred)
    }
}
