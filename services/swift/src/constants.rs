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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values used in swift services.
pub const SWIFT_STORAGE_URL: &str = "SWIFT_STORAGE_URL";
pub const SWIFT_AUTH_TOKEN: &str = "SWIFT_AUTH_TOKEN";
pub const SWIFT_AUTH_V1_URL: &str = "SWIFT_AUTH_V1_URL";
pub const SWIFT_AUTH_V3_URL: &str = "SWIFT_AUTH_V3_URL";
pub const SWIFT_USER: &str = "SWIFT_USER";
pub const SWIFT_KEY: &str = "SWIFT_KEY";
pub const SWIFT_USER_DOMAIN_NAME: &str = "SWIFT_USER_DOMAIN_NAME";
pub const SWIFT_PROJECT_NAME: &str = "SWIFT_PROJECT_NAME";
pub const SWIFT_PROJECT_DOMAIN_NAME: &str = "SWIFT_PROJECT_DOMAIN_NAME";
pub const SWIFT_REGION_NAME: &str = "SWIFT_REGION_NAME";
pub const SWIFT_INTERFACE: &str = "SWIFT_INTERFACE";

// Headers used in swift services.
pub const X_AUTH_USER: &str = "x-auth-user";
pub const X_AUTH_KEY: &str = "x-auth-key";
pub const X_AUTH_TOKEN: &str = "x-auth-token";
pub const X_STORAGE_URL: &str = "x-storage-url";
pub const X_SUBJECT_TOKEN: &str = "x-subject-token";

pub const DEFAULT_DOMAIN_NAME: &str = "Default";

/// Service names that identify object storage in a Keystone catalog.
pub const OBJECT_STORE_SERVICE_NAME: &str = "swift";
pub const OBJECT_STORE_SERVICE_TYPE: &str = "object-store";

/// Bytes kept verbatim in bucket and object key path segments.
pub static SWIFT_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Bytes kept verbatim in query keys and values.
pub static SWIFT_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');
