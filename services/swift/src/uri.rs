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

use percent_encoding::utf8_percent_encode;

use crate::constants::{SWIFT_QUERY_ENCODE_SET, SWIFT_URI_ENCODE_SET};

pub fn percent_encode_path(path: &str) -> String {
    utf8_percent_encode(path, &SWIFT_URI_ENCODE_SET).to_string()
}

pub fn percent_encode_query(query: &str) -> String {
    utf8_percent_encode(query, &SWIFT_QUERY_ENCODE_SET).to_string()
}

/// Build the URL of `object_key` in `bucket` under `storage_url`.
///
/// Empty bucket or object key segments are left out entirely.
pub fn build_resource_url(storage_url: &str, bucket: &str, object_key: &str) -> String {
    let mut url = storage_url.to_string();
    if !bucket.is_empty() {
        url.push('/');
        url.push_str(&percent_encode_path(bucket));
    }
    if !object_key.is_empty() {
        url.push('/');
        url.push_str(&percent_encode_path(object_key));
    }
    url
}

/// Render query parameters as `?k=v&k2=v2`, or an empty string if there are none.
pub fn build_query_string(params: &BTreeMap<String, String>) -> String {
    let mut query = String::new();
    for (k, v) in params {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(&percent_encode_query(k));
        query.push('=');
        query.push_str(&percent_encode_query(v));
    }
    query
}
