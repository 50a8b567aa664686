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

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::credential::{Credential, Identity};

static GLOBAL_CACHE: LazyLock<Arc<CredentialCache>> =
    LazyLock::new(|| Arc::new(CredentialCache::new()));

/// CredentialCache remembers the last credential obtained by authentication
/// and the identity it was obtained with.
///
/// It holds a single slot: every [`put`](Self::put) replaces the previous
/// entry, and [`get`](Self::get) only hits when the requested identity equals
/// the stored one field by field. Entries never expire; callers that see a
/// rejected token call [`clear`](Self::clear) and authenticate again.
///
/// The lock is only held while copying the stored values in or out, never
/// while a network call is in flight. Two callers that miss at the same time
/// will both authenticate and the later write wins.
#[derive(Debug, Default)]
pub struct CredentialCache {
    slot: Mutex<Option<(Identity, Credential)>>,
}

impl CredentialCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache shared by resolvers that are not given their own.
    pub fn global() -> Arc<CredentialCache> {
        GLOBAL_CACHE.clone()
    }

    /// Return the cached credential if it was obtained with `identity`.
    pub fn get(&self, identity: &Identity) -> Option<Credential> {
        match &*self.lock() {
            Some((cached, cred)) if cached == identity => {
                debug!("swift credential cache hit for user {}", identity.user);
                Some(cred.clone())
            }
            _ => {
                debug!("swift credential cache miss for user {}", identity.user);
                None
            }
        }
    }

    /// Store `cred` as the credential of `identity`, replacing any previous entry.
    pub fn put(&self, identity: Identity, cred: Credential) {
        *self.lock() = Some((identity, cred));
    }

    /// Forget the cached entry.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    // The slot only holds plain strings that are replaced whole, so a panic
    // elsewhere can't leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<(Identity, Credential)>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn identity(key: &str) -> Identity {
        Identity::new("http://127.0.0.1:8080/auth/v1.0", "test:tester", key)
    }

    fn credential(token: &str) -> Credential {
        Credential::new("http://127.0.0.1:8080/v1/AUTH_test", token)
    }

    #[test]
    fn test_get_after_put() {
        let cache = CredentialCache::new();
        cache.put(identity("testing"), credential("AUTH_tk1"));

        assert_eq!(cache.get(&identity("testing")), Some(credential("AUTH_tk1")));
        // Reads don't consume the entry.
        assert_eq!(cache.get(&identity("testing")), Some(credential("AUTH_tk1")));
    }

    #[test]
    fn test_get_with_other_identity_misses() {
        let cache = CredentialCache::new();
        cache.put(identity("testing"), credential("AUTH_tk1"));

        assert_eq!(cache.get(&identity("other")), None);
        assert_eq!(
            cache.get(&Identity::new(
                "http://127.0.0.1:8080/auth/v1.0",
                "test:other",
                "testing"
            )),
            None
        );
    }

    #[test]
    fn test_put_replaces_previous_entry() {
        let cache = CredentialCache::new();
        cache.put(identity("first"), credential("AUTH_tk1"));
        cache.put(identity("second"), credential("AUTH_tk2"));

        assert_eq!(cache.get(&identity("first")), None);
        assert_eq!(cache.get(&identity("second")), Some(credential("AUTH_tk2")));
    }

    #[test]
    fn test_clear() {
        let cache = CredentialCache::new();
        cache.put(identity("testing"), credential("AUTH_tk1"));
        cache.clear();

        assert_eq!(cache.get(&identity("testing")), None);
        assert_eq!(cache.get(&Identity::default()), None);
    }

    #[test]
    fn test_empty_cache_misses_empty_identity() {
        let cache = CredentialCache::new();
        assert_eq!(cache.get(&Identity::default()), None);
    }

    #[test]
    fn test_concurrent_access_never_tears() {
        let cache = Arc::new(CredentialCache::new());

        let handles = (0..8)
            .map(|i| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        cache.put(identity("testing"), credential(&format!("AUTH_tk{i}")));
                        if let Some(cred) = cache.get(&identity("testing")) {
                            assert_eq!(cred.storage_url, "http://127.0.0.1:8080/v1/AUTH_test");
                            assert!(cred.token.starts_with("AUTH_tk"));
                        }
                    }
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().expect("thread must not panic");
        }
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&CredentialCache::global(), &CredentialCache::global()));
    }
}
