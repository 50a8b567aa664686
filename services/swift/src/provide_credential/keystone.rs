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

use bytes::Bytes;
use http::header;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use swiftsign_core::{Context, Error, Result};

use super::header_text;
use crate::constants::*;
use crate::credential::{Credential, Identity};

/// Credential provider that authenticates against a Keystone v3 identity service.
///
/// This provider POSTs password credentials to the configured token endpoint,
/// takes the token from the `X-Subject-Token` response header and picks the
/// storage URL from the object-store entry of the returned service catalog.
#[derive(Debug, Clone)]
pub struct KeystoneCredentialProvider {
    identity: Identity,
    user_domain_name: String,
    project_name: Option<String>,
    project_domain_name: Option<String>,
    region_name: Option<String>,
    interface: Option<String>,
}

impl KeystoneCredentialProvider {
    /// Create a new KeystoneCredentialProvider with the Keystone token endpoint.
    ///
    /// The URL is used as-is, e.g. `https://keystone.example.com/v3/auth/tokens`.
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(auth_url, "", ""),
            user_domain_name: DEFAULT_DOMAIN_NAME.to_string(),
            project_name: None,
            project_domain_name: None,
            region_name: None,
            interface: None,
        }
    }

    /// Set the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.identity.user = username.into();
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.identity.key = password.into();
        self
    }

    /// Set the user domain name.
    pub fn with_user_domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.user_domain_name = domain_name.into();
        self
    }

    /// Set the project name for scoped tokens.
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    /// Set the project domain name.
    pub fn with_project_domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.project_domain_name = Some(domain_name.into());
        self
    }

    /// Prefer the object-store endpoint of this region.
    pub fn with_region_name(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = Some(region_name.into());
        self
    }

    /// Only consider endpoints with this interface (`public`, `internal`, `admin`).
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// The identity credentials from this provider are cached under.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    fn build_auth_request(&self) -> keystone_v3::AuthRequest {
        let scope = self
            .project_name
            .as_ref()
            .map(|project_name| keystone_v3::Scope {
                project: keystone_v3::Project {
                    name: project_name.clone(),
                    domain: keystone_v3::Domain {
                        name: self
                            .project_domain_name
                            .clone()
                            .unwrap_or_else(|| self.user_domain_name.clone()),
                    },
                },
            });

        keystone_v3::AuthRequest {
            auth: keystone_v3::Auth {
                identity: keystone_v3::Identity {
                    methods: vec!["password".to_string()],
                    password: keystone_v3::Password {
                        user: keystone_v3::User {
                            name: self.identity.user.clone(),
                            password: self.identity.key.clone(),
                            domain: keystone_v3::Domain {
                                name: self.user_domain_name.clone(),
                            },
                        },
                    },
                },
                scope,
            },
        }
    }

    /// Exchange the password for a token and look up the storage URL in the catalog.
    pub async fn provide_credential(&self, ctx: &Context) -> Result<Credential> {
        let Identity { auth_url, user, key } = &self.identity;
        if auth_url.is_empty() || user.is_empty() || key.is_empty() {
            return Err(Error::config_invalid(
                "keystone authentication requires SWIFT_AUTH_V3_URL, SWIFT_USER and SWIFT_KEY",
            ));
        }

        let body = serde_json::to_vec(&self.build_auth_request()).map_err(|e| {
            Error::unexpected("failed to serialize auth request").with_source(e)
        })?;

        debug!("authenticating with Keystone at {auth_url} as user {user}");

        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri(auth_url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))
            .map_err(|e| Error::request_invalid("failed to build HTTP request").with_source(e))?;

        let resp = ctx.http_send_as_string(req).await?;

        let status = resp.status();
        let token = header_text(resp.headers(), X_SUBJECT_TOKEN);
        let failed = |reason: &str| {
            let msg = resp.body().clone();
            debug!("Keystone authentication failed ({reason}): {msg}");
            Error::credential_invalid(format!("authentication failed: {reason}"))
                .with_context(format!("auth_url: {auth_url}"))
                .with_context(format!("status: {status}"))
                .with_diagnostic(msg)
        };

        if !status.is_success() {
            return Err(failed("unexpected status"));
        }

        let token_response: keystone_v3::TokenResponse = serde_json::from_str(resp.body())
            .map_err(|e| failed("response is not a Keystone token document").with_source(e))?;

        let catalog = token_response
            .token
            .and_then(|token| token.catalog)
            .ok_or_else(|| failed("response carries no service catalog"))?;

        let storage_url = object_store_entry(&catalog)
            .and_then(|entry| {
                find_storage_url(
                    std::slice::from_ref(&entry),
                    self.region_name.as_deref(),
                    self.interface.as_deref(),
                )
                .map(str::to_string)
            })
            .map_err(|e| e.with_context(format!("auth_url: {auth_url}")))?;

        if storage_url.is_empty() {
            return Err(failed("object-store endpoint has an empty url"));
        }
        if token.is_empty() {
            return Err(failed("response is missing the X-Subject-Token header"));
        }

        debug!("Keystone authentication successful, storage url is {storage_url}");

        Ok(Credential { storage_url, token })
    }
}

/// Pull the object-store service out of a raw catalog.
///
/// Only the object-store entry has to be well-formed; other services are
/// skipped without being inspected.
fn object_store_entry(catalog: &Value) -> Result<CatalogEntry> {
    let entries = catalog
        .as_array()
        .ok_or_else(|| Error::address_invalid("service catalog is not an array"))?;

    debug!(
        "Keystone authentication returned a catalog with {} services",
        entries.len()
    );

    let entry = entries
        .iter()
        .find(|entry| {
            entry.get("name").and_then(Value::as_str) == Some(OBJECT_STORE_SERVICE_NAME)
                || entry.get("type").and_then(Value::as_str) == Some(OBJECT_STORE_SERVICE_TYPE)
        })
        .ok_or_else(|| Error::address_invalid("object-store service not found in catalog"))?;

    CatalogEntry::deserialize(entry).map_err(|e| {
        Error::address_invalid("object-store service entry is malformed").with_source(e)
    })
}

/// Pick the storage URL out of a Keystone service catalog.
///
/// The first endpoint of the object-store service that satisfies both the
/// optional region and the optional interface wins.
pub fn find_storage_url<'a>(
    catalog: &'a [CatalogEntry],
    region: Option<&str>,
    interface: Option<&str>,
) -> Result<&'a str> {
    let service = catalog
        .iter()
        .find(|entry| entry.is_object_store())
        .ok_or_else(|| Error::address_invalid("object-store service not found in catalog"))?;

    if service.endpoints.is_empty() {
        return Err(Error::address_invalid(
            "object-store service has no endpoints in catalog",
        ));
    }

    service
        .endpoints
        .iter()
        .find(|ep| ep.matches(region, interface))
        .map(|ep| ep.url.as_str())
        .ok_or_else(|| {
            Error::address_invalid("no object-store endpoint matches the configured filters")
                .with_context(format!("region: {}", region.unwrap_or("<any>")))
                .with_context(format!("interface: {}", interface.unwrap_or("<any>")))
        })
}

/// A service entry from the Keystone service catalog.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogEntry {
    /// The service name (e.g. "swift").
    #[serde(default)]
    pub name: String,
    /// The service type (e.g. "object-store", "compute", "identity").
    #[serde(rename = "type", default)]
    pub service_type: String,
    /// The list of endpoints for this service.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl CatalogEntry {
    fn is_object_store(&self) -> bool {
        self.name == OBJECT_STORE_SERVICE_NAME || self.service_type == OBJECT_STORE_SERVICE_TYPE
    }
}

/// A single endpoint within a catalog entry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Endpoint {
    /// The endpoint URL.
    #[serde(default)]
    pub url: String,
    /// The interface type (e.g. "public", "internal", "admin").
    #[serde(default)]
    pub interface: Option<String>,
    /// The region identifier.
    #[serde(default)]
    pub region: Option<String>,
    /// The region ID.
    #[serde(default)]
    pub region_id: Option<String>,
    /// The endpoint name; some deployments put the region here.
    #[serde(default)]
    pub name: Option<String>,
}

impl Endpoint {
    fn matches(&self, region: Option<&str>, interface: Option<&str>) -> bool {
        let in_region = region.is_none_or(|region| {
            [&self.region, &self.region_id, &self.name]
                .into_iter()
                .any(|v| v.as_deref() == Some(region))
        });
        let on_interface =
            interface.is_none_or(|interface| self.interface.as_deref() == Some(interface));

        in_region && on_interface
    }
}

/// Keystone v3 authentication request/response types.
mod keystone_v3 {
    use serde::{Deserialize, Serialize};

    /// Top-level authentication request body.
    #[derive(Serialize)]
    pub(super) struct AuthRequest {
        pub(super) auth: Auth,
    }

    #[derive(Serialize)]
    pub(super) struct Auth {
        pub(super) identity: Identity,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub(super) scope: Option<Scope>,
    }

    /// Only the password method is supported.
    #[derive(Serialize)]
    pub(super) struct Identity {
        pub(super) methods: Vec<String>,
        pub(super) password: Password,
    }

    #[derive(Serialize)]
    pub(super) struct Password {
        pub(super) user: User,
    }

    #[derive(Serialize)]
    pub(super) struct User {
        pub(super) name: String,
        pub(super) password: String,
        pub(super) domain: Domain,
    }

    #[derive(Serialize)]
    pub(super) struct Domain {
        pub(super) name: String,
    }

    #[derive(Serialize)]
    pub(super) struct Scope {
        pub(super) project: Project,
    }

    #[derive(Serialize)]
    pub(super) struct Project {
        pub(super) name: String,
        pub(super) domain: Domain,
    }

    /// The top-level token response from Keystone.
    #[derive(Deserialize)]
    pub(super) struct TokenResponse {
        #[serde(default)]
        pub(super) token: Option<TokenBody>,
    }

    #[derive(Deserialize)]
    pub(super) struct TokenBody {
        #[serde(default)]
        pub(super) catalog: Option<serde_json::Value>,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use swiftsign_core::{ErrorKind, HttpSend};

    use super::*;

    const TOKEN_RESPONSE: &str = r#"{
        "token": {
            "methods": ["password"],
            "expires_at": "2025-01-15T12:00:00.000000Z",
            "catalog": [
                {
                    "type": "identity",
                    "name": "keystone",
                    "endpoints": [
                        {
                            "interface": "public",
                            "url": "https://keystone.example.com/v3",
                            "region": "RegionOne"
                        }
                    ]
                },
                {
                    "type": "object-store",
                    "name": "swift",
                    "endpoints": [
                        {
                            "interface": "public",
                            "url": "https://swift-us.example.com/v1/AUTH_test",
                            "region": "us-east-1",
                            "region_id": "us-east-1"
                        },
                        {
                            "interface": "internal",
                            "url": "http://swift-internal-us:8080/v1/AUTH_test",
                            "region": "us-east-1",
                            "region_id": "us-east-1"
                        },
                        {
                            "interface": "public",
                            "url": "https://swift-eu.example.com/v1/AUTH_test",
                            "region": "eu-west-1",
                            "region_id": "eu-west-1"
                        }
                    ]
                }
            ]
        }
    }"#;

    #[derive(Clone, Debug)]
    struct CaptureHttpSend {
        request: Arc<Mutex<Option<http::Request<Bytes>>>>,
        status: http::StatusCode,
        subject_token: Option<&'static str>,
        body: &'static str,
    }

    impl CaptureHttpSend {
        fn new(
            status: http::StatusCode,
            subject_token: Option<&'static str>,
            body: &'static str,
        ) -> Self {
            Self {
                request: Arc::default(),
                status,
                subject_token,
                body,
            }
        }

        fn request(&self) -> http::Request<Bytes> {
            self.request
                .lock()
                .unwrap()
                .take()
                .expect("http_send must capture the request")
        }
    }

    #[async_trait]
    impl HttpSend for CaptureHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            *self.request.lock().unwrap() = Some(req);

            let mut builder = http::Response::builder()
                .status(self.status)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(token) = self.subject_token {
                builder = builder.header("X-Subject-Token", token);
            }
            Ok(builder
                .body(Bytes::from_static(self.body.as_bytes()))
                .expect("response must build"))
        }
    }

    fn provider() -> KeystoneCredentialProvider {
        KeystoneCredentialProvider::new("https://keystone.example.com/v3/auth/tokens")
            .with_username("testuser")
            .with_password("testpass")
    }

    fn catalog(json: &str) -> Vec<CatalogEntry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_auth_request_unscoped() {
        let provider = provider().with_user_domain_name("Default");

        let req = provider.build_auth_request();
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["auth"]["identity"]["methods"][0], "password");
        assert_eq!(
            json["auth"]["identity"]["password"]["user"]["name"],
            "testuser"
        );
        assert_eq!(
            json["auth"]["identity"]["password"]["user"]["password"],
            "testpass"
        );
        assert_eq!(
            json["auth"]["identity"]["password"]["user"]["domain"]["name"],
            "Default"
        );
        assert!(json["auth"]["scope"].is_null());
    }

    #[test]
    fn test_build_auth_request_project_scoped() {
        let provider = provider()
            .with_user_domain_name("users")
            .with_project_name("myproject");

        let json = serde_json::to_value(provider.build_auth_request()).unwrap();
        assert_eq!(json["auth"]["scope"]["project"]["name"], "myproject");
        // Project domain falls back to the user domain.
        assert_eq!(json["auth"]["scope"]["project"]["domain"]["name"], "users");

        let provider = provider.with_project_domain_name("projects");
        let json = serde_json::to_value(provider.build_auth_request()).unwrap();
        assert_eq!(
            json["auth"]["scope"]["project"]["domain"]["name"],
            "projects"
        );
    }

    #[test]
    fn test_find_storage_url_single_endpoint_no_region() {
        let catalog = catalog(
            r#"[{"name": "swift", "type": "object-store", "endpoints": [
                {"url": "https://swift.example.com/v1/AUTH_test", "region": "RegionOne"}
            ]}]"#,
        );

        assert_eq!(
            find_storage_url(&catalog, None, None).unwrap(),
            "https://swift.example.com/v1/AUTH_test"
        );
    }

    #[test]
    fn test_find_storage_url_defaults_to_first_endpoint() {
        let catalog = catalog(
            r#"[{"name": "swift", "endpoints": [
                {"url": "https://swift-a.example.com/v1/AUTH_test"},
                {"url": "https://swift-b.example.com/v1/AUTH_test"}
            ]}]"#,
        );

        assert_eq!(
            find_storage_url(&catalog, None, None).unwrap(),
            "https://swift-a.example.com/v1/AUTH_test"
        );
    }

    #[test]
    fn test_find_storage_url_in_region() {
        let resp: keystone_v3::TokenResponse = serde_json::from_str(TOKEN_RESPONSE).unwrap();
        let catalog: Vec<CatalogEntry> =
            serde_json::from_value(resp.token.unwrap().catalog.unwrap()).unwrap();

        assert_eq!(
            find_storage_url(&catalog, Some("eu-west-1"), None).unwrap(),
            "https://swift-eu.example.com/v1/AUTH_test"
        );
        assert_eq!(
            find_storage_url(&catalog, Some("us-east-1"), None).unwrap(),
            "https://swift-us.example.com/v1/AUTH_test"
        );
        assert_eq!(
            find_storage_url(&catalog, Some("us-east-1"), Some("internal")).unwrap(),
            "http://swift-internal-us:8080/v1/AUTH_test"
        );
    }

    #[test]
    fn test_find_storage_url_matches_region_beyond_first_endpoint() {
        let catalog = catalog(
            r#"[{"name": "swift", "endpoints": [
                {"name": "RegionOne", "url": "https://one.example.com/v1/AUTH_test"},
                {"name": "RegionTwo", "url": "https://two.example.com/v1/AUTH_test"},
                {"name": "RegionThree", "url": "https://three.example.com/v1/AUTH_test"}
            ]}]"#,
        );

        assert_eq!(
            find_storage_url(&catalog, Some("RegionThree"), None).unwrap(),
            "https://three.example.com/v1/AUTH_test"
        );
    }

    #[test]
    fn test_find_storage_url_unknown_region() {
        let catalog = catalog(
            r#"[{"name": "swift", "endpoints": [
                {"url": "https://swift.example.com/v1/AUTH_test", "region": "RegionOne"}
            ]}]"#,
        );

        let err = find_storage_url(&catalog, Some("ap-southeast-1"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);
    }

    #[test]
    fn test_find_storage_url_unknown_interface() {
        let catalog = catalog(
            r#"[{"name": "swift", "endpoints": [
                {"url": "https://swift.example.com/v1/AUTH_test", "interface": "public"}
            ]}]"#,
        );

        let err = find_storage_url(&catalog, None, Some("admin")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);
    }

    #[test]
    fn test_find_storage_url_missing_service() {
        let catalog = catalog(
            r#"[{"name": "nova", "type": "compute", "endpoints": [
                {"url": "https://nova.example.com/v2.1"}
            ]}]"#,
        );

        let err = find_storage_url(&catalog, None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);

        let err = find_storage_url(&[], None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);
    }

    #[test]
    fn test_find_storage_url_no_endpoints() {
        let catalog = catalog(r#"[{"name": "swift", "endpoints": []}]"#);

        let err = find_storage_url(&catalog, None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);
    }

    #[tokio::test]
    async fn test_keystone_credential_provider() {
        let _ = env_logger::builder().is_test(true).try_init();

        let http_send = CaptureHttpSend::new(
            http::StatusCode::CREATED,
            Some("gAAAAABtoken"),
            TOKEN_RESPONSE,
        );
        let ctx = Context::new().with_http_send(http_send.clone());

        let cred = provider()
            .with_project_name("myproject")
            .with_region_name("eu-west-1")
            .provide_credential(&ctx)
            .await
            .unwrap();
        assert_eq!(cred.token, "gAAAAABtoken");
        assert_eq!(cred.storage_url, "https://swift-eu.example.com/v1/AUTH_test");

        let req = http_send.request();
        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.uri(), "https://keystone.example.com/v3/auth/tokens");
        assert_eq!(req.headers()[header::CONTENT_TYPE], "application/json");

        let body: serde_json::Value = serde_json::from_slice(req.body()).unwrap();
        assert_eq!(body["auth"]["identity"]["password"]["user"]["name"], "testuser");
        assert_eq!(body["auth"]["scope"]["project"]["name"], "myproject");
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_unknown_region() {
        let http_send = CaptureHttpSend::new(
            http::StatusCode::CREATED,
            Some("gAAAAABtoken"),
            TOKEN_RESPONSE,
        );
        let ctx = Context::new().with_http_send(http_send);

        let err = provider()
            .with_region_name("ap-southeast-1")
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressInvalid);
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_missing_token() {
        let http_send = CaptureHttpSend::new(http::StatusCode::CREATED, None, TOKEN_RESPONSE);
        let ctx = Context::new().with_http_send(http_send);

        let err = provider().provide_credential(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.diagnostic(), Some(TOKEN_RESPONSE));
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_missing_catalog() {
        let body = r#"{"token": {"methods": ["password"], "expires_at": "2025-01-15T12:00:00Z"}}"#;
        let http_send = CaptureHttpSend::new(http::StatusCode::CREATED, Some("gAAAAABtoken"), body);
        let ctx = Context::new().with_http_send(http_send);

        let err = provider().provide_credential(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.diagnostic(), Some(body));
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_rejected() {
        let body = r#"{"error": {"code": 401, "message": "The request you have made requires authentication.", "title": "Unauthorized"}}"#;
        let http_send = CaptureHttpSend::new(http::StatusCode::UNAUTHORIZED, None, body);
        let ctx = Context::new().with_http_send(http_send);

        let err = provider().provide_credential(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.diagnostic(), Some(body));
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_not_json() {
        let http_send = CaptureHttpSend::new(
            http::StatusCode::CREATED,
            Some("gAAAAABtoken"),
            "<html>bad gateway</html>",
        );
        let ctx = Context::new().with_http_send(http_send);

        let err = provider().provide_credential(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.diagnostic(), Some("<html>bad gateway</html>"));
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_empty_endpoint_url() {
        let body = r#"{"token": {"catalog": [{"name": "swift", "endpoints": [{"url": ""}]}]}}"#;
        let http_send = CaptureHttpSend::new(http::StatusCode::CREATED, Some("gAAAAABtoken"), body);
        let ctx = Context::new().with_http_send(http_send);

        let err = provider().provide_credential(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.diagnostic(), Some(body));
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_skips_malformed_services() {
        let body = r#"{"token": {"catalog": [
            {"name": "nova", "endpoints": null},
            {"type": 42},
            "not-a-service",
            {"name": "swift", "endpoints": [{"url": "https://swift.example.com/v1/AUTH_test"}]}
        ]}}"#;
        let http_send = CaptureHttpSend::new(http::StatusCode::CREATED, Some("gAAAAABtoken"), body);
        let ctx = Context::new().with_http_send(http_send);

        let cred = provider().provide_credential(&ctx).await.unwrap();
        assert_eq!(cred.storage_url, "https://swift.example.com/v1/AUTH_test");
        assert_eq!(cred.token, "gAAAAABtoken");
    }

    #[tokio::test]
    async fn test_keystone_credential_provider_malformed_catalog() {
        let cases = [
            r#"{"token": {"catalog": {"swift": "x"}}}"#,
            r#"{"token": {"catalog": [{"name": "swift", "endpoints": null}]}}"#,
            r#"{"token": {"catalog": [{"name": "swift", "endpoints": [{"url": "https://swift.example.com", "region": 7}]}]}}"#,
        ];

        for body in cases {
            let http_send =
                CaptureHttpSend::new(http::StatusCode::CREATED, Some("gAAAAABtoken"), body);
            let ctx = Context::new().with_http_send(http_send);

            let err = provider().provide_credential(&ctx).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::AddressInvalid, "body: {body}");
        }
    }
}
