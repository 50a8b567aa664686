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

use std::fmt;

/// The result type used across swiftsign.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of failure an [`Error`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No usable credential source is configured, or the configuration is
    /// inconsistent.
    ConfigInvalid,
    /// The HTTP round trip did not complete.
    Transport,
    /// The server answered, but the response did not carry a usable token or
    /// storage URL.
    CredentialInvalid,
    /// The service catalog could not be turned into a storage URL.
    AddressInvalid,
    /// A value could not be placed into an HTTP request.
    RequestInvalid,
    /// Anything else.
    Unexpected,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::Transport => "Transport",
            ErrorKind::CredentialInvalid => "CredentialInvalid",
            ErrorKind::AddressInvalid => "AddressInvalid",
            ErrorKind::RequestInvalid => "RequestInvalid",
            ErrorKind::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every fallible swiftsign operation.
///
/// Build one with the constructor matching its [`ErrorKind`], then attach a
/// source, context lines or a server diagnostic:
///
/// ```
/// use swiftsign_core::{Error, ErrorKind};
///
/// let err = Error::credential_invalid("authentication failed")
///     .with_context("auth_url: https://auth.example.com/auth/v1.0")
///     .with_diagnostic("401 Unauthorized");
/// assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
/// assert_eq!(err.diagnostic(), Some("401 Unauthorized"));
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<anyhow::Error>,
    context: Vec<String>,
    diagnostic: Option<String>,
}

impl Error {
    /// Create a new error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            context: Vec::new(),
            diagnostic: None,
        }
    }

    /// Configuration is missing or inconsistent.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// The HTTP round trip failed.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Authentication did not produce a usable credential.
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// The storage URL could not be derived from the service catalog.
    pub fn address_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AddressInvalid, message)
    }

    /// A request could not be built.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Anything that does not fit the other kinds.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "the source error has been set");
        self.source = Some(source.into());
        self
    }

    /// Append a line of context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attach the text the server returned alongside the failure.
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context lines attached while the error propagated.
    pub fn context(&self) -> &[String] {
        &self.context
    }

    /// Server-supplied diagnostic text, usually a response body.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(diagnostic) = &self.diagnostic {
            write!(f, ": {diagnostic}")?;
        }
        for ctx in &self.context {
            write!(f, ", {ctx}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use Display for `{:?}` in `unwrap` and `?` output from main.
        if !f.alternate() {
            return write!(f, "{self}");
        }

        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("context", &self.context)
            .field("diagnostic", &self.diagnostic)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}
