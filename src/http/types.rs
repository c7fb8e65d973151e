//! Transport types
//!
//! The request/response pair exchanged with a [`Transport`], and the trait
//! itself. Everything above this layer only sees status codes and raw bodies.

use crate::error::Result;
use crate::params::Params;
use crate::types::{Method, StringMap};
use async_trait::async_trait;
use std::fmt;

/// HTTP basic credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account SID or API key SID
    pub username: String,
    /// Auth token or API key secret
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A fully resolved request
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Query string parameters
    pub params: Params,
    /// Form body parameters
    pub data: Params,
    /// Request headers
    pub headers: StringMap,
    /// Basic credentials, if any
    pub auth: Option<Credentials>,
}

impl Request {
    /// Create a request for a method and absolute URL
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the query parameters
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Set the form body
    #[must_use]
    pub fn data(mut self, data: Params) -> Self {
        self.data = data;
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set basic credentials
    #[must_use]
    pub fn auth(mut self, credentials: Option<Credentials>) -> Self {
        self.auth = credentials;
        self
    }
}

/// Status and body of a completed request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, possibly empty
    pub body: String,
    /// Response headers (lowercase names)
    pub headers: StringMap,
}

impl RawResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: StringMap::new(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs requests on behalf of the domains.
///
/// Implementations report transport failures as errors and return every
/// HTTP response, whatever its status, as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the complete response
    async fn request(&self, request: Request) -> Result<RawResponse>;
}
