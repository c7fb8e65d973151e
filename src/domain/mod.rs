//! Domains and API versions
//!
//! A [`Domain`] is one product host (`https://api.twilio.com`) together with
//! the shared transport and credentials. A [`Version`] is a versioned prefix
//! of a domain (`2010-04-01`, `v2`) and is the page fetcher every resource
//! collection talks to.

mod version;

pub use version::Version;

use crate::error::Result;
use crate::http::{Credentials, RawResponse, Request, Transport};
use crate::params::Params;
use crate::types::Method;
use std::fmt;
use std::sync::Arc;

/// One product host and the session used to reach it
#[derive(Clone)]
pub struct Domain {
    name: String,
    base_url: String,
    transport: Arc<dyn Transport>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
}

impl Domain {
    /// Create a domain for a base URL
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            credentials: None,
            user_agent: None,
        }
    }

    /// Authenticate every request with basic credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Send a `User-Agent` header with every request
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Short product name, e.g. `api`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a URI against the base URL; absolute URLs pass through
    pub fn absolute_url(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            return uri.to_string();
        }
        format!("{}/{}", self.base_url, uri.trim_start_matches('/'))
    }

    /// Send one request to this domain
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        params: Params,
        data: Params,
    ) -> Result<RawResponse> {
        let mut request = Request::new(method, self.absolute_url(uri))
            .params(params)
            .data(data)
            .header("Accept", "application/json")
            .auth(self.credentials.clone());

        if let Some(user_agent) = &self.user_agent {
            request = request.header("User-Agent", user_agent.as_str());
        }

        self.transport.request(request).await
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Domain")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
