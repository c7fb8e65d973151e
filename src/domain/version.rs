//! Versioned page fetcher
//!
//! Every read and write a resource performs goes through one of these
//! methods. Non-2xx responses are decoded into [`Error::Api`] here, so the
//! layers above only ever see decoded JSON or an error.

use super::Domain;
use crate::error::{Error, Result};
use crate::http::RawResponse;
use crate::params::Params;
use crate::types::{JsonValue, Method};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// A versioned prefix of a domain
#[derive(Debug, Clone)]
pub struct Version {
    domain: Arc<Domain>,
    version: Arc<str>,
}

impl Version {
    /// Create a version of a domain
    pub fn new(domain: Arc<Domain>, version: &str) -> Self {
        Self {
            domain,
            version: Arc::from(version.trim_matches('/')),
        }
    }

    /// The owning domain
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Version segment, e.g. `2010-04-01`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Prefix a resource URI with the version segment
    pub fn relative_uri(&self, uri: &str) -> String {
        format!("{}/{}", self.version, uri.trim_start_matches('/'))
    }

    /// Absolute URL of a resource URI
    pub fn absolute_url(&self, uri: &str) -> String {
        self.domain.absolute_url(&self.relative_uri(uri))
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        params: Params,
        data: Params,
    ) -> Result<RawResponse> {
        self.domain
            .request(method, &self.relative_uri(uri), params, data)
            .await
    }

    /// GET a single record; any 2xx succeeds
    pub async fn fetch(&self, uri: &str, params: Params) -> Result<JsonValue> {
        let response = self.send(Method::GET, uri, params, Params::new()).await?;
        into_payload(response, Expect::Success)
    }

    /// POST a form to create a record; any 2xx succeeds
    pub async fn create(&self, uri: &str, data: Params) -> Result<JsonValue> {
        let response = self.send(Method::POST, uri, Params::new(), data).await?;
        into_payload(response, Expect::Success)
    }

    /// POST a form to update a record; any 2xx succeeds
    pub async fn update(&self, uri: &str, data: Params) -> Result<JsonValue> {
        let response = self.send(Method::POST, uri, Params::new(), data).await?;
        into_payload(response, Expect::Success)
    }

    /// DELETE a record. `true` on 204, `false` on any other 2xx.
    pub async fn remove(&self, uri: &str) -> Result<bool> {
        let response = self
            .send(Method::DELETE, uri, Params::new(), Params::new())
            .await?;
        if !response.is_success() {
            return Err(api_error(&response));
        }
        Ok(response.status == 204)
    }

    /// GET one page of a collection; only 200 succeeds
    pub async fn page(&self, uri: &str, params: Params) -> Result<JsonValue> {
        let response = self.send(Method::GET, uri, params, Params::new()).await?;
        into_payload(response, Expect::Ok)
    }

    /// GET a page by its absolute URL, as handed out in page metadata
    pub async fn get_page(&self, url: &str) -> Result<JsonValue> {
        let url = Url::parse(url)?;
        let response = self
            .domain
            .request(Method::GET, url.as_str(), Params::new(), Params::new())
            .await?;
        into_payload(response, Expect::Ok)
    }
}

#[derive(Clone, Copy)]
enum Expect {
    Ok,
    Success,
}

fn into_payload(response: RawResponse, expect: Expect) -> Result<JsonValue> {
    let accepted = match expect {
        Expect::Ok => response.status == 200,
        Expect::Success => response.is_success(),
    };
    if !accepted {
        return Err(api_error(&response));
    }

    if response.body.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| {
        debug!("Response body is not JSON: {}", e);
        Error::decode(format!("Invalid JSON in response body: {e}"))
    })
}

fn api_error(response: &RawResponse) -> Error {
    let body: Option<JsonValue> = serde_json::from_str(&response.body).ok();
    let err = Error::api(response.status, body.as_ref());
    warn!("{}", err);
    err
}
