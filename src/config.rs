//! Client configuration
//!
//! Credentials, region/edge routing and HTTP settings. Loaded from a YAML
//! file, from the environment, or assembled with [`ClientConfig::builder`].

use crate::error::{Error, Result, ResultExt};
use crate::http::Credentials;
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the account SID
pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Environment variable holding the auth token
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the region
pub const ENV_REGION: &str = "TWILIO_REGION";
/// Environment variable holding the edge location
pub const ENV_EDGE: &str = "TWILIO_EDGE";

/// Region used when only an edge is configured
const DEFAULT_REGION: &str = "us1";

// ============================================================================
// Client Config
// ============================================================================

/// Complete client configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account the default-account shortcuts operate on
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Auth token of the account
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Basic-auth user overriding the account SID (API key SID)
    #[serde(default)]
    pub username: Option<String>,

    /// Basic-auth password overriding the auth token (API key secret)
    #[serde(default)]
    pub password: Option<String>,

    /// Processing region, e.g. `ie1`
    #[serde(default)]
    pub region: Option<String>,

    /// Edge location, e.g. `dublin`
    #[serde(default)]
    pub edge: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Custom User-Agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Base URL overrides keyed by domain name (`api`, `verify`, ...)
    #[serde(default)]
    pub base_urls: HashMap<String, String>,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            username: None,
            password: None,
            region: None,
            edge: None,
            timeout_secs: default_timeout(),
            user_agent: None,
            base_urls: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Read the `TWILIO_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Fill unset fields from a variable lookup
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).none_if_empty();
        self.account_sid = self.account_sid.or_else(|| lookup(ENV_ACCOUNT_SID));
        self.auth_token = self.auth_token.or_else(|| lookup(ENV_AUTH_TOKEN));
        self.region = self.region.or_else(|| lookup(ENV_REGION));
        self.edge = self.edge.or_else(|| lookup(ENV_EDGE));
        self
    }

    /// Basic credentials for every request
    pub fn credentials(&self) -> Result<Credentials> {
        let username = self
            .username
            .as_ref()
            .or(self.account_sid.as_ref())
            .ok_or_else(|| Error::missing_field("account_sid"))?;
        let password = self
            .password
            .as_ref()
            .or(self.auth_token.as_ref())
            .ok_or_else(|| Error::missing_field("auth_token"))?;
        Ok(Credentials::new(username.as_str(), password.as_str()))
    }

    /// The account SID, required by account-scoped shortcuts
    pub fn require_account_sid(&self) -> Result<&str> {
        self.account_sid
            .as_deref()
            .ok_or_else(|| Error::missing_field("account_sid"))
    }

    /// Base URL of a domain, honoring overrides, region and edge.
    ///
    /// `api` becomes `https://api.twilio.com`, or
    /// `https://api.dublin.ie1.twilio.com` with edge `dublin` and region `ie1`.
    pub fn base_url_for(&self, domain: &str) -> String {
        if let Some(url) = self.base_urls.get(domain) {
            return url.trim_end_matches('/').to_string();
        }

        let region = self
            .region
            .as_deref()
            .or(self.edge.as_ref().map(|_| DEFAULT_REGION));

        let mut host = vec![domain];
        host.extend(self.edge.as_deref());
        host.extend(region);
        host.push("twilio.com");
        format!("https://{}", host.join("."))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// User-Agent sent with every request
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("{}/{}", crate::NAME, crate::VERSION))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "***");
        f.debug_struct("ClientConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &redact(&self.auth_token))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("region", &self.region)
            .field("edge", &self.edge)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("base_urls", &self.base_urls)
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the account SID
    pub fn account_sid(mut self, sid: impl Into<String>) -> Self {
        self.config.account_sid = Some(sid.into());
        self
    }

    /// Set the auth token
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth_token = Some(token.into());
        self
    }

    /// Authenticate with an API key instead of the auth token
    pub fn api_key(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Set the region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = Some(region.into());
        self
    }

    /// Set the edge
    pub fn edge(mut self, edge: impl Into<String>) -> Self {
        self.config.edge = Some(edge.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Override the base URL of one domain
    pub fn base_url(mut self, domain: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.base_urls.insert(domain.into(), url.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
