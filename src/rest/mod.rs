//! Product client
//!
//! [`Client`] owns the transport and credentials and hands out one lazily
//! built domain per product. Domains share the transport; nothing is sent
//! until a resource operation runs.

pub mod api;
pub mod insights;
pub mod routes;
pub mod verify;

use crate::config::ClientConfig;
use crate::domain::Domain;
use crate::error::Result;
use crate::http::{Credentials, HttpClient, HttpClientConfig, Transport};
use crate::resource::ResourceList;
use api::{AccountScope, Address, Api, Call};
use insights::Insights;
use once_cell::sync::OnceCell;
use routes::Routes;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use verify::Verify;

/// Entry point to every product domain
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    api: OnceCell<Api>,
    verify: OnceCell<Verify>,
    routes: OnceCell<Routes>,
    insights: OnceCell<Insights>,
}

impl Client {
    /// Create a client that talks HTTP
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(
            HttpClientConfig::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent())
                .build(),
        )?;
        Self::with_transport(config, Arc::new(http))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let credentials = config.credentials()?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                credentials,
                api: OnceCell::new(),
                verify: OnceCell::new(),
                routes: OnceCell::new(),
                insights: OnceCell::new(),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    fn domain(&self, name: &str) -> Arc<Domain> {
        let base_url = self.inner.config.base_url_for(name);
        debug!("Using {} at {}", name, base_url);
        Arc::new(
            Domain::new(name, base_url, self.inner.transport.clone())
                .with_credentials(Some(self.inner.credentials.clone()))
                .with_user_agent(self.inner.config.user_agent()),
        )
    }

    pub fn api(&self) -> &Api {
        self.inner.api.get_or_init(|| Api::new(self.domain("api")))
    }

    pub fn verify(&self) -> &Verify {
        self.inner
            .verify
            .get_or_init(|| Verify::new(self.domain("verify")))
    }

    pub fn routes(&self) -> &Routes {
        self.inner
            .routes
            .get_or_init(|| Routes::new(self.domain("routes")))
    }

    pub fn insights(&self) -> &Insights {
        self.inner
            .insights
            .get_or_init(|| Insights::new(self.domain("insights")))
    }

    /// Resources of the configured account
    pub fn account(&self) -> Result<AccountScope> {
        let sid = self.inner.config.require_account_sid()?;
        Ok(self.api().v2010().account(sid))
    }

    /// Shortcut for the calls of the configured account
    pub fn calls(&self) -> Result<ResourceList<Call>> {
        self.account()?.calls()
    }

    /// Shortcut for the addresses of the configured account
    pub fn addresses(&self) -> Result<ResourceList<Address>> {
        self.account()?.addresses()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
