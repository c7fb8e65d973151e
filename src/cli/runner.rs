//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, ResourceKind};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{ListOptions, PageOptions};
use crate::resource::{Listable, ResourceList};
use crate::rest::api::AccountScope;
use crate::rest::Client;
use futures::StreamExt;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    client: Option<Client>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Runner {
    /// Create a runner that builds its client from the config and prints to stdout
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            client: None,
            out: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Use an existing client instead of building one
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Write records somewhere other than stdout
    #[must_use]
    pub fn with_output(mut self, out: impl Write + Send + 'static) -> Self {
        self.out = Mutex::new(Box::new(out));
        self
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;
        let start = Instant::now();

        match &self.cli.command {
            Commands::List {
                resource,
                limit,
                page_size,
                room,
            } => {
                let (limit, page_size) = (*limit, *page_size);
                match resource {
                    ResourceKind::Calls => {
                        let list = self.account(&client)?.calls()?;
                        self.list(list, list_options(limit, page_size)).await?;
                    }
                    ResourceKind::Addresses => {
                        let list = self.account(&client)?.addresses()?;
                        self.list(list, list_options(limit, page_size)).await?;
                    }
                    ResourceKind::UsageMonthly => {
                        let list = self.account(&client)?.usage_monthly()?;
                        self.list(list, list_options(limit, page_size)).await?;
                    }
                    ResourceKind::VerifyServices => {
                        let list = client.verify().v2().services()?;
                        self.list(list, list_options(limit, page_size)).await?;
                    }
                    ResourceKind::RoomParticipants => {
                        let list = client
                            .insights()
                            .v1()
                            .room(require_room(room.as_deref())?)
                            .participants()?;
                        self.list(list, list_options(limit, page_size)).await?;
                    }
                    ResourceKind::PhoneNumbers => return Err(unsupported(*resource, "listed")),
                }
            }

            Commands::Page {
                resource,
                page_size,
                page_number,
                page_token,
                url,
                room,
            } => {
                let options = PageRequest {
                    page_size: *page_size,
                    page_number: *page_number,
                    page_token: page_token.clone(),
                };
                let url = url.as_deref();
                match resource {
                    ResourceKind::Calls => {
                        let list = self.account(&client)?.calls()?;
                        self.page(list, options.clone().into_options(), url).await?;
                    }
                    ResourceKind::Addresses => {
                        let list = self.account(&client)?.addresses()?;
                        self.page(list, options.clone().into_options(), url).await?;
                    }
                    ResourceKind::UsageMonthly => {
                        let list = self.account(&client)?.usage_monthly()?;
                        self.page(list, options.clone().into_options(), url).await?;
                    }
                    ResourceKind::VerifyServices => {
                        let list = client.verify().v2().services()?;
                        self.page(list, options.clone().into_options(), url).await?;
                    }
                    ResourceKind::RoomParticipants => {
                        let list = client
                            .insights()
                            .v1()
                            .room(require_room(room.as_deref())?)
                            .participants()?;
                        self.page(list, options.clone().into_options(), url).await?;
                    }
                    ResourceKind::PhoneNumbers => return Err(unsupported(*resource, "paged")),
                }
            }

            Commands::Fetch { resource, id, room } => match resource {
                ResourceKind::Calls => {
                    let call = self.account(&client)?.call(id)?.fetch().await?;
                    self.emit(call.record())?;
                }
                ResourceKind::Addresses => {
                    let address = self.account(&client)?.address(id)?.fetch().await?;
                    self.emit(address.record())?;
                }
                ResourceKind::VerifyServices => {
                    let service = client.verify().v2().service(id)?.fetch().await?;
                    self.emit(service.record())?;
                }
                ResourceKind::RoomParticipants => {
                    let participant = client
                        .insights()
                        .v1()
                        .room(require_room(room.as_deref())?)
                        .participant(id)?
                        .fetch()
                        .await?;
                    self.emit(participant.record())?;
                }
                ResourceKind::PhoneNumbers => {
                    let number = client.routes().v2().phone_number(id)?.fetch().await?;
                    self.emit(number.record())?;
                }
                ResourceKind::UsageMonthly => return Err(unsupported(*resource, "fetched")),
            },

            Commands::Remove { resource, id } => {
                let removed = match resource {
                    ResourceKind::Calls => self.account(&client)?.call(id)?.remove().await?,
                    ResourceKind::Addresses => {
                        self.account(&client)?.address(id)?.remove().await?
                    }
                    ResourceKind::VerifyServices => {
                        client.verify().v2().service(id)?.remove().await?
                    }
                    _ => return Err(unsupported(*resource, "removed")),
                };
                self.emit(&serde_json::json!({ "sid": id, "removed": removed }))?;
            }
        }

        info!("Done in {:.2}s", start.elapsed().as_secs_f64());
        Ok(())
    }

    fn client(&self) -> Result<Client> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?.with_env(|key| std::env::var(key).ok()),
            None => ClientConfig::from_env(),
        };
        Client::new(config)
    }

    fn account(&self, client: &Client) -> Result<AccountScope> {
        match &self.cli.account {
            Some(sid) => Ok(client.api().v2010().account(sid)),
            None => client.account(),
        }
    }

    async fn list<R: Listable>(
        &self,
        list: ResourceList<R>,
        options: ListOptions<R::ReadParams>,
    ) -> Result<()> {
        let mut records = list.stream(options);
        let mut count = 0;
        while let Some(record) = records.next().await {
            self.emit(record?.record())?;
            count += 1;
        }
        info!("Listed {} records from {}", count, list.uri());
        Ok(())
    }

    async fn page<R: Listable>(
        &self,
        list: ResourceList<R>,
        options: PageOptions<R::ReadParams>,
        url: Option<&str>,
    ) -> Result<()> {
        let page = match url {
            Some(url) => list.get_page(url).await?,
            None => list.page(options).await?,
        };
        for record in page.records() {
            self.emit(record.record())?;
        }
        if let Some(next) = page.next_page_url() {
            info!("Next page: {}", next);
        }
        Ok(())
    }

    fn emit<T: Serialize>(&self, record: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(record)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(record)?,
        };
        let mut out = self
            .out
            .lock()
            .map_err(|_| Error::Other("Output lock poisoned".to_string()))?;
        writeln!(out, "{line}")?;
        Ok(())
    }
}

fn list_options<P: Default>(limit: Option<u64>, page_size: Option<u64>) -> ListOptions<P> {
    ListOptions {
        limit,
        page_size,
        filters: P::default(),
    }
}

/// Page options given on the command line, before filters are attached
#[derive(Clone)]
struct PageRequest {
    page_size: Option<u64>,
    page_number: Option<u64>,
    page_token: Option<String>,
}

impl PageRequest {
    fn into_options<P: Default>(self) -> PageOptions<P> {
        PageOptions {
            page_size: self.page_size,
            page_number: self.page_number,
            page_token: self.page_token,
            filters: P::default(),
        }
    }
}

fn require_room(room: Option<&str>) -> Result<&str> {
    room.ok_or_else(|| Error::validation("--room is required for room participants"))
}

fn unsupported(resource: ResourceKind, operation: &str) -> Error {
    Error::validation(format!("{resource:?} cannot be {operation}"))
}
