// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # twilio-rest
//!
//! Typed client for the Twilio REST API, built around one paged-resource
//! streaming engine shared by every product.
//!
//! ## Features
//!
//! - **Typed resources**: records, filters and create/update parameters per resource
//! - **Lazy paging**: pages are fetched one at a time, only while records are consumed
//! - **Limits**: record and page-size limits with the page count derived from both
//! - **Three consumption styles**: callback (`each`), collect (`list`) and `Stream`
//! - **Both pagination formats**: legacy `next_page_uri` and `meta.next_page_url`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use twilio_rest::{Client, ClientConfig, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::from_env())?;
//!
//!     // First 20 calls, 10 per page
//!     let calls = client
//!         .calls()?
//!         .list(ListOptions::new().limit(20).page_size(10))
//!         .await?;
//!
//!     // Or record by record
//!     let mut services = client.verify().v2().services()?.stream(ListOptions::new());
//!     while let Some(service) = services.next().await {
//!         println!("{:?}", service?.friendly_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Client → Domain (api, verify, ...) → Version (2010-04-01)   │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌─────────────┬────────────────┴──┬──────────────┬─────────────┐
//! │  Resource   │    Pagination     │    Decode    │    HTTP     │
//! ├─────────────┼───────────────────┼──────────────┼─────────────┤
//! │ List        │ Page              │ RFC 2822     │ Transport   │
//! │ Context     │ PageWalker        │ ISO 8601     │ Basic auth  │
//! │ Instance    │ each/list/stream  │ Decimal      │ Form/query  │
//! └─────────────┴───────────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request parameter serialization
pub mod params;

/// URI template interpolation
pub mod template;

/// Record and field decoders
pub mod decode;

/// HTTP transport
pub mod http;

/// Domains and API versions
pub mod domain;

/// Pages and the streaming engine
pub mod pagination;

/// Generic resource lists, contexts and instances
pub mod resource;

/// Client configuration
pub mod config;

/// Product domains and concrete resources
pub mod rest;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ClientConfig;
pub use pagination::{EachArgs, EachOptions, ListOptions, Page, PageOptions, StreamControl};
pub use resource::{Instance, ResourceContext, ResourceList};
pub use rest::Client;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
