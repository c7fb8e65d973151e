//! CLI module
//!
//! Command-line interface over the REST client.
//!
//! # Commands
//!
//! - `list` - Stream records of a resource across pages
//! - `page` - Fetch a single page
//! - `fetch` - Fetch one record
//! - `remove` - Delete one record

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ResourceKind};
pub use runner::Runner;
