//! HTTP transport module
//!
//! The [`Transport`] seam every domain sends its requests through, and the
//! reqwest-backed [`HttpClient`] used in production.

mod client;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use types::{Credentials, RawResponse, Request, Transport};
