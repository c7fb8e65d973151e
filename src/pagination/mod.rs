//! Pagination module
//!
//! Pages, read limits and the streaming engine that walks a paged
//! collection.
//!
//! # Overview
//!
//! - [`Page`] - one fetched page and the links to its neighbours
//! - [`ReadLimits`] - effective page size and page limit of a stream
//! - [`PageWalker`] - lazy record cursor behind `each`, `list` and `stream`
//! - [`EachArgs`] - the consumer-only and options-plus-consumer call shapes

mod page;
mod stream;
mod types;

pub use page::Page;
pub use stream::{each, list, PageWalker};
pub use types::{
    Consumer, DoneCallback, EachArgs, EachOptions, ListOptions, PageOptions, ReadLimits,
    StreamControl, StreamState,
};

#[cfg(test)]
mod tests;
