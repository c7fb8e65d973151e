//! Streaming engine
//!
//! Walks a paged collection one page at a time and hands out records in
//! server order. After each page it checks, in order: consumer stop, page
//! and record limits, and the presence of a next page. A failed fetch ends
//! the stream and is reported once; nothing is retried.

use super::page::Page;
use super::types::{Consumer, ReadLimits, StreamControl, StreamState};
use crate::error::Result;
use crate::resource::{Instance, Resource};
use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use tracing::debug;

/// Lazy cursor over the records of a paged collection
pub struct PageWalker<R> {
    first: Option<BoxFuture<'static, Result<Page<R>>>>,
    page: Option<Page<R>>,
    buffer: VecDeque<Instance<R>>,
    state: StreamState,
}

impl<R: Resource> PageWalker<R> {
    /// Create a walker; nothing is fetched until the first record is requested
    pub fn new(first: BoxFuture<'static, Result<Page<R>>>, limits: ReadLimits) -> Self {
        Self {
            first: Some(first),
            page: None,
            buffer: VecDeque::new(),
            state: StreamState::new(limits),
        }
    }

    /// Current bookkeeping
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// Stop the walk; no further records or fetches
    pub fn finish(&mut self) {
        if !self.state.done {
            debug!(
                "Stream finished after {} records on page {}",
                self.state.delivered, self.state.current_page
            );
        }
        self.state.finish();
        self.buffer.clear();
    }

    /// Next record, `None` once the stream has terminated
    pub async fn next(&mut self) -> Option<Result<Instance<R>>> {
        loop {
            if self.state.done {
                return None;
            }
            // The first page is always fetched, even for a zero limit
            if self.state.limit_reached() && self.first.is_none() {
                self.finish();
                return None;
            }
            if let Some(record) = self.buffer.pop_front() {
                self.state.delivered += 1;
                return Some(Ok(record));
            }

            match self.fetch().await {
                Ok(Some(mut page)) => {
                    debug!(
                        "Fetched page {} with {} records",
                        self.state.current_page,
                        page.len()
                    );
                    self.buffer.extend(page.take_records());
                    self.page = Some(page);
                }
                Ok(None) => {
                    self.finish();
                    return None;
                }
                Err(e) => {
                    debug!("Page {} failed: {}", self.state.current_page, e);
                    self.finish();
                    return Some(Err(e));
                }
            }
        }
    }

    async fn fetch(&mut self) -> Result<Option<Page<R>>> {
        if let Some(first) = self.first.take() {
            return first.await.map(Some);
        }

        let Some(page) = &self.page else {
            return Ok(None);
        };
        if self.state.page_limit_reached() {
            return Ok(None);
        }

        let next = page.next_page().await?;
        if next.is_some() {
            self.state.current_page += 1;
        }
        Ok(next)
    }

    /// Convert into a `Stream`; dropping the stream cancels the walk
    pub fn into_stream(self) -> BoxStream<'static, Result<Instance<R>>> {
        stream::unfold(self, |mut walker| async move {
            walker.next().await.map(|item| (item, walker))
        })
        .boxed()
    }
}

/// Deliver every record to `consumer` until the stream ends or is stopped
pub async fn each<R: Resource>(mut walker: PageWalker<R>, mut consumer: Consumer<R>) -> Result<()> {
    let mut control = StreamControl::default();

    while let Some(item) = walker.next().await {
        consumer(item?, &mut control);
        if control.is_stopped() {
            debug!("Stream stopped by consumer");
            walker.finish();
            break;
        }
    }

    Ok(())
}

/// Collect every record; the first error discards what was gathered
pub async fn list<R: Resource>(mut walker: PageWalker<R>) -> Result<Vec<Instance<R>>> {
    let mut records = Vec::new();
    while let Some(item) = walker.next().await {
        records.push(item?);
    }
    Ok(records)
}
