//! Pagination types
//!
//! Read limits, per-call options and the bookkeeping the streaming engine
//! carries from page to page.

use crate::error::{Error, Result};
use crate::params::{ParamSet, Params};
use crate::resource::Instance;

// ============================================================================
// Limits
// ============================================================================

/// Limits derived from the caller's `limit` and `page_size`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadLimits {
    /// Maximum number of records to deliver
    pub limit: Option<u64>,
    /// Page size sent to the server as `PageSize`
    pub page_size: Option<u64>,
    /// Maximum number of pages to fetch
    pub page_limit: Option<u64>,
}

impl ReadLimits {
    /// Compute the limits of one stream.
    ///
    /// The effective page size is the smaller of `page_size` and `limit` when
    /// both are given, otherwise whichever one is. A zero page size is
    /// treated as absent, and a zero limit sends no page size at all.
    pub fn new(limit: Option<u64>, page_size: Option<u64>) -> Self {
        let page_size = page_size.filter(|&size| size > 0);

        let effective = match (limit, page_size) {
            (Some(limit), Some(size)) => Some(size.min(limit)),
            (Some(limit), None) => Some(limit),
            (None, size) => size,
        }
        .filter(|&size| size > 0);

        let page_limit = match (limit, effective) {
            (Some(0), _) => Some(0),
            (Some(limit), Some(size)) => Some(limit.div_ceil(size)),
            _ => None,
        };

        Self {
            limit,
            page_size: effective,
            page_limit,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Options of `each`, `list` and `stream`
#[derive(Debug, Clone, Default)]
pub struct ListOptions<P> {
    /// Upper bound on delivered records
    pub limit: Option<u64>,
    /// Requested page size
    pub page_size: Option<u64>,
    /// Resource-specific filters
    pub filters: P,
}

impl<P: Default> ListOptions<P> {
    /// Options with no limit and the server's default page size
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P> ListOptions<P> {
    /// Set the record limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the filters
    #[must_use]
    pub fn filters(mut self, filters: P) -> Self {
        self.filters = filters;
        self
    }
}

/// Options of a single `page` request
#[derive(Debug, Clone, Default)]
pub struct PageOptions<P> {
    /// `PageSize`
    pub page_size: Option<u64>,
    /// `Page`
    pub page_number: Option<u64>,
    /// `PageToken`
    pub page_token: Option<String>,
    /// Resource-specific filters
    pub filters: P,
}

impl<P: ParamSet> ParamSet for PageOptions<P> {
    fn to_params(&self) -> Params {
        let mut params = self.filters.to_params();
        params
            .set("PageToken", self.page_token.as_ref())
            .set("Page", self.page_number.as_ref())
            .set("PageSize", self.page_size.as_ref());
        params
    }
}

// ============================================================================
// Stream control
// ============================================================================

/// Handle passed to a consumer alongside each record
#[derive(Debug, Default)]
pub struct StreamControl {
    stopped: bool,
}

impl StreamControl {
    /// Stop the stream after the current record
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Check if the consumer asked to stop
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Per-stream bookkeeping
#[derive(Debug, Clone)]
pub struct StreamState {
    /// 1-based number of the page being consumed
    pub current_page: u64,
    /// Set once the stream has terminated; never cleared
    pub done: bool,
    /// Records handed to the consumer so far
    pub delivered: u64,
    /// Limits of this stream
    pub limits: ReadLimits,
}

impl StreamState {
    /// Fresh state for a stream
    pub fn new(limits: ReadLimits) -> Self {
        Self {
            current_page: 1,
            done: false,
            delivered: 0,
            limits,
        }
    }

    /// Mark the stream as finished
    pub fn finish(&mut self) {
        self.done = true;
    }

    /// Check if the record limit has been reached
    pub fn limit_reached(&self) -> bool {
        self.limits
            .limit
            .is_some_and(|limit| self.delivered >= limit)
    }

    /// Check if the page limit has been reached
    pub fn page_limit_reached(&self) -> bool {
        self.limits
            .page_limit
            .is_some_and(|limit| self.current_page >= limit)
    }
}

// ============================================================================
// Call shapes
// ============================================================================

/// Per-record consumer
pub type Consumer<R> = Box<dyn FnMut(Instance<R>, &mut StreamControl) + Send>;

/// Completion callback, receives the terminal error if there was one
pub type DoneCallback = Box<dyn FnOnce(Option<&Error>) + Send>;

/// Options form of an `each` call
pub struct EachOptions<R, P> {
    /// Limits and filters
    pub list: ListOptions<P>,
    /// Consumer that takes precedence over the positional one
    pub callback: Option<Consumer<R>>,
    /// Called exactly once when the stream terminates
    pub done: Option<DoneCallback>,
}

impl<R, P: Default> Default for EachOptions<R, P> {
    fn default() -> Self {
        Self {
            list: ListOptions::default(),
            callback: None,
            done: None,
        }
    }
}

impl<R, P> EachOptions<R, P> {
    /// Wrap list options
    pub fn new(list: ListOptions<P>) -> Self {
        Self {
            list,
            callback: None,
            done: None,
        }
    }

    /// Set the consumer
    #[must_use]
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Instance<R>, &mut StreamControl) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Set the completion callback
    #[must_use]
    pub fn done<F>(mut self, done: F) -> Self
    where
        F: FnOnce(Option<&Error>) + Send + 'static,
    {
        self.done = Some(Box::new(done));
        self
    }
}

/// The two accepted shapes of an `each` call
pub enum EachArgs<R, P> {
    /// A bare consumer with default options
    Consumer(Consumer<R>),
    /// Options plus an optional positional consumer
    Options {
        /// Limits, filters and callbacks
        options: EachOptions<R, P>,
        /// Used when `options.callback` is absent
        consumer: Option<Consumer<R>>,
    },
}

impl<R, P: Default> EachArgs<R, P> {
    /// Bare consumer shape
    pub fn consumer<F>(consumer: F) -> Self
    where
        F: FnMut(Instance<R>, &mut StreamControl) + Send + 'static,
    {
        Self::Consumer(Box::new(consumer))
    }

    /// Options shape with a positional consumer
    pub fn with_options<F>(options: EachOptions<R, P>, consumer: F) -> Self
    where
        F: FnMut(Instance<R>, &mut StreamControl) + Send + 'static,
    {
        Self::Options {
            options,
            consumer: Some(Box::new(consumer)),
        }
    }

    /// Options shape without a positional consumer
    pub fn options(options: EachOptions<R, P>) -> Self {
        Self::Options {
            options,
            consumer: None,
        }
    }

    /// Normalize into options, the effective consumer and the done callback.
    ///
    /// Fails with a validation error when no consumer was given at all.
    pub fn resolve(self) -> Result<(ListOptions<P>, Consumer<R>, Option<DoneCallback>)> {
        match self {
            Self::Consumer(consumer) => Ok((ListOptions::default(), consumer, None)),
            Self::Options { options, consumer } => {
                let EachOptions {
                    list,
                    callback,
                    done,
                } = options;
                let consumer = callback
                    .or(consumer)
                    .ok_or_else(|| Error::validation("Callback function must be provided"))?;
                Ok((list, consumer, done))
            }
        }
    }
}
