//! One fetched page of a collection

use crate::decode::extract_records;
use crate::domain::Version;
use crate::error::Result;
use crate::resource::{Instance, Resource};
use crate::template::Solution;
use crate::types::JsonValue;
use std::fmt;

/// Immutable snapshot of one page.
///
/// Holds the decoded records in server order and the links to its
/// neighbours. Moving to another page always issues a new request.
pub struct Page<R> {
    version: Version,
    solution: Solution,
    records: Vec<Instance<R>>,
    next_page_url: Option<String>,
    previous_page_url: Option<String>,
    first_page_url: Option<String>,
    page_number: Option<u64>,
    page_size: Option<u64>,
}

impl<R: Resource> Page<R> {
    /// Decode a page payload
    pub fn new(version: Version, payload: &JsonValue, solution: Solution) -> Result<Self> {
        let records = extract_records(payload)?
            .iter()
            .map(|raw| Instance::from_payload(raw, version.clone(), solution.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            next_page_url: page_link(&version, payload, "next"),
            previous_page_url: page_link(&version, payload, "previous"),
            first_page_url: page_link(&version, payload, "first"),
            page_number: page_meta(payload, "page"),
            page_size: page_meta(payload, "page_size"),
            records,
            version,
            solution,
        })
    }

    /// Decode one raw record of this page
    pub fn get_instance(&self, raw: &JsonValue) -> Result<Instance<R>> {
        Instance::from_payload(raw, self.version.clone(), self.solution.clone())
    }

    /// Fetch the following page, `None` on the last page
    pub async fn next_page(&self) -> Result<Option<Page<R>>> {
        self.follow(self.next_page_url.as_deref()).await
    }

    /// Fetch the preceding page, `None` on the first page
    pub async fn previous_page(&self) -> Result<Option<Page<R>>> {
        self.follow(self.previous_page_url.as_deref()).await
    }

    async fn follow(&self, url: Option<&str>) -> Result<Option<Page<R>>> {
        let Some(url) = url else {
            return Ok(None);
        };
        let payload = self.version.get_page(url).await?;
        Page::new(self.version.clone(), &payload, self.solution.clone()).map(Some)
    }
}

impl<R> Page<R> {
    /// Records in server order
    pub fn records(&self) -> &[Instance<R>] {
        &self.records
    }

    /// Consume the page into its records
    pub fn into_records(self) -> Vec<Instance<R>> {
        self.records
    }

    pub(crate) fn take_records(&mut self) -> Vec<Instance<R>> {
        std::mem::take(&mut self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute URL of the next page
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page_url.as_deref()
    }

    /// Absolute URL of the previous page
    pub fn previous_page_url(&self) -> Option<&str> {
        self.previous_page_url.as_deref()
    }

    /// Absolute URL of the first page
    pub fn first_page_url(&self) -> Option<&str> {
        self.first_page_url.as_deref()
    }

    /// 0-based page number reported by the server
    pub fn page_number(&self) -> Option<u64> {
        self.page_number
    }

    /// Page size reported by the server
    pub fn page_size(&self) -> Option<u64> {
        self.page_size
    }

    /// Path parameters shared by every record of the page
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl<R> fmt::Debug for Page<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("records", &self.records.len())
            .field("page_number", &self.page_number)
            .field("next_page_url", &self.next_page_url)
            .finish_non_exhaustive()
    }
}

/// Resolve a `{name}_page_url` from `meta`, falling back to the legacy
/// `{name}_page_uri` relative to the domain
fn page_link(version: &Version, payload: &JsonValue, name: &str) -> Option<String> {
    let url_key = format!("{name}_page_url");
    if let Some(url) = payload.get("meta").and_then(|meta| meta.get(url_key.as_str())) {
        return url
            .as_str()
            .filter(|url| !url.is_empty())
            .map(str::to_string);
    }

    let uri_key = format!("{name}_page_uri");
    payload
        .get(uri_key.as_str())
        .and_then(JsonValue::as_str)
        .filter(|uri| !uri.is_empty())
        .map(|uri| version.domain().absolute_url(uri))
}

fn page_meta(payload: &JsonValue, key: &str) -> Option<u64> {
    payload
        .get("meta")
        .and_then(|meta| meta.get(key))
        .or_else(|| payload.get(key))
        .and_then(JsonValue::as_u64)
}
