//! Collection handle

use super::{Addressable, Collection, Creatable, Instance, Listable, ResourceContext};
use crate::domain::Version;
use crate::error::{Error, Result};
use crate::pagination::{self, EachArgs, ListOptions, Page, PageOptions, PageWalker, ReadLimits};
use crate::params::{missing_message, ParamSet, RequiredParams};
use crate::template::{self, Solution};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::BoxStream;
use std::fmt;
use std::marker::PhantomData;

/// Handle on a resource collection.
///
/// The solution is fixed here and handed unchanged to every page and record
/// produced from this handle.
pub struct ResourceList<R> {
    version: Version,
    solution: Solution,
    uri: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Collection> ResourceList<R> {
    /// Create a handle; the solution must fill the collection URI template
    pub fn new(version: Version, solution: Solution) -> Result<Self> {
        let uri = template::render(R::LIST_URI, &solution)?;
        Ok(Self {
            version,
            solution,
            uri,
            _resource: PhantomData,
        })
    }
}

impl<R> ResourceList<R> {
    /// Rendered collection URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Path parameters of the collection
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Version the collection belongs to
    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl<R: Collection + Addressable> ResourceList<R> {
    /// Handle on one record of the collection
    pub fn get(&self, id: &str) -> Result<ResourceContext<R>> {
        ResourceContext::new(
            self.version.clone(),
            self.solution.clone().with(R::ID_PARAM, id),
        )
    }
}

impl<R: Creatable> ResourceList<R> {
    /// Create a record.
    ///
    /// Required parameters are checked before anything is sent; a missing one
    /// fails here rather than in the returned future.
    pub fn create(
        &self,
        params: &R::CreateParams,
    ) -> Result<BoxFuture<'static, Result<Instance<R>>>> {
        let missing = params.missing_required();
        if !missing.is_empty() {
            return Err(Error::validation(missing_message(&missing)));
        }

        let data = params.to_params();
        let version = self.version.clone();
        let solution = self.solution.clone();
        let uri = self.uri.clone();

        Ok(async move {
            let payload = version.create(&uri, data).await?;
            Instance::from_payload(&payload, version, solution)
        }
        .boxed())
    }
}

impl<R: Listable> ResourceList<R> {
    /// Fetch exactly one page; limits do not apply
    pub async fn page(&self, options: PageOptions<R::ReadParams>) -> Result<Page<R>> {
        let payload = self.version.page(&self.uri, options.to_params()).await?;
        Page::new(self.version.clone(), &payload, self.solution.clone())
    }

    /// Fetch a page by the absolute URL found in page metadata
    pub async fn get_page(&self, url: &str) -> Result<Page<R>> {
        let payload = self.version.get_page(url).await?;
        Page::new(self.version.clone(), &payload, self.solution.clone())
    }

    /// Stream records to a consumer.
    ///
    /// The done callback, if any, sees the outcome before it is returned.
    /// Argument errors surface only once the future is awaited; use
    /// [`each_with`](Self::each_with) to have them returned immediately.
    pub async fn each(&self, args: EachArgs<R, R::ReadParams>) -> Result<()> {
        let (options, consumer, done) = args.resolve()?;
        let result = pagination::each(self.walker(options), consumer).await;
        if let Some(done) = done {
            done(result.as_ref().err());
        }
        result
    }

    /// Callback form of [`each`](Self::each).
    ///
    /// Argument errors are returned immediately; everything after that is
    /// reported only through the done callback.
    pub fn each_with(&self, args: EachArgs<R, R::ReadParams>) -> Result<BoxFuture<'static, ()>> {
        let (options, consumer, done) = args.resolve()?;
        let walker = self.walker(options);

        Ok(async move {
            let result = pagination::each(walker, consumer).await;
            if let Some(done) = done {
                done(result.as_ref().err());
            }
        }
        .boxed())
    }

    /// Collect records into a vector
    pub async fn list(&self, options: ListOptions<R::ReadParams>) -> Result<Vec<Instance<R>>> {
        pagination::list(self.walker(options)).await
    }

    /// Records as a `Stream`
    pub fn stream(&self, options: ListOptions<R::ReadParams>) -> BoxStream<'static, Result<Instance<R>>> {
        self.walker(options).into_stream()
    }

    fn walker(&self, options: ListOptions<R::ReadParams>) -> PageWalker<R> {
        let limits = ReadLimits::new(options.limit, options.page_size);
        let first = PageOptions {
            page_size: limits.page_size,
            filters: options.filters,
            ..Default::default()
        };
        let list = self.clone();

        PageWalker::new(async move { list.page(first).await }.boxed(), limits)
    }
}

impl<R> Clone for ResourceList<R> {
    fn clone(&self) -> Self {
        Self {
            version: self.version.clone(),
            solution: self.solution.clone(),
            uri: self.uri.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceList")
            .field("uri", &self.uri)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}
