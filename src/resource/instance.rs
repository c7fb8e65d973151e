//! Record views and live handles

use super::{Addressable, Fetchable, Removable, Resource, Updatable};
use crate::domain::Version;
use crate::error::{Error, Result};
use crate::params::{ParamSet, Params};
use crate::template::{self, Solution};
use crate::types::JsonValue;
use once_cell::sync::OnceCell;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// A decoded record together with the path parameters it was read under.
///
/// Dereferences to the record. Operations on the record itself go through a
/// [`ResourceContext`] that is created on first use and then reused.
pub struct Instance<R> {
    record: R,
    version: Version,
    solution: Solution,
    context: OnceCell<ResourceContext<R>>,
}

impl<R: Resource> Instance<R> {
    /// Wrap a decoded record
    pub fn new(record: R, version: Version, solution: Solution) -> Self {
        Self {
            record,
            version,
            solution,
            context: OnceCell::new(),
        }
    }

    /// Decode a raw record
    pub fn from_payload(payload: &JsonValue, version: Version, solution: Solution) -> Result<Self> {
        Ok(Self::new(R::from_payload(payload)?, version, solution))
    }
}

impl<R> Instance<R> {
    /// The record
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Consume into the record
    pub fn into_record(self) -> R {
        self.record
    }

    /// Path parameters of the collection the record belongs to
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl<R: Addressable> Instance<R> {
    /// Handle on this record's own endpoint
    pub fn context(&self) -> Result<&ResourceContext<R>> {
        self.context.get_or_try_init(|| {
            let id = self.record.id().ok_or_else(|| {
                Error::validation(format!("Record has no {} to address it by", R::ID_PARAM))
            })?;
            ResourceContext::new(
                self.version.clone(),
                self.solution.clone().with(R::ID_PARAM, id),
            )
        })
    }
}

impl<R: Fetchable> Instance<R> {
    /// Re-read the record
    pub async fn fetch(&self) -> Result<Instance<R>> {
        self.context()?.fetch().await
    }
}

impl<R: Updatable> Instance<R> {
    /// Update the record
    pub async fn update(&self, params: &R::UpdateParams) -> Result<Instance<R>> {
        self.context()?.update(params).await
    }
}

impl<R: Removable> Instance<R> {
    /// Remove the record
    pub async fn remove(&self) -> Result<bool> {
        self.context()?.remove().await
    }
}

impl<R> Deref for Instance<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.record
    }
}

impl<R: Clone> Clone for Instance<R> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            version: self.version.clone(),
            solution: self.solution.clone(),
            context: self.context.clone(),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for Instance<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("record", &self.record)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}

/// Live handle on one record's endpoint
pub struct ResourceContext<R> {
    version: Version,
    solution: Solution,
    uri: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Addressable> ResourceContext<R> {
    /// Create a handle; the solution must fill the instance URI template
    pub fn new(version: Version, solution: Solution) -> Result<Self> {
        let uri = template::render(R::INSTANCE_URI, &solution)?;
        Ok(Self {
            version,
            solution,
            uri,
            _resource: PhantomData,
        })
    }
}

impl<R> ResourceContext<R> {
    /// Rendered instance URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Path parameters of the record
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl<R: Fetchable> ResourceContext<R> {
    /// Fetch the record
    pub async fn fetch(&self) -> Result<Instance<R>> {
        let payload = self.version.fetch(&self.uri, Params::new()).await?;
        Instance::from_payload(&payload, self.version.clone(), self.solution.clone())
    }
}

impl<R: Updatable> ResourceContext<R> {
    /// Update the record
    pub async fn update(&self, params: &R::UpdateParams) -> Result<Instance<R>> {
        let payload = self.version.update(&self.uri, params.to_params()).await?;
        Instance::from_payload(&payload, self.version.clone(), self.solution.clone())
    }
}

impl<R: Removable> ResourceContext<R> {
    /// Remove the record; `true` when the server answered 204
    pub async fn remove(&self) -> Result<bool> {
        self.version.remove(&self.uri).await
    }
}

impl<R> Clone for ResourceContext<R> {
    fn clone(&self) -> Self {
        Self {
            version: self.version.clone(),
            solution: self.solution.clone(),
            uri: self.uri.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceContext<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceContext")
            .field("uri", &self.uri)
            .field("solution", &self.solution)
            .finish_non_exhaustive()
    }
}
