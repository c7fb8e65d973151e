//! Verification API (`verify` domain)

mod service;

pub use service::{Service, ServiceCreateParams, ServiceUpdateParams};

use crate::domain::{Domain, Version};
use crate::error::Result;
use crate::resource::{ResourceContext, ResourceList};
use crate::template::Solution;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// The `verify` domain
#[derive(Debug)]
pub struct Verify {
    domain: Arc<Domain>,
    v2: OnceCell<VerifyV2>,
}

impl Verify {
    pub(crate) fn new(domain: Arc<Domain>) -> Self {
        Self {
            domain,
            v2: OnceCell::new(),
        }
    }

    /// Version `v2`
    pub fn v2(&self) -> &VerifyV2 {
        self.v2.get_or_init(|| VerifyV2 {
            version: Version::new(self.domain.clone(), "v2"),
        })
    }
}

/// Version `v2` of the `verify` domain
#[derive(Debug, Clone)]
pub struct VerifyV2 {
    version: Version,
}

impl VerifyV2 {
    pub fn services(&self) -> Result<ResourceList<Service>> {
        ResourceList::new(self.version.clone(), Solution::new())
    }

    pub fn service(&self, sid: &str) -> Result<ResourceContext<Service>> {
        self.services()?.get(sid)
    }
}
