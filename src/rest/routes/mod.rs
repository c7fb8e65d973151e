//! Inbound routing API (`routes` domain)

mod phone_number;

pub use phone_number::{PhoneNumber, PhoneNumberUpdateParams};

use crate::domain::{Domain, Version};
use crate::error::Result;
use crate::resource::ResourceContext;
use crate::template::Solution;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// The `routes` domain
#[derive(Debug)]
pub struct Routes {
    domain: Arc<Domain>,
    v2: OnceCell<RoutesV2>,
}

impl Routes {
    pub(crate) fn new(domain: Arc<Domain>) -> Self {
        Self {
            domain,
            v2: OnceCell::new(),
        }
    }

    /// Version `v2`
    pub fn v2(&self) -> &RoutesV2 {
        self.v2.get_or_init(|| RoutesV2 {
            version: Version::new(self.domain.clone(), "v2"),
        })
    }
}

/// Version `v2` of the `routes` domain
#[derive(Debug, Clone)]
pub struct RoutesV2 {
    version: Version,
}

impl RoutesV2 {
    /// Routing of one phone number; there is no collection to list
    pub fn phone_number(&self, phone_number: &str) -> Result<ResourceContext<PhoneNumber>> {
        ResourceContext::new(
            self.version.clone(),
            Solution::new().with("phoneNumber", phone_number),
        )
    }
}
