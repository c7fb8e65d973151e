//! Core voice and account API (`api` domain)

mod address;
mod call;
mod usage;

pub use address::{Address, AddressCreateParams, AddressReadParams, AddressUpdateParams};
pub use call::{Call, CallCreateParams, CallReadParams, CallStatus, CallUpdateParams};
pub use usage::{MonthlyUsageRecord, UsageReadParams};

use crate::domain::{Domain, Version};
use crate::error::Result;
use crate::resource::{ResourceContext, ResourceList};
use crate::template::Solution;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// The `api` domain
#[derive(Debug)]
pub struct Api {
    domain: Arc<Domain>,
    v2010: OnceCell<V2010>,
}

impl Api {
    pub(crate) fn new(domain: Arc<Domain>) -> Self {
        Self {
            domain,
            v2010: OnceCell::new(),
        }
    }

    /// Version `2010-04-01`
    pub fn v2010(&self) -> &V2010 {
        self.v2010
            .get_or_init(|| V2010::new(Version::new(self.domain.clone(), "2010-04-01")))
    }
}

/// Version `2010-04-01` of the `api` domain
#[derive(Debug, Clone)]
pub struct V2010 {
    version: Version,
}

impl V2010 {
    fn new(version: Version) -> Self {
        Self { version }
    }

    /// The underlying version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Resources owned by one account
    pub fn account(&self, account_sid: &str) -> AccountScope {
        AccountScope {
            version: self.version.clone(),
            solution: Solution::new().with("accountSid", account_sid),
        }
    }
}

/// Resources nested under `/Accounts/{accountSid}`
#[derive(Debug, Clone)]
pub struct AccountScope {
    version: Version,
    solution: Solution,
}

impl AccountScope {
    /// SID of the account
    pub fn account_sid(&self) -> Option<&str> {
        self.solution.get("accountSid")
    }

    pub fn calls(&self) -> Result<ResourceList<Call>> {
        ResourceList::new(self.version.clone(), self.solution.clone())
    }

    pub fn call(&self, sid: &str) -> Result<ResourceContext<Call>> {
        self.calls()?.get(sid)
    }

    pub fn addresses(&self) -> Result<ResourceList<Address>> {
        ResourceList::new(self.version.clone(), self.solution.clone())
    }

    pub fn address(&self, sid: &str) -> Result<ResourceContext<Address>> {
        self.addresses()?.get(sid)
    }

    /// Usage records summarized per month
    pub fn usage_monthly(&self) -> Result<ResourceList<MonthlyUsageRecord>> {
        ResourceList::new(self.version.clone(), self.solution.clone())
    }
}
