//! Generic resource machinery
//!
//! Concrete resources are plain record structs that opt into capabilities
//! through the traits below. [`ResourceList`], [`ResourceContext`] and
//! [`Instance`] then provide the operations those capabilities allow.

mod instance;
mod list;

pub use instance::{Instance, ResourceContext};
pub use list::ResourceList;

use crate::decode::decode_record;
use crate::error::Result;
use crate::params::{ParamSet, RequiredParams};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A typed, immutable record decoded from the API
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Value of the path parameter that addresses this record
    fn id(&self) -> Option<&str> {
        None
    }

    /// Decode a raw record
    fn from_payload(payload: &JsonValue) -> Result<Self> {
        decode_record(payload)
    }
}

/// A resource reachable through a collection URI
pub trait Collection: Resource {
    /// Collection URI template, e.g. `/Accounts/{accountSid}/Calls.json`
    const LIST_URI: &'static str;
}

/// A collection that can be read page by page
pub trait Listable: Collection {
    /// Filters accepted by reads
    type ReadParams: ParamSet + Default + Clone + Send + Sync + 'static;
}

/// A collection that accepts new records
pub trait Creatable: Collection {
    /// Create parameters
    type CreateParams: ParamSet + RequiredParams;
}

/// A resource with its own instance URI
pub trait Addressable: Resource {
    /// Instance URI template, e.g. `/Accounts/{accountSid}/Calls/{sid}.json`
    const INSTANCE_URI: &'static str;
    /// Name of the path parameter holding the record's identifier
    const ID_PARAM: &'static str = "sid";
}

/// A resource that can be fetched
pub trait Fetchable: Addressable {}

/// A resource that can be updated
pub trait Updatable: Addressable {
    /// Update parameters
    type UpdateParams: ParamSet + Default;
}

/// A resource that can be removed
pub trait Removable: Addressable {}
