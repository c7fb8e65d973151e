//! Addresses of an account

use crate::decode::rfc2822;
use crate::params::{ParamSet, Params, RequiredParams};
use crate::resource::{
    Addressable, Collection, Creatable, Fetchable, Listable, Removable, Resource, Updatable,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A postal address registered with the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub city: Option<String>,
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub date_updated: Option<DateTime<Utc>>,
    pub emergency_enabled: Option<bool>,
    pub friendly_name: Option<String>,
    pub iso_country: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub street: Option<String>,
    pub street_secondary: Option<String>,
    pub validated: Option<bool>,
    pub verified: Option<bool>,
    pub uri: Option<String>,
}

impl Resource for Address {
    fn id(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Collection for Address {
    const LIST_URI: &'static str = "/Accounts/{accountSid}/Addresses.json";
}

impl Addressable for Address {
    const INSTANCE_URI: &'static str = "/Accounts/{accountSid}/Addresses/{sid}.json";
}

impl Listable for Address {
    type ReadParams = AddressReadParams;
}

impl Creatable for Address {
    type CreateParams = AddressCreateParams;
}

impl Fetchable for Address {}

impl Updatable for Address {
    type UpdateParams = AddressUpdateParams;
}

impl Removable for Address {}

/// Parameters to register an address
#[derive(Debug, Clone, Default)]
pub struct AddressCreateParams {
    pub customer_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub iso_country: Option<String>,
    pub friendly_name: Option<String>,
    pub emergency_enabled: Option<bool>,
    pub auto_correct_address: Option<bool>,
}

impl ParamSet for AddressCreateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("CustomerName", self.customer_name.as_ref())
            .set("Street", self.street.as_ref())
            .set("City", self.city.as_ref())
            .set("Region", self.region.as_ref())
            .set("PostalCode", self.postal_code.as_ref())
            .set("IsoCountry", self.iso_country.as_ref())
            .set("FriendlyName", self.friendly_name.as_ref())
            .set("EmergencyEnabled", self.emergency_enabled.as_ref())
            .set("AutoCorrectAddress", self.auto_correct_address.as_ref());
        params
    }
}

impl RequiredParams for AddressCreateParams {
    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("customer_name", &self.customer_name),
            ("street", &self.street),
            ("city", &self.city),
            ("region", &self.region),
            ("postal_code", &self.postal_code),
            ("iso_country", &self.iso_country),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Filters for reading addresses
#[derive(Debug, Clone, Default)]
pub struct AddressReadParams {
    pub customer_name: Option<String>,
    pub friendly_name: Option<String>,
    pub iso_country: Option<String>,
}

impl ParamSet for AddressReadParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("CustomerName", self.customer_name.as_ref())
            .with("FriendlyName", self.friendly_name.as_ref())
            .with("IsoCountry", self.iso_country.as_ref())
    }
}

/// Parameters to modify an address
#[derive(Debug, Clone, Default)]
pub struct AddressUpdateParams {
    pub friendly_name: Option<String>,
    pub customer_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub emergency_enabled: Option<bool>,
    pub auto_correct_address: Option<bool>,
}

impl ParamSet for AddressUpdateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("FriendlyName", self.friendly_name.as_ref())
            .set("CustomerName", self.customer_name.as_ref())
            .set("Street", self.street.as_ref())
            .set("City", self.city.as_ref())
            .set("Region", self.region.as_ref())
            .set("PostalCode", self.postal_code.as_ref())
            .set("EmergencyEnabled", self.emergency_enabled.as_ref())
            .set("AutoCorrectAddress", self.auto_correct_address.as_ref());
        params
    }
}
