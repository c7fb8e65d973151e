//! Inbound processing region of a phone number

use crate::decode::iso8601;
use crate::params::{ParamSet, Params};
use crate::resource::{Addressable, Fetchable, Resource, Updatable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Routing settings of one phone number, addressed by the number itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// E.164 phone number
    pub phone_number: Option<String>,
    pub url: Option<String>,
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub voice_region: Option<String>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl Resource for PhoneNumber {
    fn id(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

impl Addressable for PhoneNumber {
    const INSTANCE_URI: &'static str = "/PhoneNumbers/{phoneNumber}";
    const ID_PARAM: &'static str = "phoneNumber";
}

impl Fetchable for PhoneNumber {}

impl Updatable for PhoneNumber {
    type UpdateParams = PhoneNumberUpdateParams;
}

/// Parameters to change the routing of a phone number
#[derive(Debug, Clone, Default)]
pub struct PhoneNumberUpdateParams {
    /// Inbound processing region, e.g. `ie1`
    pub voice_region: Option<String>,
    pub friendly_name: Option<String>,
}

impl ParamSet for PhoneNumberUpdateParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("VoiceRegion", self.voice_region.as_ref())
            .with("FriendlyName", self.friendly_name.as_ref())
    }
}
