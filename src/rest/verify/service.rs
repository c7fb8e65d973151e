//! Verification services

use crate::decode::iso8601;
use crate::params::{NoParams, ParamSet, Params, RequiredParams};
use crate::resource::{
    Addressable, Collection, Creatable, Fetchable, Listable, Removable, Resource, Updatable,
};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A set of common verification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub code_length: Option<u32>,
    pub lookup_enabled: Option<bool>,
    pub psd2_enabled: Option<bool>,
    pub skip_sms_to_landlines: Option<bool>,
    pub dtmf_input_required: Option<bool>,
    pub tts_name: Option<String>,
    pub mailer_sid: Option<String>,
    pub do_not_share_warning_enabled: Option<bool>,
    pub custom_code_enabled: Option<bool>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub date_updated: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub links: Option<JsonValue>,
}

impl Resource for Service {
    fn id(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Collection for Service {
    const LIST_URI: &'static str = "/Services";
}

impl Addressable for Service {
    const INSTANCE_URI: &'static str = "/Services/{sid}";
}

impl Listable for Service {
    type ReadParams = NoParams;
}

impl Creatable for Service {
    type CreateParams = ServiceCreateParams;
}

impl Fetchable for Service {}

impl Updatable for Service {
    type UpdateParams = ServiceUpdateParams;
}

impl Removable for Service {}

/// Parameters to create a service
#[derive(Debug, Clone, Default)]
pub struct ServiceCreateParams {
    /// Name shown in verification messages
    pub friendly_name: Option<String>,
    /// Length of generated codes, 4 to 10
    pub code_length: Option<u32>,
    pub lookup_enabled: Option<bool>,
    pub skip_sms_to_landlines: Option<bool>,
    pub dtmf_input_required: Option<bool>,
    pub tts_name: Option<String>,
    pub psd2_enabled: Option<bool>,
    pub do_not_share_warning_enabled: Option<bool>,
    pub custom_code_enabled: Option<bool>,
}

impl ServiceCreateParams {
    pub fn new(friendly_name: impl Into<String>) -> Self {
        Self {
            friendly_name: Some(friendly_name.into()),
            ..Default::default()
        }
    }
}

impl ParamSet for ServiceCreateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("FriendlyName", self.friendly_name.as_ref())
            .set("CodeLength", self.code_length.as_ref())
            .set("LookupEnabled", self.lookup_enabled.as_ref())
            .set("SkipSmsToLandlines", self.skip_sms_to_landlines.as_ref())
            .set("DtmfInputRequired", self.dtmf_input_required.as_ref())
            .set("TtsName", self.tts_name.as_ref())
            .set("Psd2Enabled", self.psd2_enabled.as_ref())
            .set(
                "DoNotShareWarningEnabled",
                self.do_not_share_warning_enabled.as_ref(),
            )
            .set("CustomCodeEnabled", self.custom_code_enabled.as_ref());
        params
    }
}

impl RequiredParams for ServiceCreateParams {
    fn missing_required(&self) -> Vec<&'static str> {
        if self.friendly_name.is_none() {
            vec!["friendly_name"]
        } else {
            Vec::new()
        }
    }
}

/// Parameters to modify a service
#[derive(Debug, Clone, Default)]
pub struct ServiceUpdateParams {
    pub friendly_name: Option<String>,
    pub code_length: Option<u32>,
    pub lookup_enabled: Option<bool>,
    pub skip_sms_to_landlines: Option<bool>,
    pub dtmf_input_required: Option<bool>,
    pub tts_name: Option<String>,
    pub psd2_enabled: Option<bool>,
}

impl ParamSet for ServiceUpdateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("FriendlyName", self.friendly_name.as_ref())
            .set("CodeLength", self.code_length.as_ref())
            .set("LookupEnabled", self.lookup_enabled.as_ref())
            .set("SkipSmsToLandlines", self.skip_sms_to_landlines.as_ref())
            .set("DtmfInputRequired", self.dtmf_input_required.as_ref())
            .set("TtsName", self.tts_name.as_ref())
            .set("Psd2Enabled", self.psd2_enabled.as_ref());
        params
    }
}
