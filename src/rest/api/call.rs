//! Calls of an account
//!
//! `/Accounts/{accountSid}/Calls.json`

use crate::decode::{decimal, rfc2822};
use crate::params::{ParamSet, Params, RequiredParams, ToParam};
use crate::resource::{
    Addressable, Collection, Creatable, Fetchable, Listable, Removable, Resource, Updatable,
};
use crate::types::JsonValue;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Call status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallStatus {
    Queued,
    Ringing,
    InProgress,
    Canceled,
    Completed,
    Failed,
    Busy,
    NoAnswer,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallStatus::Queued => "queued",
            CallStatus::Ringing => "ringing",
            CallStatus::InProgress => "in-progress",
            CallStatus::Canceled => "canceled",
            CallStatus::Completed => "completed",
            CallStatus::Failed => "failed",
            CallStatus::Busy => "busy",
            CallStatus::NoAnswer => "no-answer",
            CallStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl ToParam for CallStatus {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

/// A phone call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub annotation: Option<String>,
    pub answered_by: Option<String>,
    pub api_version: Option<String>,
    pub caller_name: Option<String>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub date_updated: Option<DateTime<Utc>>,
    pub direction: Option<String>,
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub forwarded_from: Option<String>,
    pub from: Option<String>,
    pub from_formatted: Option<String>,
    pub group_sid: Option<String>,
    pub parent_call_sid: Option<String>,
    pub phone_number_sid: Option<String>,
    #[serde(default, deserialize_with = "decimal::option")]
    pub price: Option<Decimal>,
    pub price_unit: Option<String>,
    #[serde(default, deserialize_with = "rfc2822::option")]
    pub start_time: Option<DateTime<Utc>>,
    pub status: Option<CallStatus>,
    pub subresource_uris: Option<JsonValue>,
    pub to: Option<String>,
    pub to_formatted: Option<String>,
    pub uri: Option<String>,
}

impl Resource for Call {
    fn id(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Collection for Call {
    const LIST_URI: &'static str = "/Accounts/{accountSid}/Calls.json";
}

impl Addressable for Call {
    const INSTANCE_URI: &'static str = "/Accounts/{accountSid}/Calls/{sid}.json";
}

impl Listable for Call {
    type ReadParams = CallReadParams;
}

impl Creatable for Call {
    type CreateParams = CallCreateParams;
}

impl Fetchable for Call {}

impl Updatable for Call {
    type UpdateParams = CallUpdateParams;
}

impl Removable for Call {}

/// Parameters to place a call
#[derive(Debug, Clone, Default)]
pub struct CallCreateParams {
    /// Phone number, SIP address or client identifier to call
    pub to: Option<String>,
    /// Caller ID
    pub from: Option<String>,
    pub url: Option<String>,
    pub application_sid: Option<String>,
    pub method: Option<String>,
    pub fallback_url: Option<String>,
    pub fallback_method: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_event: Option<Vec<String>>,
    pub status_callback_method: Option<String>,
    pub send_digits: Option<String>,
    pub if_machine: Option<String>,
    /// Seconds to wait for an answer
    pub timeout: Option<u32>,
    pub record: Option<bool>,
}

impl CallCreateParams {
    /// Create parameters with the required fields set
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            to: Some(to.into()),
            from: Some(from.into()),
            ..Default::default()
        }
    }
}

impl ParamSet for CallCreateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("To", self.to.as_ref())
            .set("From", self.from.as_ref())
            .set("Method", self.method.as_ref())
            .set("FallbackUrl", self.fallback_url.as_ref())
            .set("FallbackMethod", self.fallback_method.as_ref())
            .set("StatusCallback", self.status_callback.as_ref())
            .set_list("StatusCallbackEvent", self.status_callback_event.as_deref())
            .set("StatusCallbackMethod", self.status_callback_method.as_ref())
            .set("SendDigits", self.send_digits.as_ref())
            .set("IfMachine", self.if_machine.as_ref())
            .set("Timeout", self.timeout.as_ref())
            .set("Record", self.record.as_ref())
            .set("Url", self.url.as_ref())
            .set("ApplicationSid", self.application_sid.as_ref());
        params
    }
}

impl RequiredParams for CallCreateParams {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.to.is_none() {
            missing.push("to");
        }
        if self.from.is_none() {
            missing.push("from");
        }
        missing
    }
}

/// Filters for reading calls
#[derive(Debug, Clone, Default)]
pub struct CallReadParams {
    pub to: Option<String>,
    pub from: Option<String>,
    pub parent_call_sid: Option<String>,
    pub status: Option<CallStatus>,
    pub start_time_before: Option<NaiveDate>,
    pub start_time: Option<NaiveDate>,
    pub start_time_after: Option<NaiveDate>,
    pub end_time_before: Option<NaiveDate>,
    pub end_time: Option<NaiveDate>,
    pub end_time_after: Option<NaiveDate>,
}

impl ParamSet for CallReadParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("To", self.to.as_ref())
            .set("From", self.from.as_ref())
            .set("ParentCallSid", self.parent_call_sid.as_ref())
            .set("Status", self.status.as_ref())
            .set("StartTime<", self.start_time_before.as_ref())
            .set("StartTime", self.start_time.as_ref())
            .set("StartTime>", self.start_time_after.as_ref())
            .set("EndTime<", self.end_time_before.as_ref())
            .set("EndTime", self.end_time.as_ref())
            .set("EndTime>", self.end_time_after.as_ref());
        params
    }
}

/// Parameters to modify a live call
#[derive(Debug, Clone, Default)]
pub struct CallUpdateParams {
    pub url: Option<String>,
    pub method: Option<String>,
    pub status: Option<CallStatus>,
    pub fallback_url: Option<String>,
    pub fallback_method: Option<String>,
    pub status_callback: Option<String>,
    pub status_callback_method: Option<String>,
}

impl ParamSet for CallUpdateParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("Url", self.url.as_ref())
            .set("Method", self.method.as_ref())
            .set("Status", self.status.as_ref())
            .set("FallbackUrl", self.fallback_url.as_ref())
            .set("FallbackMethod", self.fallback_method.as_ref())
            .set("StatusCallback", self.status_callback.as_ref())
            .set("StatusCallbackMethod", self.status_callback_method.as_ref());
        params
    }
}
