//! Monthly usage records
//!
//! Read-only; records carry no identifier of their own.

use crate::decode::{decimal, iso8601_date};
use crate::params::{ParamSet, Params};
use crate::resource::{Collection, Listable, Resource};
use crate::types::JsonValue;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Usage of one category over one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsageRecord {
    pub account_sid: Option<String>,
    pub api_version: Option<String>,
    pub category: Option<String>,
    pub count: Option<String>,
    pub count_unit: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "iso8601_date::option")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "decimal::option")]
    pub price: Option<Decimal>,
    pub price_unit: Option<String>,
    #[serde(default, deserialize_with = "iso8601_date::option")]
    pub start_date: Option<NaiveDate>,
    pub subresource_uris: Option<JsonValue>,
    pub uri: Option<String>,
    pub usage: Option<String>,
    pub usage_unit: Option<String>,
}

impl Resource for MonthlyUsageRecord {}

impl Collection for MonthlyUsageRecord {
    const LIST_URI: &'static str = "/Accounts/{accountSid}/Usage/Records/Monthly.json";
}

impl Listable for MonthlyUsageRecord {
    type ReadParams = UsageReadParams;
}

/// Filters for reading usage records
#[derive(Debug, Clone, Default)]
pub struct UsageReadParams {
    /// Usage category, e.g. `calls` or `sms`
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub include_subaccounts: Option<bool>,
}

impl ParamSet for UsageReadParams {
    fn to_params(&self) -> Params {
        Params::new()
            .with("Category", self.category.as_ref())
            .with("StartDate", self.start_date.as_ref())
            .with("EndDate", self.end_date.as_ref())
            .with("IncludeSubaccounts", self.include_subaccounts.as_ref())
    }
}
