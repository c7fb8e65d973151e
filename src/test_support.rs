//! Shared fixtures for unit tests

use crate::domain::{Domain, Version};
use crate::http::testing::MockTransport;
use crate::http::Credentials;
use crate::params::{ParamSet, Params, RequiredParams};
use crate::resource::{
    Addressable, Collection, Creatable, Fetchable, Listable, Removable, Resource, Updatable,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub const BASE_URL: &str = "https://widgets.example.com";

/// Minimal resource used to exercise the generic machinery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub sid: Option<String>,
    pub name: Option<String>,
}

impl Resource for Widget {
    fn id(&self) -> Option<&str> {
        self.sid.as_deref()
    }
}

impl Collection for Widget {
    const LIST_URI: &'static str = "/Shops/{shopSid}/Widgets";
}

impl Addressable for Widget {
    const INSTANCE_URI: &'static str = "/Shops/{shopSid}/Widgets/{sid}";
}

impl Fetchable for Widget {}
impl Removable for Widget {}

#[derive(Debug, Clone, Default)]
pub struct WidgetFilters {
    pub name: Option<String>,
}

impl ParamSet for WidgetFilters {
    fn to_params(&self) -> Params {
        Params::new().with("Name", self.name.as_ref())
    }
}

impl Listable for Widget {
    type ReadParams = WidgetFilters;
}

#[derive(Debug, Clone, Default)]
pub struct WidgetCreate {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl ParamSet for WidgetCreate {
    fn to_params(&self) -> Params {
        Params::new()
            .with("Name", self.name.as_ref())
            .with("Color", self.color.as_ref())
    }
}

impl RequiredParams for WidgetCreate {
    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.color.is_none() {
            missing.push("color");
        }
        missing
    }
}

impl Creatable for Widget {
    type CreateParams = WidgetCreate;
}

impl Updatable for Widget {
    type UpdateParams = WidgetCreate;
}

pub fn version(transport: &MockTransport) -> Version {
    let domain = Domain::new("widgets", BASE_URL, Arc::new(transport.clone()))
        .with_credentials(Some(Credentials::new("AC123", "token")));
    Version::new(Arc::new(domain), "v1")
}

/// Legacy page payload with `next_page_uri`
pub fn legacy_page(sids: &[&str], next_page_uri: Option<&str>) -> Value {
    json!({
        "widgets": sids.iter().map(|sid| json!({"sid": sid, "name": format!("widget {sid}")})).collect::<Vec<_>>(),
        "next_page_uri": next_page_uri,
        "page": 0,
        "page_size": sids.len(),
        "uri": "/v1/Shops/SH1/Widgets"
    })
}

/// Meta page payload with `meta.next_page_url`
pub fn meta_page(sids: &[&str], next_page_url: Option<&str>) -> Value {
    json!({
        "meta": {
            "key": "widgets",
            "next_page_url": next_page_url,
            "previous_page_url": null,
            "first_page_url": format!("{BASE_URL}/v1/Shops/SH1/Widgets?PageSize=50&Page=0"),
            "page": 0,
            "page_size": 50
        },
        "widgets": sids.iter().map(|sid| json!({"sid": sid})).collect::<Vec<_>>()
    })
}
