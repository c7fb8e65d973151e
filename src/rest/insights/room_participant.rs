//! Participants of a video room, as seen by call insights

use crate::decode::iso8601;
use crate::params::NoParams;
use crate::resource::{Addressable, Collection, Fetchable, Listable, Resource};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one participant's session in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_sid: Option<String>,
    pub participant_identity: Option<String>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub join_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "iso8601::option")]
    pub leave_time: Option<DateTime<Utc>>,
    pub duration_sec: Option<i64>,
    pub account_sid: Option<String>,
    pub room_sid: Option<String>,
    pub status: Option<String>,
    pub codecs: Option<Vec<String>>,
    pub end_reason: Option<String>,
    pub error_code: Option<i64>,
    pub error_code_url: Option<String>,
    pub media_region: Option<String>,
    pub properties: Option<JsonValue>,
    pub edge_location: Option<String>,
    pub publisher_info: Option<JsonValue>,
    pub url: Option<String>,
}

impl Resource for Participant {
    fn id(&self) -> Option<&str> {
        self.participant_sid.as_deref()
    }
}

impl Collection for Participant {
    const LIST_URI: &'static str = "/Video/Rooms/{roomSid}/Participants";
}

impl Addressable for Participant {
    const INSTANCE_URI: &'static str = "/Video/Rooms/{roomSid}/Participants/{participantSid}";
    const ID_PARAM: &'static str = "participantSid";
}

impl Listable for Participant {
    type ReadParams = NoParams;
}

impl Fetchable for Participant {}
