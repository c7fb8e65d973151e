//! Call and video insights (`insights` domain)

mod room_participant;

pub use room_participant::Participant;

use crate::domain::{Domain, Version};
use crate::error::Result;
use crate::resource::{ResourceContext, ResourceList};
use crate::template::Solution;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// The `insights` domain
#[derive(Debug)]
pub struct Insights {
    domain: Arc<Domain>,
    v1: OnceCell<InsightsV1>,
}

impl Insights {
    pub(crate) fn new(domain: Arc<Domain>) -> Self {
        Self {
            domain,
            v1: OnceCell::new(),
        }
    }

    /// Version `v1`
    pub fn v1(&self) -> &InsightsV1 {
        self.v1.get_or_init(|| InsightsV1 {
            version: Version::new(self.domain.clone(), "v1"),
        })
    }
}

/// Version `v1` of the `insights` domain
#[derive(Debug, Clone)]
pub struct InsightsV1 {
    version: Version,
}

impl InsightsV1 {
    /// Resources of one video room
    pub fn room(&self, room_sid: &str) -> RoomScope {
        RoomScope {
            version: self.version.clone(),
            solution: Solution::new().with("roomSid", room_sid),
        }
    }
}

/// Resources nested under `/Video/Rooms/{roomSid}`
#[derive(Debug, Clone)]
pub struct RoomScope {
    version: Version,
    solution: Solution,
}

impl RoomScope {
    pub fn participants(&self) -> Result<ResourceList<Participant>> {
        ResourceList::new(self.version.clone(), self.solution.clone())
    }

    pub fn participant(&self, participant_sid: &str) -> Result<ResourceContext<Participant>> {
        self.participants()?.get(participant_sid)
    }
}
