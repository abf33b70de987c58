use bevy_ecs::resource::Resource;
use serde::Serialize;

use crate::model::event::{EventKind, EventParticipant};

/// One chronicle entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcsEvent {
    pub id: u64,
    pub kind: EventKind,
    pub year: u32,
    pub description: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

/// The Republic's chronicle: everything notable that happened, in order.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<EcsEvent>,
    pub participants: Vec<EventParticipant>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &EcsEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Chronicle ids of everyone named in the given entry.
    pub fn participants_of(&self, event_id: u64) -> Vec<u64> {
        self.participants
            .iter()
            .filter(|p| p.event_id == event_id)
            .map(|p| p.person_id)
            .collect()
    }
}
