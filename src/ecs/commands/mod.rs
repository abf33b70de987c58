pub mod applicator;
mod apply_career;
mod apply_lifecycle;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::event::EventKind;
use crate::model::{Magistracy, SocialOrder};

pub use applicator::{StoreError, apply_sim_commands};

/// A command describing an intended change to the population.
///
/// Phase systems only read the store; they emit these via
/// `MessageWriter<SimCommand>`. The applicator that closes each year phase
/// attaches, detaches, spawns and despawns, and records the chronicle entry.
#[derive(Message, Clone, Debug)]
pub struct SimCommand {
    /// The intent: what state change to apply.
    pub kind: SimCommandKind,
    /// Human-readable description for the chronicle.
    pub description: String,
    /// What EventKind to record (ignored for bookkeeping commands).
    pub event_kind: EventKind,
    /// Persons named in the chronicle entry.
    pub participants: Vec<Entity>,
    /// Structured metadata for the chronicle entry.
    pub event_data: serde_json::Value,
    /// If true, no chronicle entry is recorded.
    bookkeeping: bool,
}

impl SimCommand {
    /// Create a command that records a chronicle entry.
    pub fn new(kind: SimCommandKind, event_kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            event_kind,
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: false,
        }
    }

    /// Create a bookkeeping-only command (state change, no chronicle entry).
    pub fn bookkeeping(kind: SimCommandKind) -> Self {
        Self {
            kind,
            description: String::new(),
            event_kind: EventKind::Bookkeeping,
            participants: Vec::new(),
            event_data: serde_json::Value::Null,
            bookkeeping: true,
        }
    }

    pub fn is_bookkeeping(&self) -> bool {
        self.bookkeeping
    }

    pub fn with_participant(mut self, entity: Entity) -> Self {
        self.participants.push(entity);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.event_data = data;
        self
    }
}

/// Every state change the yearly phases can ask for.
#[derive(Clone, Debug)]
pub enum SimCommandKind {
    // -- Reputation --
    AdjustScore {
        person: Entity,
        delta: f64,
    },

    // -- Career --
    Elect {
        person: Entity,
        office: Magistracy,
        bonus: f64,
    },
    EndTerm {
        person: Entity,
    },
    TakeOffice {
        person: Entity,
    },
    InductSenator {
        person: Entity,
        inducted_age: u32,
        inducted_year: u32,
    },

    // -- Lifecycle --
    PersonDied {
        person: Entity,
    },
    PersonCameOfAge {
        name: String,
        age: u32,
        order: SocialOrder,
        score: f64,
    },

    /// Chronicle only; no state change.
    Note,
}

impl SimCommandKind {
    pub fn label(&self) -> &'static str {
        match self {
            SimCommandKind::AdjustScore { .. } => "adjust_score",
            SimCommandKind::Elect { .. } => "elect",
            SimCommandKind::EndTerm { .. } => "end_term",
            SimCommandKind::TakeOffice { .. } => "take_office",
            SimCommandKind::InductSenator { .. } => "induct_senator",
            SimCommandKind::PersonDied { .. } => "person_died",
            SimCommandKind::PersonCameOfAge { .. } => "person_came_of_age",
            SimCommandKind::Note => "note",
        }
    }
}
