#[macro_use]
mod macros;

pub mod event;
pub mod magistracy;

pub use event::{EventKind, EventParticipant};
pub use magistracy::{ClassRequirement, Magistracy, MagistracySpec, OfficeCatalog, SocialOrder};
