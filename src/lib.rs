pub mod config;
pub mod ecs;
pub mod id;
pub mod model;
pub mod names;
pub mod worldgen;

pub use config::{ConfigError, CursusConfig};
pub use id::IdGenerator;
pub use model::{
    ClassRequirement, EventKind, EventParticipant, Magistracy, MagistracySpec, OfficeCatalog,
    SocialOrder,
};
pub use worldgen::{Founding, found_republic};
