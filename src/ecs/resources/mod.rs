pub mod event_log;
pub mod sim_resources;

pub use event_log::{EcsEvent, EventLog};
pub use sim_resources::{
    DemographicsRng, EcsIdGenerator, EcsSimConfig, ElectionsRng, ShocksRng, SimRng, TermCalendar,
    distribute_rng,
};
