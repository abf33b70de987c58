pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod driver;
pub mod plugin;
pub mod report;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;

pub use app::{
    build_sim_app, build_sim_app_seeded, build_sim_app_with_config, build_sim_app_with_executor,
};
pub use clock::SimClock;
pub use commands::{SimCommand, SimCommandKind, StoreError};
pub use components::{
    Age, CareerRecord, CurrentOffice, ElectionResult, Identity, Order, Person, SenateMembership,
};
pub use driver::{current_year, run_simulation, run_year, run_years};
pub use plugin::CursusPlugin;
pub use report::{
    PopulationSummary, RosterLine, display_magistrates, magistrates, roster, senate_size,
};
pub use resources::{EcsEvent, EcsIdGenerator, EcsSimConfig, EventLog, SimRng, TermCalendar};
pub use schedule::{SimPhase, SimTick, YearPhase, configure_sim_schedule};
