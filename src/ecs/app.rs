use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::clock::SimClock;
use super::commands::SimCommand;
use super::resources::{
    DemographicsRng, EcsIdGenerator, EcsSimConfig, ElectionsRng, EventLog, ShocksRng, SimRng,
    TermCalendar, distribute_rng,
};
use super::schedule::{SimPhase, configure_sim_schedule};
use crate::config::{ConfigError, CursusConfig};

/// Build a headless Bevy app with the year clock, core resources, and the
/// command message type. Year phases are added by [`super::CursusPlugin`].
///
/// Manual tick control:
/// ```no_run
/// # use cursus::ecs::{build_sim_app, SimTick};
/// let mut app = build_sim_app(1);
/// for _ in 0..100 {  // one tick per year
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_sim_app(start_year: u32) -> App {
    build_sim_app_seeded(start_year, 42)
}

/// Build a headless app with a specific RNG seed and the default tuning.
pub fn build_sim_app_seeded(start_year: u32, seed: u64) -> App {
    let sim = EcsSimConfig {
        start_year,
        seed,
        ..EcsSimConfig::default()
    };
    // The default ladder always validates
    assemble(sim, CursusConfig::default(), ExecutorKind::SingleThreaded)
}

/// Build a headless app with custom tuning. Single-threaded so RNG
/// consumption order is identical across runs.
pub fn build_sim_app_with_config(
    start_year: u32,
    seed: u64,
    config: CursusConfig,
) -> Result<App, ConfigError> {
    let sim = EcsSimConfig {
        start_year,
        seed,
        ..EcsSimConfig::default()
    };
    build_sim_app_with_executor(sim, config, ExecutorKind::SingleThreaded)
}

/// Build a headless app with a specific executor kind. Rejects tuning that
/// would break a year phase, such as an empty vote range.
pub fn build_sim_app_with_executor(
    sim: EcsSimConfig,
    config: CursusConfig,
    executor: ExecutorKind,
) -> Result<App, ConfigError> {
    config.validate()?;
    Ok(assemble(sim, config, executor))
}

fn assemble(sim: EcsSimConfig, config: CursusConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SimClock::new(sim.start_year));
    app.insert_resource(EventLog::new());
    app.insert_resource(EcsIdGenerator::default());
    app.insert_resource(TermCalendar::default());
    app.insert_resource(SimRng {
        rng: SmallRng::seed_from_u64(sim.seed),
        seed: sim.seed,
    });
    app.insert_resource(config);
    app.insert_resource(sim);

    // Per-domain RNG resources (reseeded each tick by distribute_rng)
    app.init_resource::<ShocksRng>();
    app.init_resource::<ElectionsRng>();
    app.init_resource::<DemographicsRng>();

    MessageRegistry::register_message::<SimCommand>(app.world_mut());

    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(distribute_rng.in_set(SimPhase::PreUpdate));
    app.add_schedule(schedule);
    app
}
