use bevy_app::App;

use super::clock::SimClock;
use super::report::roster;
use super::resources::EcsSimConfig;
use super::schedule::SimTick;

/// Announce the magistrates serving this year, then run the year.
pub fn run_year(app: &mut App) {
    let world = app.world_mut();
    let year = world.resource::<SimClock>().year;
    for line in roster(world) {
        tracing::info!(year, "{line}");
    }
    world.run_schedule(SimTick);
}

pub fn run_years(app: &mut App, years: u32) {
    for _ in 0..years {
        run_year(app);
    }
}

/// Run as many years as the app's `EcsSimConfig` asks for.
pub fn run_simulation(app: &mut App) {
    let years = app
        .world()
        .get_resource::<EcsSimConfig>()
        .map_or(0, |sim| sim.num_years);
    run_years(app, years);
}

/// Return the current simulation year from the clock resource.
pub fn current_year(app: &App) -> u32 {
    app.world().resource::<SimClock>().year
}
