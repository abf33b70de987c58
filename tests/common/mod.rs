use std::collections::BTreeMap;

use bevy_app::App;
use cursus::ecs::{
    CareerRecord, CursusPlugin, Identity, SenateMembership, build_sim_app_with_config,
};
use cursus::{CursusConfig, found_republic};

pub const START_YEAR: u32 = 1;

/// Build an app, found the Republic, and install the year phases.
pub fn founded_app(seed: u64, config: CursusConfig) -> App {
    let mut app = build_sim_app_with_config(START_YEAR, seed, config).unwrap();
    app.add_plugins(CursusPlugin);
    found_republic(app.world_mut());
    app
}

/// Career history length per chronicle id.
pub fn history_lengths(app: &mut App) -> BTreeMap<u64, usize> {
    let world = app.world_mut();
    let mut query = world.query::<(&Identity, &CareerRecord)>();
    query
        .iter(world)
        .map(|(identity, career)| (identity.id, career.history.len()))
        .collect()
}

/// Senate seat per chronicle id.
pub fn senate_seats(app: &mut App) -> BTreeMap<u64, SenateMembership> {
    let world = app.world_mut();
    let mut query = world.query::<(&Identity, &SenateMembership)>();
    query
        .iter(world)
        .map(|(identity, seat)| (identity.id, *seat))
        .collect()
}
