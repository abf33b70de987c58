//! Shock phase: the year's fortunes land on the sitting magistrates.
//!
//! Chained yearly systems (`YearPhase::Shocks`):
//! 1. `log_population`: population size and age distribution
//! 2. `apply_year_shock`: one shared draw, score deltas for head and entry holders
//! 3. `apply_sim_commands`

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;
use serde::Serialize;

use crate::config::CursusConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind, apply_sim_commands};
use crate::ecs::components::{Age, CurrentOffice, Identity, Person};
use crate::ecs::report::PopulationSummary;
use crate::ecs::resources::ShocksRng;
use crate::ecs::schedule::{SimTick, YearPhase};
use crate::model::event::EventKind;

/// Each shock component is drawn from `[-SHOCK_SPREAD, SHOCK_SPREAD)`.
const SHOCK_SPREAD: f64 = 0.5;

/// The year's economic, military and social fortunes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearShock {
    pub economic: f64,
    pub military: f64,
    pub social: f64,
}

impl YearShock {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            economic: rng.random_range(-SHOCK_SPREAD..SHOCK_SPREAD),
            military: rng.random_range(-SHOCK_SPREAD..SHOCK_SPREAD),
            social: rng.random_range(-SHOCK_SPREAD..SHOCK_SPREAD),
        }
    }

    /// Heads of state answer for everything, war twice over.
    pub fn head_delta(&self) -> f64 {
        self.economic + 2.0 * self.military + self.social
    }

    /// Junior officers answer only for the war.
    pub fn entry_delta(&self) -> f64 {
        self.military
    }
}

pub struct ShocksPlugin;

impl Plugin for ShocksPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (log_population, apply_year_shock, apply_sim_commands)
                .chain()
                .in_set(YearPhase::Shocks),
        );
    }
}

fn log_population(clock: Res<SimClock>, persons: Query<&Age, With<Person>>) {
    let summary = PopulationSummary::from_ages(persons.iter().map(|age| age.years));
    tracing::info!(
        year = clock.year,
        population = summary.size,
        "population by age: {summary}"
    );
}

fn apply_year_shock(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    mut rng: ResMut<ShocksRng>,
    holders: Query<(Entity, &Identity, &CurrentOffice), With<Person>>,
    mut commands: MessageWriter<SimCommand>,
) {
    let shock = YearShock::roll(&mut rng.0);
    let head = config.catalog.head_magistracy;
    let entry = config.catalog.entry_level;

    tracing::info!(
        year = clock.year,
        economic = shock.economic,
        military = shock.military,
        social = shock.social,
        "year shock"
    );

    let mut affected: Vec<(u64, Entity, f64)> = holders
        .iter()
        .filter_map(|(entity, identity, office)| {
            let delta = if office.office == head {
                shock.head_delta()
            } else if office.office == entry {
                shock.entry_delta()
            } else {
                return None;
            };
            Some((identity.id, entity, delta))
        })
        .collect();
    affected.sort_unstable_by_key(|(id, _, _)| *id);

    for (_, person, delta) in affected {
        commands.write(SimCommand::bookkeeping(SimCommandKind::AdjustScore {
            person,
            delta,
        }));
    }

    commands.write(
        SimCommand::new(
            SimCommandKind::Note,
            EventKind::YearShock,
            format!(
                "Year {}: economic {:+.3}, military {:+.3}, social {:+.3}",
                clock.year, shock.economic, shock.military, shock.social
            ),
        )
        .with_data(serde_json::to_value(shock).unwrap_or_default()),
    );
}
