//! Election phase: fill each contested office from its eligible pool.
//!
//! Chained yearly systems (`YearPhase::Elections`):
//! 1. `hold_elections`: per office in catalog order: age window, order,
//!    resume filter, random vote, top `cohort_size` win
//! 2. `apply_sim_commands`

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::With;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;

use crate::config::CursusConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind, apply_sim_commands};
use crate::ecs::components::{Age, CareerRecord, Identity, Order, Person};
use crate::ecs::resources::ElectionsRng;
use crate::ecs::schedule::{SimTick, YearPhase};
use crate::model::event::EventKind;
use crate::model::{MagistracySpec, OfficeCatalog};

pub struct ElectionsPlugin;

impl Plugin for ElectionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (hold_elections, apply_sim_commands)
                .chain()
                .in_set(YearPhase::Elections),
        );
    }
}

/// Candidacy opens `window` years before the usual age and closes `window`
/// years after it (exclusive).
pub(crate) fn age_eligible(age: u32, usual_age: u32, window: u32) -> bool {
    age >= usual_age.saturating_sub(window) && age < usual_age + window
}

/// One uniform draw in `0..ceiling` per candidate, in the order given. The
/// highest `seats` draws win; ties keep the earlier candidate.
pub fn tally_votes<R: Rng + ?Sized>(
    candidates: &[Entity],
    seats: usize,
    ceiling: u32,
    rng: &mut R,
) -> Vec<Entity> {
    let mut ballots: Vec<(u32, Entity)> = candidates
        .iter()
        .map(|&candidate| (rng.random_range(0..ceiling), candidate))
        .collect();
    ballots.sort_by(|a, b| b.0.cmp(&a.0));
    ballots.truncate(seats);
    ballots.into_iter().map(|(_, candidate)| candidate).collect()
}

struct Candidate<'a> {
    id: u64,
    entity: Entity,
    name: &'a str,
}

fn eligible_pool<'a>(
    spec: &MagistracySpec,
    catalog: &OfficeCatalog,
    window: u32,
    persons: impl Iterator<Item = (Entity, &'a Identity, &'a Age, &'a Order, &'a CareerRecord)>,
) -> Vec<Candidate<'a>> {
    let mut pool: Vec<Candidate<'a>> = persons
        .filter(|(_, _, age, order, career)| {
            age_eligible(age.years, spec.usual_age, window)
                && spec.class_requirement.admits(order.0)
                && catalog.resume_satisfied(spec.kind, &career.history)
        })
        .map(|(entity, identity, ..)| Candidate {
            id: identity.id,
            entity,
            name: identity.name.as_str(),
        })
        .collect();
    pool.sort_unstable_by_key(|c| c.id);
    pool
}

fn hold_elections(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    mut rng: ResMut<ElectionsRng>,
    persons: Query<(Entity, &Identity, &Age, &Order, &CareerRecord), With<Person>>,
    mut commands: MessageWriter<SimCommand>,
) {
    let year = clock.year;
    let catalog = &config.catalog;

    for spec in &catalog.offices {
        if !spec.is_elected() || !spec.contested_in(year) {
            continue;
        }

        let pool = eligible_pool(spec, catalog, config.age_window, persons.iter());
        if pool.is_empty() {
            tracing::debug!(year, office = %spec.kind, "no eligible candidates");
            continue;
        }

        let entities: Vec<Entity> = pool.iter().map(|c| c.entity).collect();
        let winners = tally_votes(&entities, spec.cohort_size, config.vote_ceiling, &mut rng.0);

        tracing::debug!(
            year,
            office = %spec.kind,
            candidates = pool.len(),
            seats = spec.cohort_size,
            elected = winners.len(),
            "election held"
        );

        for person in winners {
            let name = pool
                .iter()
                .find(|c| c.entity == person)
                .map_or("", |c| c.name);
            commands.write(
                SimCommand::new(
                    SimCommandKind::Elect {
                        person,
                        office: spec.kind,
                        bonus: config.election_bump,
                    },
                    EventKind::Elected,
                    format!("{name} elected {} for year {}", spec.kind, year + 1),
                )
                .with_participant(person)
                .with_data(serde_json::json!({ "office": spec.kind.as_str() })),
            );
        }
    }
}
