//! Generation & mortality.
//!
//! Chained yearly systems (`YearPhase::Demographics`):
//! 1. `age_population`: everyone gets a year older (direct write)
//! 2. `process_mortality`: age-band death rolls on the new age
//! 3. `replenish_population`: a fixed cohort of newcomers comes of age
//! 4. `apply_sim_commands`

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{Has, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};
use rand::Rng;

use crate::config::{CursusConfig, MORTALITY_BAND_LIMITS};
use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind, apply_sim_commands};
use crate::ecs::components::{Age, CurrentOffice, Identity, Person, SenateMembership};
use crate::ecs::resources::DemographicsRng;
use crate::ecs::schedule::{SimTick, YearPhase};
use crate::model::SocialOrder;
use crate::model::event::EventKind;
use crate::names::generate_roman_name;

pub struct DemographicsPlugin;

impl Plugin for DemographicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (
                age_population,
                process_mortality,
                replenish_population,
                apply_sim_commands,
            )
                .chain()
                .in_set(YearPhase::Demographics),
        );
    }
}

/// Yearly death probability for a person of `age`.
pub fn mortality_chance(age: u32, table: &[f64; 7]) -> f64 {
    let band = MORTALITY_BAND_LIMITS
        .iter()
        .position(|&limit| age <= limit)
        .unwrap_or(MORTALITY_BAND_LIMITS.len());
    table[band]
}

/// One death roll for a person of `age`.
pub fn dies<R: Rng + ?Sized>(rng: &mut R, age: u32, table: &[f64; 7]) -> bool {
    rng.random::<f64>() < mortality_chance(age, table)
}

fn age_population(mut persons: Query<&mut Age, With<Person>>) {
    for mut age in &mut persons {
        age.years += 1;
    }
}

#[allow(clippy::type_complexity)]
fn process_mortality(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    mut rng: ResMut<DemographicsRng>,
    persons: Query<
        (
            Entity,
            &Identity,
            &Age,
            Option<&CurrentOffice>,
            Has<SenateMembership>,
        ),
        With<Person>,
    >,
    mut commands: MessageWriter<SimCommand>,
) {
    let rng = &mut rng.0;

    let mut living: Vec<_> = persons.iter().collect();
    living.sort_unstable_by_key(|(_, identity, ..)| identity.id);

    let mut deaths = 0usize;
    for (entity, identity, age, office, is_senator) in living {
        if !dies(&mut *rng, age.years, &config.mortality_chance) {
            continue;
        }
        deaths += 1;

        let office = office.map(|o| o.office);
        tracing::debug!(
            year = clock.year,
            name = %identity.name,
            age = age.years,
            office = office.map(|o| o.as_str()),
            senator = is_senator,
            "died"
        );

        let description = match office {
            Some(office) => format!("{} died in office as {office}, aged {}", identity.name, age.years),
            None => format!("{} died aged {}", identity.name, age.years),
        };
        commands.write(
            SimCommand::new(SimCommandKind::PersonDied { person: entity }, EventKind::Death, description)
                .with_participant(entity)
                .with_data(serde_json::json!({
                    "age": age.years,
                    "office": office.map(|o| o.as_str()),
                    "senator": is_senator,
                })),
        );
    }

    tracing::info!(year = clock.year, deaths, "mortality");
}

fn replenish_population(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    mut rng: ResMut<DemographicsRng>,
    mut commands: MessageWriter<SimCommand>,
) {
    let rng = &mut rng.0;
    let count = config.replenish_count();

    for _ in 0..count {
        let name = generate_roman_name(&mut *rng);
        let order = if rng.random_bool(0.5) {
            SocialOrder::Patrician
        } else {
            SocialOrder::Plebeian
        };
        let description = format!("{name} came of age");
        commands.write(
            SimCommand::new(
                SimCommandKind::PersonCameOfAge {
                    name,
                    age: config.entry_age,
                    order,
                    score: config.starting_score,
                },
                EventKind::CameOfAge,
                description,
            )
            .with_data(serde_json::json!({ "order": order.as_str() })),
        );
    }

    tracing::debug!(year = clock.year, newcomers = count, "replenished");
}

#[cfg(test)]
mod tests {
    use bevy_app::App;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::ecs::app::{build_sim_app_seeded, build_sim_app_with_config};
    use crate::ecs::components::{CareerRecord, Order};
    use crate::ecs::resources::{EcsIdGenerator, EventLog};
    use crate::ecs::spawn::spawn_person;
    use crate::model::Magistracy;

    const DEFAULT_TABLE: [f64; 7] = [0.001, 0.002, 0.008, 0.025, 0.075, 0.15, 0.5];

    fn quiet_config() -> CursusConfig {
        CursusConfig {
            mortality_chance: [0.0; 7],
            replenish_multiplier: 0.0,
            ..CursusConfig::default()
        }
    }

    fn setup_app(config: CursusConfig) -> App {
        let mut app = build_sim_app_with_config(1, 42, config).unwrap();
        // Keep newcomer ids clear of the ones tests assign
        app.world_mut().resource_mut::<EcsIdGenerator>().0 = crate::IdGenerator::starting_from(1000);
        app.add_plugins(DemographicsPlugin);
        app
    }

    fn population(app: &mut App) -> Vec<(u64, u32)> {
        let world = app.world_mut();
        let mut query = world.query_filtered::<(&Identity, &Age), With<Person>>();
        let mut people: Vec<(u64, u32)> = query.iter(world).map(|(i, a)| (i.id, a.years)).collect();
        people.sort_unstable();
        people
    }

    #[test]
    fn mortality_band_boundaries() {
        assert_eq!(mortality_chance(16, &DEFAULT_TABLE), 0.001);
        assert_eq!(mortality_chance(20, &DEFAULT_TABLE), 0.001);
        assert_eq!(mortality_chance(21, &DEFAULT_TABLE), 0.002);
        assert_eq!(mortality_chance(40, &DEFAULT_TABLE), 0.008);
        assert_eq!(mortality_chance(50, &DEFAULT_TABLE), 0.025);
        assert_eq!(mortality_chance(60, &DEFAULT_TABLE), 0.075);
        assert_eq!(mortality_chance(70, &DEFAULT_TABLE), 0.15);
        assert_eq!(mortality_chance(71, &DEFAULT_TABLE), 0.5);
        assert_eq!(mortality_chance(120, &DEFAULT_TABLE), 0.5);
    }

    #[test]
    fn youngest_band_empirical_rate() {
        // Age 19, p = 0.001: expect ~10 deaths in 10 000 trials
        let mut rng = SmallRng::seed_from_u64(2024);
        let trials = 10_000;
        let deaths = (0..trials).filter(|_| dies(&mut rng, 19, &DEFAULT_TABLE)).count();
        assert!((1..=30).contains(&deaths), "expected ~10 deaths, got {deaths}");
    }

    #[test]
    fn oldest_band_empirical_rate() {
        // Age 80, p = 0.5
        let mut rng = SmallRng::seed_from_u64(7);
        let deaths = (0..10_000).filter(|_| dies(&mut rng, 80, &DEFAULT_TABLE)).count();
        assert!((4_700..=5_300).contains(&deaths), "expected ~5000 deaths, got {deaths}");
    }

    #[test]
    fn zero_and_certain_chances_are_exact() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(!dies(&mut rng, 30, &[0.0; 7]));
            assert!(dies(&mut rng, 30, &[1.0; 7]));
        }
    }

    #[test]
    fn everyone_ages_one_year() {
        let mut app = setup_app(quiet_config());
        spawn_person(app.world_mut(), 1, "Gaius Julius".into(), 17, SocialOrder::Patrician, 0.1);
        spawn_person(app.world_mut(), 2, "Marcus Fabius".into(), 74, SocialOrder::Plebeian, 0.1);

        app.world_mut().run_schedule(SimTick);

        assert_eq!(population(&mut app), vec![(1, 18), (2, 75)]);
    }

    #[test]
    fn certain_death_removes_every_record() {
        let config = CursusConfig {
            mortality_chance: [1.0; 7],
            ..quiet_config()
        };
        let mut app = setup_app(config);
        let magistrate =
            spawn_person(app.world_mut(), 1, "Appius Horatius".into(), 42, SocialOrder::Patrician, 0.1);
        app.world_mut().entity_mut(magistrate).insert((
            CurrentOffice {
                office: Magistracy::Consul,
            },
            SenateMembership {
                inducted_age: 40,
                inducted_year: 1,
            },
        ));
        spawn_person(app.world_mut(), 2, "Titus Junius".into(), 20, SocialOrder::Plebeian, 0.1);

        app.world_mut().run_schedule(SimTick);

        assert!(population(&mut app).is_empty());
        assert!(app.world().get_entity(magistrate).is_err());
        let world = app.world_mut();
        assert_eq!(world.query::<&CurrentOffice>().iter(world).count(), 0);
        assert_eq!(world.query::<&SenateMembership>().iter(world).count(), 0);
        assert_eq!(world.query::<&CareerRecord>().iter(world).count(), 0);

        let log = app.world().resource::<EventLog>();
        assert_eq!(log.of_kind(EventKind::Death).count(), 2);
    }

    #[test]
    fn death_is_checked_on_the_new_age() {
        // Only the oldest band is lethal; 70 becomes 71 this year
        let config = CursusConfig {
            mortality_chance: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            ..quiet_config()
        };
        let mut app = setup_app(config);
        spawn_person(app.world_mut(), 1, "Spurius Furius".into(), 70, SocialOrder::Plebeian, 0.1);
        spawn_person(app.world_mut(), 2, "Numerius Julius".into(), 69, SocialOrder::Plebeian, 0.1);

        app.world_mut().run_schedule(SimTick);

        assert_eq!(population(&mut app), vec![(2, 70)]);
    }

    #[test]
    fn replenishment_adds_a_full_cohort() {
        let mut app = build_sim_app_seeded(1, 42);
        app.world_mut().insert_resource(CursusConfig {
            mortality_chance: [0.0; 7],
            ..CursusConfig::default()
        });
        app.add_plugins(DemographicsPlugin);

        app.world_mut().run_schedule(SimTick);

        let world = app.world_mut();
        let mut query = world.query::<(&Age, &Order, &CareerRecord)>();
        let newcomers: Vec<_> = query.iter(world).collect();
        assert_eq!(newcomers.len(), 108);
        assert!(newcomers.iter().all(|(age, _, career)| {
            age.years == 16 && career.score == 0.1 && career.history.is_empty()
        }));
        let patricians = newcomers
            .iter()
            .filter(|(_, order, _)| order.0 == SocialOrder::Patrician)
            .count();
        assert!(patricians > 20 && patricians < 88, "patricians: {patricians}");

        let log = app.world().resource::<EventLog>();
        assert_eq!(log.of_kind(EventKind::CameOfAge).count(), 108);
    }

    #[test]
    fn newcomers_are_not_aged_in_their_first_year() {
        let config = CursusConfig {
            generation_size: 2,
            replenish_multiplier: 1.0,
            ..quiet_config()
        };
        let mut app = setup_app(config);
        app.world_mut().run_schedule(SimTick);
        app.world_mut().run_schedule(SimTick);

        let mut ages: Vec<u32> = population(&mut app).into_iter().map(|(_, age)| age).collect();
        ages.sort_unstable();
        assert_eq!(ages, vec![16, 16, 17, 17]);
    }
}
