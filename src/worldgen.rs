//! Founding of the Republic: the initial population, a full slate of sitting
//! magistrates, and a starting Senate.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::{Mut, World};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::CursusConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::components::{Age, CareerRecord, CurrentOffice, SenateMembership};
use crate::ecs::resources::{EcsIdGenerator, SimRng};
use crate::ecs::spawn::spawn_person;
use crate::model::SocialOrder;
use crate::names::generate_roman_name;

/// What the founding produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Founding {
    pub population: usize,
    pub magistrates: usize,
    pub senators: usize,
}

/// Populate an empty world. Draws from the global `SimRng`, so the same seed
/// always founds the same Republic.
pub fn found_republic(world: &mut World) -> Founding {
    let config = world.resource::<CursusConfig>().clone();
    let year = world.resource::<SimClock>().year;

    world.resource_scope(|world, mut sim_rng: Mut<SimRng>| {
        let rng = &mut sim_rng.rng;

        // -- Population: one generation per year of age --
        let mut unseated: Vec<(Entity, SocialOrder)> = Vec::new();
        let mut possible_senators: Vec<Entity> = Vec::new();
        for age in config.founding_min_age..config.founding_max_age {
            for _ in 0..config.generation_size {
                let name = generate_roman_name(&mut *rng);
                let order = if rng.random_bool(0.5) {
                    SocialOrder::Patrician
                } else {
                    SocialOrder::Plebeian
                };
                let id = world.resource_mut::<EcsIdGenerator>().0.next_id();
                let entity = spawn_person(world, id, name, age, order, config.starting_score);
                unseated.push((entity, order));
                if age >= config.starting_senator_age {
                    possible_senators.push(entity);
                }
            }
        }
        let population = unseated.len();

        // -- Sitting magistrates --
        let mut magistrates = 0usize;
        for spec in &config.catalog.offices {
            // Founders count the office they hold as already served
            let mut resume = vec![spec.kind];
            resume.extend_from_slice(config.catalog.requirements(spec.kind).unwrap_or_default());
            for seat in 0..spec.cohort_size {
                let admissible: Vec<usize> = unseated
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, order))| spec.class_requirement.admits(*order))
                    .map(|(i, _)| i)
                    .collect();
                let Some(&pick) = admissible.choose(rng) else {
                    tracing::warn!(
                        office = %spec.kind,
                        filled = seat,
                        seats = spec.cohort_size,
                        "not enough eligible founders to fill the office"
                    );
                    break;
                };
                let (person, _) = unseated.swap_remove(pick);

                let mut entity = world.entity_mut(person);
                if let Some(mut age) = entity.get_mut::<Age>() {
                    age.years = spec.usual_age;
                }
                if let Some(mut career) = entity.get_mut::<CareerRecord>() {
                    career.score += config.election_bump;
                    career.history = resume.clone();
                }
                entity.insert(CurrentOffice { office: spec.kind });
                magistrates += 1;
            }
        }

        // -- Starting Senate --
        let chosen: Vec<Entity> = possible_senators
            .choose_multiple(rng, config.starting_senate_size)
            .copied()
            .collect();
        for &person in &chosen {
            let age = world.get::<Age>(person).map_or(0, |age| age.years);
            world.entity_mut(person).insert(SenateMembership {
                inducted_age: age,
                inducted_year: year,
            });
        }

        let founding = Founding {
            population,
            magistrates,
            senators: chosen.len(),
        };
        tracing::info!(
            year,
            population = founding.population,
            magistrates = founding.magistrates,
            senators = founding.senators,
            "Republic founded"
        );
        founding
    })
}
