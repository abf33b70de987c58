//! Year transition: outgoing magistrates step down, the newly elected take
//! office, and a sitting census office enrolls qualified citizens in the Senate.
//!
//! Chained yearly systems (`YearPhase::Transition`):
//! 1. `announce_outgoing`: roster before rotation
//! 2. `rotate_offices`: end every term, then install every result (once per year)
//! 3. `apply_sim_commands`
//! 4. `conduct_census`: induction, or a vacancy report in a due census year
//! 5. `apply_sim_commands`

use bevy_app::{App, Plugin};
use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageWriter;
use bevy_ecs::query::{Has, With};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::config::CursusConfig;
use crate::ecs::clock::SimClock;
use crate::ecs::commands::{SimCommand, SimCommandKind, apply_sim_commands};
use crate::ecs::components::{
    Age, CareerRecord, CurrentOffice, ElectionResult, Identity, Person, SenateMembership,
};
use crate::ecs::report::format_roster;
use crate::ecs::resources::TermCalendar;
use crate::ecs::schedule::{SimTick, YearPhase};
use crate::model::event::EventKind;

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            SimTick,
            (
                announce_outgoing,
                rotate_offices,
                apply_sim_commands,
                conduct_census,
                apply_sim_commands,
            )
                .chain()
                .in_set(YearPhase::Transition),
        );
    }
}

fn announce_outgoing(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    holders: Query<(&Identity, &CurrentOffice)>,
) {
    let lines = format_roster(
        &config.catalog,
        holders
            .iter()
            .map(|(identity, office)| (office.office, identity.id, identity.name.as_str())),
    );
    for line in lines {
        tracing::info!(year = clock.year, "outgoing {line}");
    }
}

/// Emit every term end before any installation so nobody is retired from
/// the office they were just given.
pub(crate) fn rotate_offices(
    clock: Res<SimClock>,
    mut calendar: ResMut<TermCalendar>,
    serving: Query<(Entity, &Identity, &CurrentOffice)>,
    elected: Query<(Entity, &Identity, &ElectionResult)>,
    mut commands: MessageWriter<SimCommand>,
) {
    let year = clock.year;
    if calendar.rotated_in == Some(year) {
        tracing::debug!(year, "terms already rotated this year");
        return;
    }
    calendar.rotated_in = Some(year);

    let mut outgoing: Vec<_> = serving.iter().collect();
    outgoing.sort_unstable_by_key(|(_, identity, _)| identity.id);
    for (person, identity, office) in outgoing {
        commands.write(
            SimCommand::new(
                SimCommandKind::EndTerm { person },
                EventKind::LeftOffice,
                format!("{} completed a term as {}", identity.name, office.office),
            )
            .with_participant(person)
            .with_data(serde_json::json!({ "office": office.office.as_str() })),
        );
    }

    let mut incoming: Vec<_> = elected.iter().collect();
    incoming.sort_unstable_by_key(|(_, identity, _)| identity.id);
    for (person, identity, result) in incoming {
        commands.write(
            SimCommand::new(
                SimCommandKind::TakeOffice { person },
                EventKind::TookOffice,
                format!("{} took office as {}", identity.name, result.office),
            )
            .with_participant(person)
            .with_data(serde_json::json!({ "office": result.office.as_str() })),
        );
    }
}

#[allow(clippy::type_complexity)]
fn conduct_census(
    clock: Res<SimClock>,
    config: Res<CursusConfig>,
    offices: Query<&CurrentOffice>,
    persons: Query<(Entity, &Identity, &Age, &CareerRecord, Has<SenateMembership>), With<Person>>,
    mut commands: MessageWriter<SimCommand>,
) {
    let year = clock.year;
    let catalog = &config.catalog;
    let census_office = catalog.census_office;

    if !offices.iter().any(|o| o.office == census_office) {
        let due = catalog
            .spec(census_office)
            .is_some_and(|spec| spec.contested_in(year));
        if due {
            tracing::error!(year, office = %census_office, "census is due but nobody holds the office");
            commands.write(
                SimCommand::new(
                    SimCommandKind::Note,
                    EventKind::CensusVacant,
                    format!("No {} sat in year {year}; the census was not taken", census_office),
                )
                .with_data(serde_json::json!({ "office": census_office.as_str() })),
            );
        }
        return;
    }

    let qualifying = catalog.qualifying_office;
    let mut elite = 0usize;
    let mut senators = 0usize;
    let mut inductees: Vec<(u64, Entity, &str, u32)> = Vec::new();
    for (entity, identity, age, career, is_senator) in persons.iter() {
        let qualified = career.has_held(qualifying);
        if qualified {
            elite += 1;
        }
        if is_senator {
            senators += 1;
        } else if qualified {
            inductees.push((identity.id, entity, identity.name.as_str(), age.years));
        }
    }
    inductees.sort_unstable_by_key(|(id, ..)| *id);

    tracing::info!(
        year,
        elite,
        senate = senators + inductees.len(),
        inducted = inductees.len(),
        "census taken"
    );

    for (_, person, name, age) in inductees {
        commands.write(
            SimCommand::new(
                SimCommandKind::InductSenator {
                    person,
                    inducted_age: age,
                    inducted_year: year + 1,
                },
                EventKind::Inducted,
                format!("{name} enrolled in the Senate at {age}"),
            )
            .with_participant(person),
        );
    }
}
