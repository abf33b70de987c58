use bevy_ecs::entity::Entity;
use bevy_ecs::error::Result;
use bevy_ecs::message::Messages;
use bevy_ecs::world::{EntityWorldMut, World};
use thiserror::Error;

use crate::ecs::clock::SimClock;
use crate::ecs::components::Identity;
use crate::ecs::resources::{EcsEvent, EcsIdGenerator, EventLog};
use crate::model::event::EventParticipant;

use super::apply_career;
use super::apply_lifecycle;
use super::{SimCommand, SimCommandKind};

/// The store no longer agrees with what a phase observed. Never expected in a
/// healthy run; the schedule's error handler treats it as fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{action} targets entity {entity}, which no longer exists")]
    MissingEntity { entity: Entity, action: &'static str },
}

/// Context passed to all `apply_*` sub-functions, holding the resources they
/// need while the applicator has the world borrowed.
pub(crate) struct ApplyCtx {
    pub event_log: EventLog,
    pub id_gen: EcsIdGenerator,
    pub year: u32,
}

impl ApplyCtx {
    /// Record a chronicle entry for a non-bookkeeping command.
    /// Returns the event id (0 for bookkeeping commands).
    pub(crate) fn record_event(&mut self, world: &World, cmd: &SimCommand) -> u64 {
        if cmd.is_bookkeeping() {
            return 0;
        }

        let event_id = self.id_gen.0.next_id();
        self.event_log.events.push(EcsEvent {
            id: event_id,
            kind: cmd.event_kind,
            year: self.year,
            description: cmd.description.clone(),
            data: cmd.event_data.clone(),
        });

        for entity in &cmd.participants {
            if let Some(identity) = world.get::<Identity>(*entity) {
                self.event_log.participants.push(EventParticipant {
                    event_id,
                    person_id: identity.id,
                });
            }
        }

        event_id
    }
}

/// Mutable access to a person the command names. A missing entity means a
/// phase acted on a stale view of the store.
pub(crate) fn person_mut<'w>(
    world: &'w mut World,
    person: Entity,
    action: &'static str,
) -> std::result::Result<EntityWorldMut<'w>, StoreError> {
    world
        .get_entity_mut(person)
        .map_err(|_| StoreError::MissingEntity {
            entity: person,
            action,
        })
}

/// Exclusive system that drains all pending `SimCommand` messages, applies
/// them in order, and records the chronicle.
///
/// Closes every year phase, so each phase's changes are complete before the
/// next phase reads the store.
pub fn apply_sim_commands(world: &mut World) -> Result {
    let commands: Vec<SimCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SimCommand>>() else {
            return Ok(());
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return Ok(());
    }

    let year = world.resource::<SimClock>().year;
    let mut ctx = ApplyCtx {
        event_log: world.remove_resource::<EventLog>().unwrap_or_default(),
        id_gen: world.remove_resource::<EcsIdGenerator>().unwrap_or_default(),
        year,
    };

    let outcome = commands
        .iter()
        .try_for_each(|cmd| apply_command(&mut ctx, world, cmd));

    // Put resources back before surfacing any error
    world.insert_resource(ctx.event_log);
    world.insert_resource(ctx.id_gen);

    Ok(outcome?)
}

fn apply_command(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SimCommand,
) -> std::result::Result<(), StoreError> {
    tracing::trace!(year = ctx.year, command = cmd.kind.label(), "applying");
    ctx.record_event(world, cmd);

    match &cmd.kind {
        SimCommandKind::AdjustScore { person, delta } => {
            apply_career::apply_adjust_score(world, *person, *delta)
        }
        SimCommandKind::Elect {
            person,
            office,
            bonus,
        } => apply_career::apply_elect(world, *person, *office, *bonus),
        SimCommandKind::EndTerm { person } => apply_career::apply_end_term(world, *person),
        SimCommandKind::TakeOffice { person } => apply_career::apply_take_office(world, *person),
        SimCommandKind::InductSenator {
            person,
            inducted_age,
            inducted_year,
        } => apply_career::apply_induct_senator(world, *person, *inducted_age, *inducted_year),
        SimCommandKind::PersonDied { person } => apply_lifecycle::apply_person_died(world, *person),
        SimCommandKind::PersonCameOfAge {
            name,
            age,
            order,
            score,
        } => {
            apply_lifecycle::apply_person_came_of_age(ctx, world, name, *age, *order, *score);
            Ok(())
        }
        SimCommandKind::Note => Ok(()),
    }
}
