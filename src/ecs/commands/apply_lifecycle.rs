use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::spawn::spawn_person;
use crate::model::SocialOrder;

use super::applicator::{ApplyCtx, StoreError};

/// Person died: remove the entity and every record it carried, offices and
/// Senate seat included. Nobody is appointed in their place.
pub(crate) fn apply_person_died(world: &mut World, person: Entity) -> Result<(), StoreError> {
    if world.despawn(person) {
        Ok(())
    } else {
        Err(StoreError::MissingEntity {
            entity: person,
            action: "person_died",
        })
    }
}

/// A newcomer joins the politically active population.
pub(crate) fn apply_person_came_of_age(
    ctx: &mut ApplyCtx,
    world: &mut World,
    name: &str,
    age: u32,
    order: SocialOrder,
    score: f64,
) -> Entity {
    let id = ctx.id_gen.0.next_id();
    spawn_person(world, id, name.to_string(), age, order, score)
}
