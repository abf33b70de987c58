use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::*;
use crate::model::SocialOrder;

/// Create a person with the four records every person carries. Office,
/// election and senate records are attached later as the career unfolds.
pub fn spawn_person(
    world: &mut World,
    id: u64,
    name: String,
    age: u32,
    order: SocialOrder,
    score: f64,
) -> Entity {
    world
        .spawn((
            Identity { id, name },
            Person,
            Age { years: age },
            Order(order),
            CareerRecord::new(score),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_person_has_core_records_only() {
        let mut world = World::new();
        let e = spawn_person(
            &mut world,
            7,
            "Gaius Julius".into(),
            16,
            SocialOrder::Patrician,
            0.1,
        );

        let identity = world.get::<Identity>(e).unwrap();
        assert_eq!(identity.id, 7);
        assert_eq!(identity.name, "Gaius Julius");
        assert_eq!(world.get::<Age>(e).unwrap().years, 16);
        assert_eq!(world.get::<Order>(e).unwrap().0, SocialOrder::Patrician);
        assert!(world.get::<CareerRecord>(e).unwrap().history.is_empty());
        assert!(world.get::<CurrentOffice>(e).is_none());
        assert!(world.get::<ElectionResult>(e).is_none());
        assert!(world.get::<SenateMembership>(e).is_none());
    }
}
