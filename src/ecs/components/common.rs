use bevy_ecs::component::Component;

/// Stable identity of a person. `id` outlives the ECS entity and is what the
/// chronicle refers to.
#[derive(Component, Debug, Clone)]
pub struct Identity {
    pub id: u64,
    pub name: String,
}

/// Marker for persons (as opposed to any bookkeeping entity).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Person;
