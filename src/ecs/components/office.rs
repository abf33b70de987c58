use bevy_ecs::component::Component;

use crate::model::Magistracy;

/// The post a person is serving this year.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentOffice {
    pub office: Magistracy,
}

/// Elected but not yet installed. Lives from the election phase until the
/// next year transition.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElectionResult {
    pub office: Magistracy,
}
