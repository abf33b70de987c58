use bevy_ecs::component::Component;

use crate::model::{Magistracy, SocialOrder};

/// Age in whole years.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
}

/// The social order a person was born into. Never changes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(pub SocialOrder);

/// Reputation and the offices a person has served.
///
/// `score` is unbounded in both directions. `history` is append-only and
/// records one entry per completed term.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CareerRecord {
    pub score: f64,
    pub history: Vec<Magistracy>,
}

impl CareerRecord {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            history: Vec::new(),
        }
    }

    pub fn has_held(&self, office: Magistracy) -> bool {
        self.history.contains(&office)
    }
}

/// Permanent seat in the Senate, granted at most once.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenateMembership {
    pub inducted_age: u32,
    pub inducted_year: u32,
}
