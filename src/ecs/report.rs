//! Read-only views over the population: who holds what, how big the Senate
//! is, and how the population is spread across ages.

use std::collections::BTreeMap;
use std::fmt;

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::config::CursusConfig;
use crate::ecs::components::{Age, CurrentOffice, Identity, Person, SenateMembership};
use crate::model::{Magistracy, OfficeCatalog};

/// Entities currently serving as `kind`, in chronicle id order.
pub fn magistrates(world: &mut World, kind: Magistracy) -> Vec<Entity> {
    let mut query = world.query::<(Entity, &Identity, &CurrentOffice)>();
    let mut holders: Vec<(u64, Entity)> = query
        .iter(world)
        .filter(|(_, _, office)| office.office == kind)
        .map(|(entity, identity, _)| (identity.id, entity))
        .collect();
    holders.sort_unstable_by_key(|(id, _)| *id);
    holders.into_iter().map(|(_, entity)| entity).collect()
}

/// Names of the current holders of `kind`, joined with " and ".
pub fn display_magistrates(world: &mut World, kind: Magistracy) -> String {
    let holders = magistrates(world, kind);
    let names: Vec<&str> = holders
        .iter()
        .filter_map(|&entity| world.get::<Identity>(entity))
        .map(|identity| identity.name.as_str())
        .collect();
    names.join(" and ")
}

/// One line of a roster announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLine {
    pub office: Magistracy,
    pub holders: String,
}

impl fmt::Display for RosterLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.holders.is_empty() {
            write!(f, "{}: vacant", self.office.plural())
        } else {
            write!(f, "{}: {}", self.office.plural(), self.holders)
        }
    }
}

/// Group `(office, id, name)` triples into one line per elected office,
/// senior offices first. Holders are listed in id order.
pub fn format_roster<'a>(
    catalog: &OfficeCatalog,
    holders: impl IntoIterator<Item = (Magistracy, u64, &'a str)>,
) -> Vec<RosterLine> {
    let mut by_office: BTreeMap<Magistracy, Vec<(u64, &str)>> = BTreeMap::new();
    for (office, id, name) in holders {
        by_office.entry(office).or_default().push((id, name));
    }

    catalog
        .elected_by_seniority()
        .map(|spec| {
            let mut names = by_office.remove(&spec.kind).unwrap_or_default();
            names.sort_unstable_by_key(|(id, _)| *id);
            RosterLine {
                office: spec.kind,
                holders: names
                    .into_iter()
                    .map(|(_, name)| name)
                    .collect::<Vec<_>>()
                    .join(" and "),
            }
        })
        .collect()
}

/// The full roster of sitting magistrates.
pub fn roster(world: &mut World) -> Vec<RosterLine> {
    let catalog = world
        .get_resource::<CursusConfig>()
        .map(|config| config.catalog.clone())
        .unwrap_or_default();
    let mut query = world.query::<(&Identity, &CurrentOffice)>();
    format_roster(
        &catalog,
        query
            .iter(world)
            .map(|(identity, office)| (office.office, identity.id, identity.name.as_str())),
    )
}

pub fn senate_size(world: &mut World) -> usize {
    world
        .query_filtered::<(), (With<Person>, With<SenateMembership>)>()
        .iter(world)
        .count()
}

/// Population size and age distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationSummary {
    pub size: usize,
    pub by_age: BTreeMap<u32, usize>,
}

impl PopulationSummary {
    pub fn from_ages(ages: impl IntoIterator<Item = u32>) -> Self {
        let mut summary = Self::default();
        for age in ages {
            summary.size += 1;
            *summary.by_age.entry(age).or_default() += 1;
        }
        summary
    }

    pub fn of(world: &mut World) -> Self {
        let mut query = world.query_filtered::<&Age, With<Person>>();
        Self::from_ages(query.iter(world).map(|age| age.years))
    }
}

/// `age:count` pairs in ascending age order.
impl fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (age, count) in &self.by_age {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{age}:{count}")?;
            first = false;
        }
        Ok(())
    }
}
