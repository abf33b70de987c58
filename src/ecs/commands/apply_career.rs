use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{CareerRecord, CurrentOffice, ElectionResult, SenateMembership};
use crate::model::Magistracy;

use super::applicator::{StoreError, person_mut};

/// Shift a person's reputation. Unclamped.
pub(crate) fn apply_adjust_score(
    world: &mut World,
    person: Entity,
    delta: f64,
) -> Result<(), StoreError> {
    let mut entity = person_mut(world, person, "adjust_score")?;
    if let Some(mut career) = entity.get_mut::<CareerRecord>() {
        career.score += delta;
    }
    Ok(())
}

/// Mark a person as elected and grant the election bonus.
/// A second election in the same pass replaces the pending result.
pub(crate) fn apply_elect(
    world: &mut World,
    person: Entity,
    office: Magistracy,
    bonus: f64,
) -> Result<(), StoreError> {
    let mut entity = person_mut(world, person, "elect")?;
    entity.insert(ElectionResult { office });
    if let Some(mut career) = entity.get_mut::<CareerRecord>() {
        career.score += bonus;
    }
    Ok(())
}

/// Retire a magistrate: detach the office and enter it in the career history.
/// No-op if the person holds no office.
pub(crate) fn apply_end_term(world: &mut World, person: Entity) -> Result<(), StoreError> {
    let mut entity = person_mut(world, person, "end_term")?;
    let Some(CurrentOffice { office }) = entity.take::<CurrentOffice>() else {
        return Ok(());
    };
    if let Some(mut career) = entity.get_mut::<CareerRecord>() {
        career.history.push(office);
    }
    Ok(())
}

/// Install a magistrate-elect. No-op if there is no pending result.
pub(crate) fn apply_take_office(world: &mut World, person: Entity) -> Result<(), StoreError> {
    let mut entity = person_mut(world, person, "take_office")?;
    let Some(ElectionResult { office }) = entity.take::<ElectionResult>() else {
        return Ok(());
    };
    entity.insert(CurrentOffice { office });
    Ok(())
}

/// Seat a person in the Senate. Existing senators keep their original record.
pub(crate) fn apply_induct_senator(
    world: &mut World,
    person: Entity,
    inducted_age: u32,
    inducted_year: u32,
) -> Result<(), StoreError> {
    let mut entity = person_mut(world, person, "induct_senator")?;
    if entity.contains::<SenateMembership>() {
        return Ok(());
    }
    entity.insert(SenateMembership {
        inducted_age,
        inducted_year,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::spawn::spawn_person;
    use crate::model::SocialOrder;

    fn person(world: &mut World) -> Entity {
        spawn_person(world, 1, "Decimus Valerius".into(), 30, SocialOrder::Patrician, 0.1)
    }

    #[test]
    fn end_term_records_history_once() {
        let mut world = World::new();
        let p = person(&mut world);
        world.entity_mut(p).insert(CurrentOffice {
            office: Magistracy::Quaestor,
        });

        apply_end_term(&mut world, p).unwrap();
        apply_end_term(&mut world, p).unwrap();

        assert!(world.get::<CurrentOffice>(p).is_none());
        assert_eq!(
            world.get::<CareerRecord>(p).unwrap().history,
            vec![Magistracy::Quaestor]
        );
    }

    #[test]
    fn take_office_consumes_election_result() {
        let mut world = World::new();
        let p = person(&mut world);
        world.entity_mut(p).insert(ElectionResult {
            office: Magistracy::Praetor,
        });

        apply_take_office(&mut world, p).unwrap();
        apply_take_office(&mut world, p).unwrap();

        assert!(world.get::<ElectionResult>(p).is_none());
        assert_eq!(
            world.get::<CurrentOffice>(p),
            Some(&CurrentOffice {
                office: Magistracy::Praetor
            })
        );
    }

    #[test]
    fn induction_never_overwrites() {
        let mut world = World::new();
        let p = person(&mut world);

        apply_induct_senator(&mut world, p, 45, 6).unwrap();
        apply_induct_senator(&mut world, p, 50, 11).unwrap();

        assert_eq!(
            world.get::<SenateMembership>(p),
            Some(&SenateMembership {
                inducted_age: 45,
                inducted_year: 6
            })
        );
    }
}
