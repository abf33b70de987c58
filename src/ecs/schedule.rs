use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_clock;

/// Schedule label for one simulated year.
/// Run manually each year via `app.world_mut().run_schedule(SimTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimTick;

/// Ordered phases within each tick.
///
/// Phases run in declaration order: PreUpdate < Update < Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    Last,
}

/// The four engines of the year, all inside `SimPhase::Update`.
///
/// ```text
/// Shocks → Elections → Transition → Demographics
/// ```
///
/// The order is fixed. Shocks land on the outgoing magistrates, results are
/// installed before anyone ages or dies, and each phase ends with the command
/// applicator so the next phase sees a settled store.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum YearPhase {
    Shocks,
    Elections,
    Transition,
    Demographics,
}

/// Place the year phases inside `SimPhase::Update` and chain them.
fn configure_year_ordering(schedule: &mut Schedule) {
    schedule.configure_sets(YearPhase::Shocks.in_set(SimPhase::Update));
    schedule.configure_sets(YearPhase::Elections.in_set(SimPhase::Update));
    schedule.configure_sets(YearPhase::Transition.in_set(SimPhase::Update));
    schedule.configure_sets(YearPhase::Demographics.in_set(SimPhase::Update));

    schedule.configure_sets(
        (
            YearPhase::Shocks,
            YearPhase::Elections,
            YearPhase::Transition,
            YearPhase::Demographics,
        )
            .chain(),
    );
}

/// Build a configured `SimTick` schedule with phase ordering.
pub fn configure_sim_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(SimTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets((SimPhase::PreUpdate, SimPhase::Update, SimPhase::Last).chain());
    configure_year_ordering(&mut schedule);
    schedule.add_systems(advance_clock.in_set(SimPhase::Last));
    schedule
}
