use bevy_app::{App, Plugin};

use super::systems::demographics::DemographicsPlugin;
use super::systems::elections::ElectionsPlugin;
use super::systems::shocks::ShocksPlugin;
use super::systems::transition::TransitionPlugin;

/// Aggregate plugin that installs the four year phases.
pub struct CursusPlugin;

impl Plugin for CursusPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ShocksPlugin,
            ElectionsPlugin,
            TransitionPlugin,
            DemographicsPlugin,
        ));
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::schedule::ExecutorKind;

    use super::CursusPlugin;
    use crate::config::CursusConfig;
    use crate::ecs::app::{build_sim_app_seeded, build_sim_app_with_executor};
    use crate::ecs::components::*;
    use crate::ecs::driver::{current_year, run_years};
    use crate::ecs::report::PopulationSummary;
    use crate::ecs::resources::{EcsSimConfig, EventLog};
    use crate::model::event::EventKind;
    use crate::worldgen::found_republic;

    fn founded_app(seed: u64) -> bevy_app::App {
        let mut app = build_sim_app_seeded(1, seed);
        app.add_plugins(CursusPlugin);
        found_republic(app.world_mut());
        app
    }

    #[test]
    fn cursus_plugin_smoke_test() {
        let mut app = founded_app(42);
        run_years(&mut app, 3);
        assert_eq!(current_year(&app), 4);

        let log = app.world().resource::<EventLog>();
        assert_eq!(log.of_kind(EventKind::YearShock).count(), 3);
        assert!(log.of_kind(EventKind::Elected).count() > 0);
        assert!(log.of_kind(EventKind::TookOffice).count() > 0);
        assert_eq!(log.of_kind(EventKind::CameOfAge).count(), 3 * 108);
    }

    #[test]
    fn population_holds_roughly_steady() {
        let mut app = founded_app(42);
        let before = PopulationSummary::of(app.world_mut()).size;
        run_years(&mut app, 10);
        let after = PopulationSummary::of(app.world_mut()).size;
        assert!(after > before / 2 && after < before * 2, "{before} -> {after}");
    }

    #[test]
    fn magistrates_are_installed_every_year() {
        let mut app = founded_app(5);
        run_years(&mut app, 2);
        let world = app.world_mut();
        let mut query = world.query::<&CurrentOffice>();
        let sitting = query.iter(world).count();
        assert!(sitting > 0, "no one holds office after two years");
    }

    #[test]
    fn deterministic_singlethreaded_produces_identical_event_logs() {
        let mut app1 = founded_app(42);
        run_years(&mut app1, 5);
        let mut app2 = founded_app(42);
        run_years(&mut app2, 5);

        let log1 = app1.world().resource::<EventLog>();
        let log2 = app2.world().resource::<EventLog>();
        assert_eq!(log1.events.len(), log2.events.len());
        for (i, (e1, e2)) in log1.events.iter().zip(log2.events.iter()).enumerate() {
            assert_eq!(e1, e2, "event mismatch at index {i}");
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut app1 = founded_app(1);
        run_years(&mut app1, 2);
        let mut app2 = founded_app(2);
        run_years(&mut app2, 2);

        let descriptions = |app: &bevy_app::App| -> Vec<String> {
            app.world()
                .resource::<EventLog>()
                .events
                .iter()
                .map(|e| e.description.clone())
                .collect()
        };
        assert_ne!(descriptions(&app1), descriptions(&app2));
    }

    #[test]
    fn multithreaded_executor_runs() {
        let sim = EcsSimConfig {
            start_year: 1,
            num_years: 2,
            seed: 9,
        };
        let mut app =
            build_sim_app_with_executor(sim, CursusConfig::default(), ExecutorKind::MultiThreaded)
                .unwrap();
        app.add_plugins(CursusPlugin);
        found_republic(app.world_mut());
        run_years(&mut app, 2);
        assert_eq!(current_year(&app), 3);
    }
}
