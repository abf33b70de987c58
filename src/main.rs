use std::path::PathBuf;
use std::process::ExitCode;

use bevy_ecs::schedule::ExecutorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cursus::ecs::{
    CursusPlugin, EcsSimConfig, PopulationSummary, build_sim_app_with_executor, run_simulation,
    senate_size,
};
use cursus::{CursusConfig, found_republic};

/// Simulate the careers of Roman politicians up the cursus honorum.
#[derive(Parser, Debug)]
#[command(name = "cursus")]
struct Args {
    /// Number of years to simulate
    #[arg(long, default_value_t = 100)]
    years: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Year of the founding
    #[arg(long, default_value_t = 1)]
    start_year: u32,

    /// JSON file overriding the default tuning and office catalog
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match CursusConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(path = %path.display(), "{err}");
                return ExitCode::FAILURE;
            }
        },
        None => CursusConfig::default(),
    };

    let sim = EcsSimConfig {
        start_year: args.start_year,
        num_years: args.years,
        seed: args.seed,
    };
    tracing::info!(seed = sim.seed, years = sim.num_years, start_year = sim.start_year, "starting");

    let mut app = match build_sim_app_with_executor(sim, config, ExecutorKind::SingleThreaded) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    app.add_plugins(CursusPlugin);
    found_republic(app.world_mut());
    run_simulation(&mut app);

    let world = app.world_mut();
    let population = PopulationSummary::of(world);
    tracing::info!(
        senate = senate_size(world),
        population = population.size,
        "simulation complete"
    );
    ExitCode::SUCCESS
}
