//! Load-time tuning for the simulation.
//!
//! Every knob has a default matching the historical ladder, so a config file
//! only needs to name what it overrides.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::OfficeCatalog;

/// Upper bounds (inclusive) of the first six mortality bands; the seventh is everything older.
pub const MORTALITY_BAND_LIMITS: [u32; 6] = [20, 30, 40, 50, 60, 70];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursusConfig {
    /// Reputation gained by every election winner.
    pub election_bump: f64,
    /// Persons per year of age at the founding.
    pub generation_size: u32,
    /// Newcomers per year, as a multiple of `generation_size`.
    pub replenish_multiplier: f64,
    /// Age at which newcomers enter the population.
    pub entry_age: u32,
    pub starting_score: f64,
    /// Founding population spans `founding_min_age..founding_max_age`.
    pub founding_min_age: u32,
    pub founding_max_age: u32,
    pub starting_senator_age: u32,
    pub starting_senate_size: usize,
    /// Death probability per band, see [`MORTALITY_BAND_LIMITS`].
    pub mortality_chance: [f64; 7],
    /// Half-width of the candidacy age window around an office's usual age.
    pub age_window: u32,
    /// Votes are drawn from `0..vote_ceiling`.
    pub vote_ceiling: u32,
    pub catalog: OfficeCatalog,
}

impl Default for CursusConfig {
    fn default() -> Self {
        Self {
            election_bump: 0.2,
            generation_size: 72,
            replenish_multiplier: 1.5,
            entry_age: 16,
            starting_score: 0.1,
            founding_min_age: 17,
            founding_max_age: 75,
            starting_senator_age: 45,
            starting_senate_size: 100,
            mortality_chance: [0.001, 0.002, 0.008, 0.025, 0.075, 0.15, 0.5],
            age_window: 3,
            vote_ceiling: 100,
            catalog: OfficeCatalog::default(),
        }
    }
}

impl CursusConfig {
    /// Load configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Newcomers created each year by replenishment.
    pub fn replenish_count(&self) -> u32 {
        (self.generation_size as f64 * self.replenish_multiplier) as u32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (band, &p) in self.mortality_chance.iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!(
                    "mortality band {band} has probability {p} outside [0, 1]"
                )));
            }
        }
        if self.replenish_multiplier < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "replenish_multiplier must not be negative, got {}",
                self.replenish_multiplier
            )));
        }
        if self.founding_min_age > self.founding_max_age {
            return Err(ConfigError::Invalid(format!(
                "founding ages {}..{} are reversed",
                self.founding_min_age, self.founding_max_age
            )));
        }
        if self.vote_ceiling == 0 {
            return Err(ConfigError::Invalid("vote_ceiling must be positive".into()));
        }

        let catalog = &self.catalog;
        let mut seen = BTreeSet::new();
        for spec in &catalog.offices {
            if !seen.insert(spec.kind) {
                return Err(ConfigError::Invalid(format!(
                    "{} appears twice in the catalog",
                    spec.kind
                )));
            }
            if spec.year_frequency == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{} has a year_frequency of zero",
                    spec.kind
                )));
            }
            if spec.is_elected()
                && spec.kind != catalog.entry_level
                && catalog.requirements(spec.kind).is_none()
            {
                tracing::warn!(
                    office = %spec.kind,
                    "elected office has no resume entry; no candidate will ever qualify"
                );
            }
        }
        for (role, kind) in [
            ("entry_level", catalog.entry_level),
            ("head_magistracy", catalog.head_magistracy),
            ("census_office", catalog.census_office),
            ("qualifying_office", catalog.qualifying_office),
        ] {
            if !seen.contains(&kind) {
                return Err(ConfigError::Invalid(format!(
                    "{role} {kind} is not in the catalog"
                )));
            }
        }
        Ok(())
    }
}
