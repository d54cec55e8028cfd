use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animal::Species;

fn default_max_hydration() -> f64 {
    100.0
}

fn default_max_satiety() -> f64 {
    100.0
}

fn default_dehydration_rate() -> f64 {
    20.0
}

fn default_starvation_rate() -> f64 {
    1.5
}

fn default_walk_min_distance() -> f64 {
    100.0
}

fn default_walk_max_distance() -> f64 {
    5_000.0
}

fn default_max_step_distance() -> f64 {
    5_000.0
}

fn default_water_search_radius() -> f64 {
    2_000.0
}

fn default_arrival_radius() -> f64 {
    50.0
}

fn default_drink_amount() -> f64 {
    10.0
}

fn default_graze_amount() -> f64 {
    10.0
}

fn default_arrival_turn() -> f64 {
    45.0
}

fn default_approach_offset() -> f64 {
    10.0
}

fn default_food_sample_count() -> usize {
    4
}

/// Tunables shared by every animal bound to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalConfig {
    /// Reference ceiling for hydration. Drinking does not clamp to it.
    #[serde(default = "default_max_hydration")]
    pub max_hydration: f64,
    #[serde(default = "default_max_satiety")]
    pub max_satiety: f64,
    /// Hydration lost per tick.
    #[serde(default = "default_dehydration_rate")]
    pub dehydration_rate: f64,
    /// Satiety lost per tick.
    #[serde(default = "default_starvation_rate")]
    pub starvation_rate: f64,
    #[serde(default = "default_walk_min_distance")]
    pub walk_min_distance: f64,
    #[serde(default = "default_walk_max_distance")]
    pub walk_max_distance: f64,
    #[serde(default = "default_max_step_distance")]
    pub max_step_distance: f64,
    /// Presence gate for water; the nearest feature itself is searched without limit.
    #[serde(default = "default_water_search_radius")]
    pub water_search_radius: f64,
    #[serde(default = "default_arrival_radius")]
    pub arrival_radius: f64,
    #[serde(default = "default_drink_amount")]
    pub drink_amount: f64,
    #[serde(default = "default_graze_amount")]
    pub graze_amount: f64,
    /// Degrees added to the bearing after drinking.
    #[serde(default = "default_arrival_turn")]
    pub arrival_turn: f64,
    /// How far short of a water target a step stops, in meters.
    #[serde(default = "default_approach_offset")]
    pub approach_offset: f64,
    #[serde(default = "default_food_sample_count")]
    pub food_sample_count: usize,
    #[serde(default)]
    pub species: SpeciesProfiles,
}

impl Default for AnimalConfig {
    fn default() -> Self {
        Self {
            max_hydration: default_max_hydration(),
            max_satiety: default_max_satiety(),
            dehydration_rate: default_dehydration_rate(),
            starvation_rate: default_starvation_rate(),
            walk_min_distance: default_walk_min_distance(),
            walk_max_distance: default_walk_max_distance(),
            max_step_distance: default_max_step_distance(),
            water_search_radius: default_water_search_radius(),
            arrival_radius: default_arrival_radius(),
            drink_amount: default_drink_amount(),
            graze_amount: default_graze_amount(),
            arrival_turn: default_arrival_turn(),
            approach_offset: default_approach_offset(),
            food_sample_count: default_food_sample_count(),
            species: SpeciesProfiles::default(),
        }
    }
}

/// Thresholds a species' tick uses to pick between primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Below this hydration the animal heads for water.
    pub thirst_threshold: f64,
    /// Below this satiety the animal looks for food.
    pub hunger_threshold: f64,
    pub walk_attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfiles {
    #[serde(default = "SpeciesProfiles::default_elephant")]
    pub elephant: SpeciesProfile,
    #[serde(default = "SpeciesProfiles::default_zebra")]
    pub zebra: SpeciesProfile,
}

impl SpeciesProfiles {
    fn default_elephant() -> SpeciesProfile {
        SpeciesProfile {
            thirst_threshold: 40.0,
            hunger_threshold: 60.0,
            walk_attempts: 10,
        }
    }

    fn default_zebra() -> SpeciesProfile {
        SpeciesProfile {
            thirst_threshold: 50.0,
            hunger_threshold: 70.0,
            walk_attempts: 5,
        }
    }
}

impl Default for SpeciesProfiles {
    fn default() -> Self {
        Self {
            elephant: Self::default_elephant(),
            zebra: Self::default_zebra(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("walk distance range [{min}, {max}) is empty")]
    EmptyWalkRange { min: f64, max: f64 },
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl AnimalConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read animal config {}", path.display()))?;
        Self::from_yaml_str(&data)
            .with_context(|| format!("Failed to load animal config {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: AnimalConfig =
            serde_yaml::from_str(text).context("Failed to parse animal config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize animal config")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("max_hydration", self.max_hydration),
            ("max_satiety", self.max_satiety),
            ("dehydration_rate", self.dehydration_rate),
            ("starvation_rate", self.starvation_rate),
            ("walk_min_distance", self.walk_min_distance),
            ("walk_max_distance", self.walk_max_distance),
            ("max_step_distance", self.max_step_distance),
            ("water_search_radius", self.water_search_radius),
            ("arrival_radius", self.arrival_radius),
            ("drink_amount", self.drink_amount),
            ("graze_amount", self.graze_amount),
            ("arrival_turn", self.arrival_turn),
            ("approach_offset", self.approach_offset),
            ("elephant.thirst_threshold", self.species.elephant.thirst_threshold),
            ("elephant.hunger_threshold", self.species.elephant.hunger_threshold),
            ("zebra.thirst_threshold", self.species.zebra.thirst_threshold),
            ("zebra.hunger_threshold", self.species.zebra.hunger_threshold),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        let non_negative = [
            ("max_hydration", self.max_hydration),
            ("max_satiety", self.max_satiety),
            ("dehydration_rate", self.dehydration_rate),
            ("starvation_rate", self.starvation_rate),
            ("walk_min_distance", self.walk_min_distance),
            ("water_search_radius", self.water_search_radius),
            ("arrival_radius", self.arrival_radius),
            ("drink_amount", self.drink_amount),
            ("graze_amount", self.graze_amount),
            ("approach_offset", self.approach_offset),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.walk_min_distance >= self.walk_max_distance {
            return Err(ConfigError::EmptyWalkRange {
                min: self.walk_min_distance,
                max: self.walk_max_distance,
            });
        }

        if self.max_step_distance <= 0.0 {
            return Err(ConfigError::Zero {
                name: "max_step_distance",
            });
        }

        if self.food_sample_count == 0 {
            return Err(ConfigError::Zero {
                name: "food_sample_count",
            });
        }

        Ok(())
    }

    pub fn profile(&self, species: Species) -> &SpeciesProfile {
        match species {
            Species::Elephant => &self.species.elephant,
            Species::Zebra => &self.species.zebra,
        }
    }
}
