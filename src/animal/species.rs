use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{Animal, ApproachOutcome, FoodOutcome, WaterOutcome};
use crate::config::{AnimalConfig, SpeciesProfile};

/// Behavior a tick dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Drinks when thirsty, otherwise forages until fed, otherwise roams.
    Elephant,
    /// Roams every tick unless heading for water, grazing wherever it ends up.
    Zebra,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub moved: bool,
    pub drank: bool,
    pub grazed: bool,
}

impl Animal {
    pub fn tick<R: Rng>(&mut self, config: &AnimalConfig, rng: &mut R) -> TickOutcome {
        let profile = *config.profile(self.species);
        let start = self.position;
        let mut outcome = match self.species {
            Species::Elephant => self.elephant_tick(config, &profile, rng),
            Species::Zebra => self.zebra_tick(config, &profile, rng),
        };
        self.update_state(config);
        outcome.moved = self.position != start;
        trace!(
            agent = %self.id,
            hydration = self.hydration,
            satiety = self.satiety,
            moved = outcome.moved,
            "tick"
        );
        outcome
    }

    fn elephant_tick<R: Rng>(
        &mut self,
        config: &AnimalConfig,
        profile: &SpeciesProfile,
        rng: &mut R,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.hydration < profile.thirst_threshold {
            if let WaterOutcome::Approached { drank, .. } = self.move_to_water_source(config) {
                outcome.drank = drank;
                return outcome;
            }
        } else if self.satiety < profile.hunger_threshold {
            if let FoodOutcome::Targeted { .. } = self.search_for_food(config) {
                outcome.grazed = self.approach_target(config) == ApproachOutcome::Grazed;
                return outcome;
            }
        }
        self.random_walk(config, rng, profile.walk_attempts);
        outcome
    }

    fn zebra_tick<R: Rng>(
        &mut self,
        config: &AnimalConfig,
        profile: &SpeciesProfile,
        rng: &mut R,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.hydration < profile.thirst_threshold {
            if let WaterOutcome::Approached { drank, .. } = self.move_to_water_source(config) {
                outcome.drank = drank;
                return outcome;
            }
        }
        self.random_walk(config, rng, profile.walk_attempts);
        if self.satiety < profile.hunger_threshold {
            if let FoodOutcome::Targeted { .. } = self.search_for_food(config) {
                outcome.grazed = self.graze(config);
            }
        }
        outcome
    }
}
