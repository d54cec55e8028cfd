use std::{collections::BTreeMap, fmt};

use thiserror::Error;
use tracing::debug;

use crate::{
    animal::{AgentId, Animal, AnimalError, AnimalSpec},
    config::{AnimalConfig, ConfigError},
    landscape::Landscape,
    rng::RngManager,
};

pub struct EngineSettings {
    pub seed: u64,
    pub config: AnimalConfig,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            config: AnimalConfig::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Animal(#[from] AnimalError),
    #[error("agent {0} is already registered")]
    DuplicateAgent(AgentId),
}

pub struct EngineBuilder {
    settings: EngineSettings,
    landscape: Landscape,
    specs: Vec<AnimalSpec>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings, landscape: Landscape) -> Self {
        Self {
            settings,
            landscape,
            specs: Vec::new(),
        }
    }

    pub fn with_animal(mut self, spec: AnimalSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Validates the config and places every queued animal.
    pub fn build(self) -> Result<Engine, EngineError> {
        self.settings.config.validate()?;
        let mut engine = Engine {
            rng: RngManager::new(self.settings.seed),
            config: self.settings.config,
            landscape: self.landscape,
            animals: BTreeMap::new(),
            tick: 0,
        };
        for spec in self.specs {
            engine.spawn(spec)?;
        }
        Ok(engine)
    }
}

/// Drives every registered animal once per step, in ascending id order.
pub struct Engine {
    rng: RngManager,
    config: AnimalConfig,
    landscape: Landscape,
    animals: BTreeMap<AgentId, Animal>,
    tick: u64,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("animals", &self.animals)
            .field("tick", &self.tick)
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn spawn(&mut self, spec: AnimalSpec) -> Result<AgentId, EngineError> {
        let id = spec.id;
        if self.animals.contains_key(&id) {
            return Err(EngineError::DuplicateAgent(id));
        }
        let animal = Animal::init(spec, &self.landscape)?;
        self.animals.insert(id, animal);
        Ok(id)
    }

    pub fn remove(&mut self, id: AgentId) -> Option<Animal> {
        self.rng.release(id);
        self.animals.remove(&id)
    }

    pub fn step(&mut self) -> TickSummary {
        self.tick += 1;
        let mut summary = TickSummary {
            tick: self.tick,
            ..TickSummary::default()
        };
        for (id, animal) in self.animals.iter_mut() {
            let mut rng = self.rng.stream(*id);
            let outcome = animal.tick(&self.config, &mut rng);
            summary.moved += usize::from(outcome.moved);
            summary.drank += usize::from(outcome.drank);
            summary.grazed += usize::from(outcome.grazed);
            summary.dehydrated += usize::from(animal.is_dehydrated());
            summary.starving += usize::from(animal.is_starving());
        }
        debug!(
            tick = summary.tick,
            moved = summary.moved,
            drank = summary.drank,
            dehydrated = summary.dehydrated,
            "step complete"
        );
        summary
    }

    pub fn run(&mut self, ticks: u64) {
        self.run_with_hook(ticks, |_| {});
    }

    pub fn run_with_hook<F>(&mut self, ticks: u64, mut hook: F)
    where
        F: FnMut(&TickSummary),
    {
        for _ in 0..ticks {
            let summary = self.step();
            hook(&summary);
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &AnimalConfig {
        &self.config
    }

    pub fn landscape(&self) -> &Landscape {
        &self.landscape
    }

    pub fn animal(&self, id: AgentId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.animals.values()
    }

    pub fn population(&self) -> usize {
        self.animals.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: u64,
    pub moved: usize,
    pub drank: usize,
    pub grazed: usize,
    pub dehydrated: usize,
    pub starving: usize,
}
