//! A single simulated animal and the movement/physiology primitives its
//! species behavior is composed from.

mod species;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::AnimalConfig,
    geo::{normalize_bearing, Position},
    landscape::{Landscape, VegetationCell},
};

pub use species::{Species, TickOutcome};

/// Bearing an animal starts with unless its [`AnimalSpec`] says otherwise.
pub const DEFAULT_BEARING: f64 = 222.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(u64);

impl AgentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AnimalError {
    #[error("start point is not inside perimeter (lon: {longitude}, lat: {latitude})")]
    OutsidePerimeter { longitude: f64, latitude: f64 },
}

/// Everything needed to place an animal before it is bound to a landscape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalSpec {
    pub id: AgentId,
    pub species: Species,
    pub longitude: f64,
    pub latitude: f64,
    pub hydration: f64,
    pub satiety: f64,
    pub bearing: f64,
}

impl AnimalSpec {
    /// Fully hydrated and fed, facing the default bearing.
    pub fn new(id: AgentId, species: Species, longitude: f64, latitude: f64) -> Self {
        Self {
            id,
            species,
            longitude,
            latitude,
            hydration: 100.0,
            satiety: 100.0,
            bearing: DEFAULT_BEARING,
        }
    }

    pub fn with_hydration(mut self, hydration: f64) -> Self {
        self.hydration = hydration;
        self
    }

    pub fn with_satiety(mut self, satiety: f64) -> Self {
        self.satiety = satiety;
        self
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The walk committed on this 1-based attempt.
    Moved { attempt: u32 },
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterOutcome {
    NoWaterInRange,
    Approached { drank: bool, moved: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodOutcome {
    OutsideCoverage,
    NoCells,
    TargetOutsidePerimeter,
    Targeted {
        cell: VegetationCell,
        target: Position,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproachOutcome {
    NoTarget,
    Grazed,
    Stepped { moved: bool },
}

pub struct Animal {
    id: AgentId,
    species: Species,
    position: Position,
    target: Option<Position>,
    bearing: f64,
    hydration: f64,
    satiety: f64,
    landscape: Landscape,
}

impl fmt::Debug for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animal")
            .field("id", &self.id)
            .field("species", &self.species)
            .field("position", &self.position)
            .field("target", &self.target)
            .field("bearing", &self.bearing)
            .field("hydration", &self.hydration)
            .field("satiety", &self.satiety)
            .finish_non_exhaustive()
    }
}

impl Animal {
    /// Binds the animal to `landscape`; the start point must lie inside the perimeter.
    pub fn init(spec: AnimalSpec, landscape: &Landscape) -> Result<Self, AnimalError> {
        let start = Position::new(spec.longitude, spec.latitude);
        if !landscape.perimeter.contains(&start) {
            return Err(AnimalError::OutsidePerimeter {
                longitude: spec.longitude,
                latitude: spec.latitude,
            });
        }
        debug!(agent = %spec.id, lon = spec.longitude, lat = spec.latitude, "animal placed");
        Ok(Self {
            id: spec.id,
            species: spec.species,
            position: start,
            target: None,
            bearing: normalize_bearing(spec.bearing),
            hydration: spec.hydration.max(0.0),
            satiety: spec.satiety.max(0.0),
            landscape: landscape.clone(),
        })
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn hydration(&self) -> f64 {
        self.hydration
    }

    pub fn satiety(&self) -> f64 {
        self.satiety
    }

    pub fn is_dehydrated(&self) -> bool {
        self.hydration <= 0.0
    }

    pub fn is_starving(&self) -> bool {
        self.satiety <= 0.0
    }

    /// Random hop that stays inside the perimeter and does not cross water.
    pub fn random_walk<R: Rng>(
        &mut self,
        config: &AnimalConfig,
        rng: &mut R,
        max_attempts: u32,
    ) -> WalkOutcome {
        let (min, max) = (config.walk_min_distance, config.walk_max_distance);
        if !(min.is_finite() && max.is_finite() && min < max) {
            debug!(agent = %self.id, min, max, "walk distance range unusable");
            return WalkOutcome::Exhausted;
        }
        for attempt in 1..=max_attempts {
            let distance = rng.gen_range(min..max);
            let bearing = rng.gen_range(0.0..360.0);
            let candidate = self.position.relative(bearing, distance);

            if !self.landscape.perimeter.contains(&candidate)
                || self
                    .landscape
                    .water
                    .segment_intersects_any(&self.position, &candidate)
            {
                continue;
            }
            if self.step(bearing, distance) {
                return WalkOutcome::Moved { attempt };
            }
        }
        debug!(agent = %self.id, max_attempts, "random walk exhausted");
        WalkOutcome::Exhausted
    }

    /// Heads for the closest vertex of the nearest water body and drinks on arrival.
    pub fn move_to_water_source(&mut self, config: &AnimalConfig) -> WaterOutcome {
        let position = self.position;
        let radius = config.water_search_radius;
        if self
            .landscape
            .water
            .features_within(&position, radius)
            .is_empty()
        {
            info!(agent = %self.id, radius, "no water within radius");
            return WaterOutcome::NoWaterInRange;
        }

        let closest = self.landscape.water.nearest(&position).and_then(|feature| {
            feature.vertices.iter().copied().min_by(|a, b| {
                a.planar_distance(&position)
                    .total_cmp(&b.planar_distance(&position))
            })
        });
        let Some(target) = closest else {
            debug!(agent = %self.id, "water index returned no nearest feature");
            return WaterOutcome::NoWaterInRange;
        };

        self.target = Some(target);
        self.bearing = position.bearing_to(&target);

        let distance = position.distance_to(&target);
        let drank = distance < config.arrival_radius;
        if drank {
            self.hydration += config.drink_amount;
            self.bearing = normalize_bearing(self.bearing + config.arrival_turn);
        }

        let step = if distance > config.max_step_distance {
            config.max_step_distance
        } else {
            distance - config.approach_offset
        };
        let moved = self.step(self.bearing, step);
        WaterOutcome::Approached { drank, moved }
    }

    /// Aims at the richest of the sampled vegetation cells without moving.
    pub fn search_for_food(&mut self, config: &AnimalConfig) -> FoodOutcome {
        let vegetation = &self.landscape.vegetation;
        if !vegetation.covers(&self.position) {
            return FoodOutcome::OutsideCoverage;
        }

        let cells = vegetation.sample_cells(&self.position, f64::INFINITY, config.food_sample_count);
        // max_by keeps the last of equal maxima.
        let Some(cell) = cells
            .iter()
            .copied()
            .max_by(|a, b| a.value.total_cmp(&b.value))
        else {
            return FoodOutcome::NoCells;
        };

        let target = vegetation.cell_position(&cell);
        if !self.landscape.perimeter.contains(&target) {
            debug!(agent = %self.id, lon = target.longitude(), lat = target.latitude(), "food target outside perimeter");
            return FoodOutcome::TargetOutsidePerimeter;
        }

        self.target = Some(target);
        self.bearing = self.position.bearing_to(&target);
        FoodOutcome::Targeted { cell, target }
    }

    /// Grazes when the target is within the arrival radius, otherwise steps towards it.
    pub fn approach_target(&mut self, config: &AnimalConfig) -> ApproachOutcome {
        let Some(target) = self.target else {
            return ApproachOutcome::NoTarget;
        };
        if self.graze(config) {
            return ApproachOutcome::Grazed;
        }
        let distance = self.position.distance_to(&target);
        self.bearing = self.position.bearing_to(&target);
        let moved = self.step(self.bearing, distance.min(config.max_step_distance));
        ApproachOutcome::Stepped { moved }
    }

    /// Feeds when standing within the arrival radius of the target. Satiety
    /// is capped at `max_satiety`.
    pub fn graze(&mut self, config: &AnimalConfig) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if self.position.distance_to(&target) >= config.arrival_radius {
            return false;
        }
        if self.satiety < config.max_satiety {
            self.satiety = (self.satiety + config.graze_amount).min(config.max_satiety);
        }
        true
    }

    /// Per-tick decay of hydration and satiety, floored at zero.
    pub fn update_state(&mut self, config: &AnimalConfig) {
        self.hydration = decay(self.hydration, config.dehydration_rate);
        self.satiety = decay(self.satiety, config.starvation_rate);
    }

    /// Asks the movement engine for a step and commits the result when it
    /// lands inside the perimeter.
    fn step(&mut self, bearing: f64, distance: f64) -> bool {
        if distance <= 0.0 {
            return false;
        }
        match self
            .landscape
            .mover
            .move_towards(&self.position, bearing, distance)
        {
            Some(next) if self.landscape.perimeter.contains(&next) => {
                self.position = next;
                true
            }
            Some(_) => {
                debug!(agent = %self.id, bearing, distance, "move would leave perimeter");
                false
            }
            None => {
                debug!(agent = %self.id, bearing, distance, "move rejected");
                false
            }
        }
    }
}

fn decay(level: f64, rate: f64) -> f64 {
    if level > 0.0 {
        if level > rate {
            level - rate
        } else {
            0.0
        }
    } else {
        level
    }
}


#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tracing::Level;
    use tracing_subscriber::{layer::Context, prelude::*, Layer};

    use super::test_support::*;
    use super::*;
    use crate::landscape::{Perimeter, WaterFeature, WaterIndex, WaterLayer};

    fn spawn(landscape: &Landscape) -> Animal {
        let spec = AnimalSpec::new(
            AgentId::new(1),
            Species::Elephant,
            centre().longitude(),
            centre().latitude(),
        );
        Animal::init(spec, landscape).expect("centre is inside")
    }

    struct InfoCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for InfoCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::INFO {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn init_inside_sets_exact_position() {
        let animal = spawn(&open_landscape());
        assert_eq!(animal.position(), centre());
        assert_eq!(animal.target(), None);
        assert_eq!(animal.bearing(), DEFAULT_BEARING);
    }

    #[test]
    fn init_outside_reports_coordinate() {
        let spec = AnimalSpec::new(AgentId::new(2), Species::Zebra, 32.0, -24.25);
        let err = Animal::init(spec, &open_landscape()).unwrap_err();
        assert_eq!(
            err,
            AnimalError::OutsidePerimeter {
                longitude: 32.0,
                latitude: -24.25
            }
        );
        assert!(err.to_string().contains("lon: 32"));
    }

    #[test]
    fn update_state_floors_at_zero() {
        let mut animal = spawn(&open_landscape());
        animal.hydration = 15.0;
        animal.satiety = 1.0;

        animal.update_state(&AnimalConfig::default());

        assert_eq!(animal.hydration(), 0.0);
        assert_eq!(animal.satiety(), 0.0);
    }

    #[test]
    fn update_state_subtracts_rates() {
        let mut animal = spawn(&open_landscape());
        animal.hydration = 50.0;
        animal.satiety = 50.0;

        animal.update_state(&AnimalConfig::default());

        assert_eq!(animal.hydration(), 30.0);
        assert_eq!(animal.satiety(), 48.5);
    }

    #[test]
    fn update_state_does_not_clamp_above_max() {
        let mut animal = spawn(&open_landscape());
        animal.hydration = 130.0;
        animal.update_state(&AnimalConfig::default());
        assert_eq!(animal.hydration(), 110.0);
    }

    #[test]
    fn walk_in_open_landscape_commits_first_candidate() {
        let mover = CountingMover::default();
        let landscape = Landscape::new(
            Perimeter::rectangle(0.0, -60.0, 60.0, 0.0),
            WaterLayer::empty(),
            crate::landscape::VegetationGrid::empty(),
            mover.clone(),
        );
        let mut animal = spawn(&landscape);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = animal.random_walk(&AnimalConfig::default(), &mut rng, 10);

        assert_eq!(outcome, WalkOutcome::Moved { attempt: 1 });
        assert_eq!(mover.count(), 1);
        let hop = centre().distance_to(&animal.position());
        assert!((100.0..5_000.0).contains(&hop), "hop was {hop}");
    }

    #[test]
    fn walk_with_refusing_mover_exhausts_silently() {
        let mover = CountingMover::refusing();
        let landscape = Landscape::new(
            Perimeter::rectangle(0.0, -60.0, 60.0, 0.0),
            WaterLayer::empty(),
            crate::landscape::VegetationGrid::empty(),
            mover.clone(),
        );
        let mut animal = spawn(&landscape);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let outcome = animal.random_walk(&AnimalConfig::default(), &mut rng, 7);

        assert_eq!(outcome, WalkOutcome::Exhausted);
        assert_eq!(mover.count(), 7);
        assert_eq!(animal.position(), centre());
    }

    #[test]
    fn walk_with_zero_attempts_does_nothing() {
        let mover = CountingMover::default();
        let landscape = open_landscape().with_mover(mover.clone());
        let mut animal = spawn(&landscape);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(
            animal.random_walk(&AnimalConfig::default(), &mut rng, 0),
            WalkOutcome::Exhausted
        );
        assert_eq!(mover.count(), 0);
    }

    #[test]
    fn walk_with_unusable_distance_range_exhausts_without_moving() {
        let mover = CountingMover::default();
        let landscape = open_landscape().with_mover(mover.clone());
        let mut animal = spawn(&landscape);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        for (min, max) in [(100.0, f64::INFINITY), (500.0, 500.0), (f64::NAN, 900.0)] {
            let config = AnimalConfig {
                walk_min_distance: min,
                walk_max_distance: max,
                ..AnimalConfig::default()
            };
            assert_eq!(
                animal.random_walk(&config, &mut rng, 5),
                WalkOutcome::Exhausted
            );
        }
        assert_eq!(mover.count(), 0);
        assert_eq!(animal.position(), centre());
    }

    #[test]
    fn walk_never_crosses_water_or_fence() {
        // Fence barely larger than a long hop, split by a river through the middle.
        let fence = Perimeter::rectangle(31.2, -24.3, 31.3, -24.2);
        let river = WaterLayer::new(vec![WaterFeature::new(
            7,
            vec![Position::new(31.25, -24.4), Position::new(31.25, -24.1)],
        )]);
        let landscape = Landscape::new(
            fence.clone(),
            river,
            crate::landscape::VegetationGrid::empty(),
            crate::landscape::GeodesicMover::new(),
        );
        let spec = AnimalSpec::new(AgentId::new(5), Species::Zebra, 31.22, -24.25);
        let mut animal = Animal::init(spec, &landscape).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let config = AnimalConfig::default();

        for _ in 0..200 {
            let before = animal.position();
            if let WalkOutcome::Moved { .. } = animal.random_walk(&config, &mut rng, 20) {
                let after = animal.position();
                assert!(crate::landscape::Boundary::contains(&fence, &after));
                assert!(!landscape.water.segment_intersects_any(&before, &after));
            }
            assert!(animal.position().longitude() < 31.25);
        }
    }

    #[test]
    fn drinks_turns_and_stops_short_near_water() {
        let water_at = centre().relative(60.0, 30.0);
        let landscape = open_landscape().with_water(water_hole(water_at));
        let mut animal = spawn(&landscape);
        animal.hydration = 50.0;

        let outcome = animal.move_to_water_source(&AnimalConfig::default());

        assert_eq!(
            outcome,
            WaterOutcome::Approached {
                drank: true,
                moved: true
            }
        );
        assert_eq!(animal.hydration(), 60.0);
        assert_eq!(animal.target(), Some(water_at));
        assert!((animal.bearing() - 105.0).abs() < 1e-6, "bearing {}", animal.bearing());

        let travelled = centre().distance_to(&animal.position());
        assert!((travelled - 20.0).abs() < 1e-6, "travelled {travelled}");
        assert!((centre().bearing_to(&animal.position()) - 105.0).abs() < 1e-4);
    }

    #[test]
    fn arrival_turn_wraps_past_north() {
        let water_at = centre().relative(340.0, 30.0);
        let landscape = open_landscape().with_water(water_hole(water_at));
        let mut animal = spawn(&landscape);
        animal.hydration = 50.0;

        animal.move_to_water_source(&AnimalConfig::default());

        assert!((animal.bearing() - 25.0).abs() < 1e-6, "bearing {}", animal.bearing());
        assert!((centre().bearing_to(&animal.position()) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn drinking_is_not_capped_at_max_hydration() {
        let water_at = centre().relative(0.0, 20.0);
        let landscape = open_landscape().with_water(water_hole(water_at));
        let mut animal = spawn(&landscape);
        animal.hydration = 95.0;

        animal.move_to_water_source(&AnimalConfig::default());

        assert_eq!(animal.hydration(), 105.0);
    }

    #[test]
    fn targets_nearest_vertex_and_stops_ten_meters_short() {
        let river = WaterLayer::new(vec![WaterFeature::new(
            3,
            vec![
                centre().relative(10.0, 1_900.0),
                centre().relative(90.0, 1_500.0),
                centre().relative(170.0, 1_800.0),
            ],
        )]);
        let landscape = open_landscape().with_water(river);
        let mut animal = spawn(&landscape);
        animal.hydration = 20.0;

        let outcome = animal.move_to_water_source(&AnimalConfig::default());

        let expected = centre().relative(90.0, 1_500.0);
        assert_eq!(
            outcome,
            WaterOutcome::Approached {
                drank: false,
                moved: true
            }
        );
        assert_eq!(animal.target(), Some(expected));
        assert_eq!(animal.hydration(), 20.0);
        let left = animal.position().distance_to(&expected);
        assert!((left - 10.0).abs() < 1e-3, "left {left}");
    }

    #[test]
    fn far_vertex_is_approached_by_max_step() {
        // A long straight river passing ~1 km east with vertices far apart.
        let east = centre().relative(90.0, 1_000.0);
        let river = WaterLayer::new(vec![WaterFeature::new(
            4,
            vec![east.relative(0.0, 9_000.0), east.relative(180.0, 9_000.0)],
        )]);
        let landscape = open_landscape().with_water(river);
        let mut animal = spawn(&landscape);

        animal.move_to_water_source(&AnimalConfig::default());

        let travelled = centre().distance_to(&animal.position());
        assert!((travelled - 5_000.0).abs() < 1e-3, "travelled {travelled}");
    }

    #[test]
    fn no_water_in_radius_changes_nothing_and_reports_once() {
        let far = centre().relative(45.0, 10_000.0);
        let landscape = open_landscape().with_water(water_hole(far));
        let mut animal = spawn(&landscape);
        let before = format!("{animal:?}");

        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(InfoCounter(counter.clone()));
        let outcome = tracing::subscriber::with_default(subscriber, || {
            animal.move_to_water_source(&AnimalConfig::default())
        });

        assert_eq!(outcome, WaterOutcome::NoWaterInRange);
        assert_eq!(format!("{animal:?}"), before);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_water_move_leaves_position() {
        let water_at = centre().relative(0.0, 500.0);
        let landscape = open_landscape()
            .with_water(water_hole(water_at))
            .with_mover(CountingMover::refusing());
        let mut animal = spawn(&landscape);

        let outcome = animal.move_to_water_source(&AnimalConfig::default());

        assert_eq!(
            outcome,
            WaterOutcome::Approached {
                drank: false,
                moved: false
            }
        );
        assert_eq!(animal.position(), centre());
        assert_eq!(animal.target(), Some(water_at));
    }

    #[test]
    fn water_closer_than_offset_skips_the_step() {
        let water_at = centre().relative(0.0, 5.0);
        let mover = CountingMover::default();
        let landscape = open_landscape()
            .with_water(water_hole(water_at))
            .with_mover(mover.clone());
        let mut animal = spawn(&landscape);

        animal.move_to_water_source(&AnimalConfig::default());

        assert_eq!(mover.count(), 0);
        assert_eq!(animal.position(), centre());
    }

    #[test]
    fn food_picks_last_of_tied_maxima() {
        let landscape =
            open_landscape().with_vegetation(FixedCells::with_values(&[1.0, 5.0, 3.0, 5.0]));
        let mut animal = spawn(&landscape);

        let outcome = animal.search_for_food(&AnimalConfig::default());

        let FoodOutcome::Targeted { cell, target } = outcome else {
            panic!("expected a target, got {outcome:?}");
        };
        assert_eq!(cell.value, 5.0);
        assert_eq!(cell.grid_x, 3);
        assert!((target.longitude() - 31.25).abs() < 1e-9);
        assert!((target.latitude() - (-24.3)).abs() < 1e-9);
        assert_eq!(animal.target(), Some(target));
        assert!((animal.bearing() - centre().bearing_to(&target)).abs() < 1e-12);
        assert_eq!(animal.position(), centre());
    }

    #[test]
    fn food_outside_perimeter_leaves_target_and_bearing() {
        let mut cells = FixedCells::with_values(&[1.0, 9.0]);
        cells.origin = Position::new(31.6, -24.3);
        let landscape = open_landscape().with_vegetation(cells);
        let mut animal = spawn(&landscape);

        let outcome = animal.search_for_food(&AnimalConfig::default());

        assert_eq!(outcome, FoodOutcome::TargetOutsidePerimeter);
        assert_eq!(animal.target(), None);
        assert_eq!(animal.bearing(), DEFAULT_BEARING);
    }

    #[test]
    fn food_outside_coverage_is_a_no_op() {
        let mut cells = FixedCells::with_values(&[4.0]);
        cells.covered = false;
        let landscape = open_landscape().with_vegetation(cells);
        let mut animal = spawn(&landscape);

        assert_eq!(
            animal.search_for_food(&AnimalConfig::default()),
            FoodOutcome::OutsideCoverage
        );
        assert_eq!(animal.target(), None);
    }

    #[test]
    fn food_search_respects_sample_count() {
        let landscape = open_landscape()
            .with_vegetation(FixedCells::with_values(&[1.0, 2.0, 3.0, 4.0, 50.0]));
        let mut animal = spawn(&landscape);

        let FoodOutcome::Targeted { cell, .. } = animal.search_for_food(&AnimalConfig::default())
        else {
            panic!("expected a target");
        };
        assert_eq!(cell.value, 4.0);
    }

    #[test]
    fn approach_steps_then_grazes() {
        let mut animal = spawn(&open_landscape());
        let config = AnimalConfig::default();
        let food = centre().relative(200.0, 3_000.0);
        animal.target = Some(food);
        animal.satiety = 40.0;

        assert_eq!(
            animal.approach_target(&config),
            ApproachOutcome::Stepped { moved: true }
        );
        assert!(animal.position().distance_to(&food) < config.arrival_radius);

        assert_eq!(animal.approach_target(&config), ApproachOutcome::Grazed);
        assert_eq!(animal.satiety(), 50.0);
    }

    #[test]
    fn grazing_caps_at_max_satiety() {
        let mut animal = spawn(&open_landscape());
        animal.target = Some(centre());
        animal.satiety = 95.0;

        assert!(animal.graze(&AnimalConfig::default()));
        assert_eq!(animal.satiety(), 100.0);
    }

    #[test]
    fn approach_without_target_does_nothing() {
        let mut animal = spawn(&open_landscape());
        assert_eq!(
            animal.approach_target(&AnimalConfig::default()),
            ApproachOutcome::NoTarget
        );
    }

    #[test]
    fn step_refuses_destinations_outside_fence() {
        let mut animal = spawn(&open_landscape());
        // ~28 km south leaves the half-degree fence.
        assert!(!animal.step(180.0, 28_000.0));
        assert_eq!(animal.position(), centre());
    }
}
