//! The landscape an animal is bound to, expressed as trait seams.
//!
//! Every collaborator is read-only once built and shared behind an `Arc`,
//! so any number of agents can hold the same [`Landscape`].

mod movement;
mod perimeter;
mod vegetation;
mod water;

use std::sync::Arc;

use crate::geo::Position;

pub use movement::GeodesicMover;
pub use perimeter::Perimeter;
pub use vegetation::VegetationGrid;
pub use water::WaterLayer;

/// Point-containment test for the fence around the landscape.
pub trait Boundary: Send + Sync {
    fn contains(&self, point: &Position) -> bool;
}

/// Turns a (bearing, distance) request into a new coordinate.
///
/// `None` means the engine refused the move; callers treat that as no
/// movement at all.
pub trait Mover: Send + Sync {
    fn move_towards(&self, from: &Position, bearing: f64, distance: f64) -> Option<Position>;
}

/// A mapped water body, stored as its ordered boundary vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterFeature {
    pub id: u32,
    pub vertices: Vec<Position>,
}

impl WaterFeature {
    pub fn new(id: u32, vertices: Vec<Position>) -> Self {
        Self { id, vertices }
    }

    /// Consecutive vertex pairs. Closed rings repeat the first vertex at the end.
    pub fn edges(&self) -> impl Iterator<Item = (&Position, &Position)> + '_ {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

pub trait WaterIndex: Send + Sync {
    /// Features with at least one vertex within `radius_m` meters of `point`.
    fn features_within(&self, point: &Position, radius_m: f64) -> Vec<&WaterFeature>;

    /// The feature owning the vertex closest to `point`, without a distance limit.
    fn nearest(&self, point: &Position) -> Option<&WaterFeature>;

    /// Whether the straight segment `from`..`to` crosses any mapped water.
    fn segment_intersects_any(&self, from: &Position, to: &Position) -> bool;
}

/// One sampled raster cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegetationCell {
    pub value: f64,
    pub grid_x: usize,
    pub grid_y: usize,
}

pub trait VegetationIndex: Send + Sync {
    fn covers(&self, point: &Position) -> bool;

    /// Up to `top_k` cells around `point`, closest first, no further than
    /// `max_radius` (planar units).
    fn sample_cells(&self, point: &Position, max_radius: f64, top_k: usize) -> Vec<VegetationCell>;

    /// Lower-left corner of the raster.
    fn origin(&self) -> Position;

    fn cell_width(&self) -> f64;

    fn cell_height(&self) -> f64;

    /// Geo-coordinate of a cell's lower-left corner.
    fn cell_position(&self, cell: &VegetationCell) -> Position {
        let origin = self.origin();
        Position::new(
            origin.longitude() + cell.grid_x as f64 * self.cell_width(),
            origin.latitude() + cell.grid_y as f64 * self.cell_height(),
        )
    }
}

/// Binding handed to an animal at init time.
#[derive(Clone)]
pub struct Landscape {
    pub perimeter: Arc<dyn Boundary>,
    pub water: Arc<dyn WaterIndex>,
    pub vegetation: Arc<dyn VegetationIndex>,
    pub mover: Arc<dyn Mover>,
}

impl Landscape {
    pub fn new(
        perimeter: impl Boundary + 'static,
        water: impl WaterIndex + 'static,
        vegetation: impl VegetationIndex + 'static,
        mover: impl Mover + 'static,
    ) -> Self {
        Self {
            perimeter: Arc::new(perimeter),
            water: Arc::new(water),
            vegetation: Arc::new(vegetation),
            mover: Arc::new(mover),
        }
    }

    pub fn with_mover(mut self, mover: impl Mover + 'static) -> Self {
        self.mover = Arc::new(mover);
        self
    }

    pub fn with_water(mut self, water: impl WaterIndex + 'static) -> Self {
        self.water = Arc::new(water);
        self
    }

    pub fn with_vegetation(mut self, vegetation: impl VegetationIndex + 'static) -> Self {
        self.vegetation = Arc::new(vegetation);
        self
    }
}
