use crate::geo::Position;

use super::Mover;

/// Moves along great circles; refuses requests that would yield an unusable coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicMover;

impl GeodesicMover {
    pub fn new() -> Self {
        Self
    }
}

impl Mover for GeodesicMover {
    fn move_towards(&self, from: &Position, bearing: f64, distance: f64) -> Option<Position> {
        if !bearing.is_finite() || !distance.is_finite() || distance < 0.0 {
            return None;
        }
        let destination = from.relative(bearing, distance);
        destination.is_valid().then_some(destination)
    }
}
