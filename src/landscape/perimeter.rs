use crate::geo::Position;

use super::Boundary;

/// Fence polygon evaluated with an even-odd ray cast in planar coordinates.
#[derive(Debug, Clone)]
pub struct Perimeter {
    ring: Vec<Position>,
}

impl Perimeter {
    /// The ring closes implicitly; repeating the first vertex is allowed.
    pub fn new(ring: Vec<Position>) -> Self {
        Self { ring }
    }

    pub fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self::new(vec![
            Position::new(min_lon, min_lat),
            Position::new(max_lon, min_lat),
            Position::new(max_lon, max_lat),
            Position::new(min_lon, max_lat),
        ])
    }
}

impl Boundary for Perimeter {
    fn contains(&self, point: &Position) -> bool {
        if self.ring.len() < 3 {
            return false;
        }
        let (px, py) = (point.x(), point.y());
        let mut inside = false;
        let mut j = self.ring.len() - 1;
        for i in 0..self.ring.len() {
            let (xi, yi) = (self.ring[i].x(), self.ring[i].y());
            let (xj, yj) = (self.ring[j].x(), self.ring[j].y());
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_contains_interior_only() {
        let fence = Perimeter::rectangle(30.0, -25.0, 31.0, -24.0);

        assert!(fence.contains(&Position::new(30.5, -24.5)));
        assert!(!fence.contains(&Position::new(31.5, -24.5)));
        assert!(!fence.contains(&Position::new(30.5, -23.5)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening to the north.
        let fence = Perimeter::new(vec![
            Position::new(0.0, 0.0),
            Position::new(3.0, 0.0),
            Position::new(3.0, 3.0),
            Position::new(2.0, 3.0),
            Position::new(2.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 3.0),
            Position::new(0.0, 3.0),
        ]);

        assert!(fence.contains(&Position::new(0.5, 2.0)));
        assert!(fence.contains(&Position::new(2.5, 2.0)));
        assert!(!fence.contains(&Position::new(1.5, 2.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let fence = Perimeter::new(vec![Position::new(0.0, 0.0), Position::new(1.0, 1.0)]);
        assert!(!fence.contains(&Position::new(0.5, 0.5)));
    }
}
