use crate::geo::Position;

use super::{VegetationCell, VegetationIndex};

/// Row-major raster anchored at its lower-left corner; row 0 is the southern edge.
#[derive(Debug, Clone)]
pub struct VegetationGrid {
    origin: Position,
    cell_width: f64,
    cell_height: f64,
    columns: usize,
    rows: usize,
    values: Vec<f64>,
}

impl VegetationGrid {
    /// Returns `None` when `values` does not hold `columns * rows` cells.
    pub fn new(
        origin: Position,
        cell_width: f64,
        cell_height: f64,
        columns: usize,
        rows: usize,
        values: Vec<f64>,
    ) -> Option<Self> {
        if values.len() != columns * rows || cell_width <= 0.0 || cell_height <= 0.0 {
            return None;
        }
        Some(Self {
            origin,
            cell_width,
            cell_height,
            columns,
            rows,
            values,
        })
    }

    /// A grid with no cells; it covers nothing.
    pub fn empty() -> Self {
        Self {
            origin: Position::new(0.0, 0.0),
            cell_width: 1.0,
            cell_height: 1.0,
            columns: 0,
            rows: 0,
            values: Vec::new(),
        }
    }

    fn cell_of(&self, point: &Position) -> Option<(usize, usize)> {
        let gx = ((point.x() - self.origin.x()) / self.cell_width).floor();
        let gy = ((point.y() - self.origin.y()) / self.cell_height).floor();
        if gx < 0.0 || gy < 0.0 || gx >= self.columns as f64 || gy >= self.rows as f64 {
            return None;
        }
        Some((gx as usize, gy as usize))
    }

    fn cell_center(&self, grid_x: usize, grid_y: usize) -> Position {
        Position::new(
            self.origin.x() + (grid_x as f64 + 0.5) * self.cell_width,
            self.origin.y() + (grid_y as f64 + 0.5) * self.cell_height,
        )
    }
}

impl VegetationIndex for VegetationGrid {
    fn covers(&self, point: &Position) -> bool {
        self.cell_of(point).is_some()
    }

    fn sample_cells(&self, point: &Position, max_radius: f64, top_k: usize) -> Vec<VegetationCell> {
        let mut candidates: Vec<(f64, VegetationCell)> = (0..self.rows)
            .flat_map(|grid_y| (0..self.columns).map(move |grid_x| (grid_x, grid_y)))
            .filter_map(|(grid_x, grid_y)| {
                let distance = self.cell_center(grid_x, grid_y).planar_distance(point);
                (distance <= max_radius).then(|| {
                    (
                        distance,
                        VegetationCell {
                            value: self.values[grid_y * self.columns + grid_x],
                            grid_x,
                            grid_y,
                        },
                    )
                })
            })
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        candidates
            .into_iter()
            .take(top_k)
            .map(|(_, cell)| cell)
            .collect()
    }

    fn origin(&self) -> Position {
        self.origin
    }

    fn cell_width(&self) -> f64 {
        self.cell_width
    }

    fn cell_height(&self) -> f64 {
        self.cell_height
    }
}
