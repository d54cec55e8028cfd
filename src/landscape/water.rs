use std::f64::consts::PI;

use rstar::primitives::{GeomWithData, Line};
use rstar::{RTree, AABB};

use crate::geo::{Position, EARTH_RADIUS_M};

use super::{WaterFeature, WaterIndex};

const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * PI / 180.0;

/// Feature edge tagged with the index of its owning feature.
type IndexedEdge = GeomWithData<Line<[f64; 2]>, usize>;

/// Water bodies indexed edge by edge in an R*-tree.
///
/// Single-vertex features (water holes) are stored as zero-length edges so
/// that every feature is reachable by nearest and radius queries.
pub struct WaterLayer {
    features: Vec<WaterFeature>,
    edges: RTree<IndexedEdge>,
}

impl WaterLayer {
    pub fn new(features: Vec<WaterFeature>) -> Self {
        let mut edges = Vec::new();
        for (index, feature) in features.iter().enumerate() {
            match feature.vertices.as_slice() {
                [] => {}
                [only] => edges.push(GeomWithData::new(
                    Line::new(only.to_array(), only.to_array()),
                    index,
                )),
                _ => edges.extend(feature.edges().map(|(a, b)| {
                    GeomWithData::new(Line::new(a.to_array(), b.to_array()), index)
                })),
            }
        }
        Self {
            features,
            edges: RTree::bulk_load(edges),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl WaterIndex for WaterLayer {
    fn features_within(&self, point: &Position, radius_m: f64) -> Vec<&WaterFeature> {
        let d_lat = radius_m / METERS_PER_DEGREE;
        let cos_lat = point.latitude().to_radians().cos().max(1e-6);
        let d_lon = (d_lat / cos_lat).min(360.0);
        let envelope = AABB::from_corners(
            [point.x() - d_lon, point.y() - d_lat],
            [point.x() + d_lon, point.y() + d_lat],
        );

        let mut hits: Vec<usize> = self
            .edges
            .locate_in_envelope_intersecting(&envelope)
            .filter(|edge| edge_distance_m(point, edge.geom()) <= radius_m)
            .map(|edge| edge.data)
            .collect();
        hits.sort_unstable();
        hits.dedup();
        hits.into_iter().map(|index| &self.features[index]).collect()
    }

    fn nearest(&self, point: &Position) -> Option<&WaterFeature> {
        self.edges
            .nearest_neighbor(&point.to_array())
            .map(|edge| &self.features[edge.data])
    }

    fn segment_intersects_any(&self, from: &Position, to: &Position) -> bool {
        let (a, b) = (from.to_array(), to.to_array());
        let envelope = AABB::from_corners(a, b);
        self.edges
            .locate_in_envelope_intersecting(&envelope)
            .any(|edge| segments_intersect(a, b, edge.geom().from, edge.geom().to))
    }
}

/// Distance in meters from `point` to an edge, using a local equirectangular projection.
fn edge_distance_m(point: &Position, edge: &Line<[f64; 2]>) -> f64 {
    let scale_x = METERS_PER_DEGREE * point.latitude().to_radians().cos();
    let project = |p: [f64; 2]| {
        [
            (p[0] - point.x()) * scale_x,
            (p[1] - point.y()) * METERS_PER_DEGREE,
        ]
    };
    let a = project(edge.from);
    let b = project(edge.to);
    let ab = [b[0] - a[0], b[1] - a[1]];
    let len2 = ab[0] * ab[0] + ab[1] * ab[1];
    let t = if len2 > 0.0 {
        (-(a[0] * ab[0] + a[1] * ab[1]) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (a[0] + t * ab[0]).hypot(a[1] + t * ab[1])
}

fn orientation(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])
}

/// `p` lies within the bounding box of `a`..`b` (used for collinear cases).
fn within_box(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> bool {
    p[0] >= a[0].min(b[0]) && p[0] <= a[0].max(b[0]) && p[1] >= a[1].min(b[1]) && p[1] <= a[1].max(b[1])
}

fn segments_intersect(p1: [f64; 2], p2: [f64; 2], q1: [f64; 2], q2: [f64; 2]) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_box(q1, q2, p1))
        || (d2 == 0.0 && within_box(q1, q2, p2))
        || (d3 == 0.0 && within_box(p1, p2, q1))
        || (d4 == 0.0 && within_box(p1, p2, q2))
}
