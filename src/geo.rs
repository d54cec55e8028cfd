//! Geographic position arithmetic on a spherical earth.
//!
//! Planar coordinates are the raw longitude/latitude pair (`x` = longitude,
//! `y` = latitude). They are only used for relative comparisons such as
//! picking the closest vertex of a water body; anything that reports meters
//! goes through the great-circle helpers.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    longitude: f64,
    latitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn x(&self) -> f64 {
        self.longitude
    }

    pub fn y(&self) -> f64 {
        self.latitude
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Finite coordinates with a latitude on the globe.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_to(&self, other: &Position) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_phi = phi2 - phi1;
        let d_lambda = (other.longitude - self.longitude).to_radians();
        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial compass bearing towards `other`, in degrees within [0, 360).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let d_lambda = (other.longitude - self.longitude).to_radians();
        let y = d_lambda.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
        normalize_bearing(y.atan2(x).to_degrees())
    }

    /// Destination reached by travelling `distance_m` along `bearing_deg`.
    pub fn relative(&self, bearing_deg: f64, distance_m: f64) -> Position {
        let delta = distance_m / EARTH_RADIUS_M;
        let theta = bearing_deg.to_radians();
        let phi1 = self.latitude.to_radians();
        let lambda1 = self.longitude.to_radians();

        let sin_phi2 = phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos();
        let phi2 = sin_phi2.clamp(-1.0, 1.0).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

        let longitude = (lambda2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        Position::new(longitude, phi2.to_degrees())
    }

    /// Euclidean distance between the planar coordinates.
    pub fn planar_distance(&self, other: &Position) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }
}

/// Wraps any angle into [0, 360).
pub fn normalize_bearing(bearing: f64) -> f64 {
    let wrapped = bearing.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
