//! Great-circle distance between geographic coordinates.
//!
//! Edge weights in a [`LocationGraph`](crate::graph::LocationGraph) are derived
//! from the Haversine distance between the two endpoints, truncated to whole
//! kilometres.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Integer edge weight in kilometres.
pub type Weight = u32;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point in kilometres.
    pub fn distance_km(&self, other: &Self) -> f64 {
        great_circle_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// How longitudes are treated before the distance is computed.
///
/// `Absolute` folds western longitudes onto the eastern hemisphere, so points
/// mirrored across the prime meridian collapse together. It exists only to
/// reproduce weights produced by older airport datasets; `Signed` is the
/// correct formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeMode {
    #[default]
    Signed,
    Absolute,
}

impl LongitudeMode {
    /// Apply the mode to a resolved coordinate pair.
    pub fn normalize(self, coordinates: Coordinates) -> Coordinates {
        match self {
            LongitudeMode::Signed => coordinates,
            LongitudeMode::Absolute => Coordinates {
                latitude: coordinates.latitude,
                longitude: coordinates.longitude.abs(),
            },
        }
    }
}

/// Haversine distance in kilometres between two points given in degrees.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let a = half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lon * half_lon;

    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    c * EARTH_RADIUS_KM
}

/// Truncate a kilometre distance toward zero into an edge weight.
pub fn weight_from_km(km: f64) -> Weight {
    // `as` saturates and maps NaN to zero.
    km.trunc() as Weight
}
