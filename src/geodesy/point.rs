//! Geographic points in decimal degrees and the four cardinal bearings

use std::f64::consts::{FRAC_PI_2, PI};

/// A position on the earth's surface in decimal degrees
///
/// Longitude increases eastward and is never wrapped; latitude increases
/// northward. Field order follows the GeoJSON `[lon, lat]` convention.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Latitude in decimal degrees
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point from longitude and latitude, in that order
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Create a point from latitude and longitude, in that order
    pub const fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// GeoJSON position `[lon, lat]`
    pub fn position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

/// Compass direction of travel, restricted to the cardinal points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bearing {
    /// 0°
    North,
    /// 90°
    East,
    /// 180°
    South,
    /// 270°
    West,
}

impl Bearing {
    /// Bearing angle in radians, measured clockwise from north
    pub const fn radians(self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::East => FRAC_PI_2,
            Self::South => PI,
            Self::West => 3.0 * FRAC_PI_2,
        }
    }

    /// The bearing pointing the opposite way
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}
