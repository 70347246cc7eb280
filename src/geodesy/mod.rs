//! Spherical-earth geodesy
//!
//! This module contains the coordinate value types and the great-circle
//! stepping used to lay out grids:
//! - Geographic points and cardinal bearings
//! - Destination-point stepping and haversine distance

/// Geographic point and bearing value types
pub mod point;
/// Great-circle stepping and distance on a spherical earth
pub mod stepper;

pub use point::{Bearing, GeoPoint};
pub use stepper::{EARTH_RADIUS_KM, angular_distance, haversine_km, step};
