//! Destination-point stepping on a sphere
//!
//! Uses the spherical law of cosines form of the direct geodesic problem.
//! There is no ellipsoid correction and results are not normalised: callers
//! must not step far enough to pass a pole or wrap longitude.

use crate::geodesy::point::{Bearing, GeoPoint};

/// Mean radius of the earth in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Convert a surface distance in kilometres to radians of arc
pub fn angular_distance(distance_km: f64) -> f64 {
    distance_km / EARTH_RADIUS_KM
}

/// Travel `distance_km` from `point` along the great circle leaving at `bearing`
///
/// Inputs and output are decimal degrees; all trigonometry runs in radians.
pub fn step(point: GeoPoint, distance_km: f64, bearing: Bearing) -> GeoPoint {
    let ad = angular_distance(distance_km);
    let theta = bearing.radians();
    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();

    let next_lat = lat
        .sin()
        .mul_add(ad.cos(), lat.cos() * ad.sin() * theta.cos())
        .asin();

    let y = theta.sin() * ad.sin() * lat.cos();
    let x = lat.sin().mul_add(-next_lat.sin(), ad.cos());
    let next_lon = lon + y.atan2(x);

    GeoPoint::new(next_lon.to_degrees(), next_lat.to_degrees())
}

/// Great-circle distance between two points in kilometres (haversine formula)
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        a.lat.to_radians(),
        a.lon.to_radians(),
        b.lat.to_radians(),
        b.lon.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (lat1.cos() * lat2.cos())
        .mul_add((dlon / 2.0).sin().powi(2), (dlat / 2.0).sin().powi(2));
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
