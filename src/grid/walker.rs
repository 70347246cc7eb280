//! Line walks that step along a bearing until a latitude or longitude boundary
//!
//! A walk always emits its start point, then keeps stepping while the most
//! recent point is short of the boundary. The last point emitted is the first
//! one at or beyond the boundary, so walks overshoot by up to one step. That
//! overshoot fixes the row and column counts of every grid.

use crate::geodesy::{Bearing, GeoPoint, step};
use crate::io::configuration::MAX_WALK_POINTS;
use crate::io::error::{GridError, Result, invalid_parameter};

/// Walk due south from `start` until at or below `target_lat`
///
/// # Errors
///
/// Returns an error if `step_km` is not a positive finite number, or if the
/// walk exceeds [`MAX_WALK_POINTS`] before reaching the boundary
pub fn walk_south(start: GeoPoint, target_lat: f64, step_km: f64) -> Result<Vec<GeoPoint>> {
    walk(start, step_km, Bearing::South, |point| point.lat <= target_lat)
}

/// Walk due east from `start` until at or beyond `target_lon`
///
/// # Errors
///
/// Returns an error if `step_km` is not a positive finite number, or if the
/// walk exceeds [`MAX_WALK_POINTS`] before reaching the boundary
pub fn walk_east(start: GeoPoint, target_lon: f64, step_km: f64) -> Result<Vec<GeoPoint>> {
    walk(start, step_km, Bearing::East, |point| point.lon >= target_lon)
}

fn walk<F>(
    start: GeoPoint,
    step_km: f64,
    bearing: Bearing,
    reached: F,
) -> Result<Vec<GeoPoint>>
where
    F: Fn(&GeoPoint) -> bool,
{
    if !step_km.is_finite() || step_km <= 0.0 {
        return Err(invalid_parameter(
            "step_km",
            &step_km,
            &"must be a positive finite distance",
        ));
    }

    let mut points = vec![start];
    let mut current = start;

    while !reached(&current) {
        if points.len() >= MAX_WALK_POINTS {
            return Err(GridError::WalkLimitExceeded {
                direction: direction_name(bearing),
                limit: MAX_WALK_POINTS,
            });
        }
        current = step(current, step_km, bearing);
        points.push(current);
    }

    Ok(points)
}

const fn direction_name(bearing: Bearing) -> &'static str {
    match bearing {
        Bearing::North => "north",
        Bearing::East => "east",
        Bearing::South => "south",
        Bearing::West => "west",
    }
}
