//! Geodesic grid generation over geographic bounding boxes
//!
//! A grid is laid out by stepping a fixed great-circle distance from the
//! north-west corner of a bounding box: first along one axis to find row
//! anchors, then along the perpendicular axis from each anchor. The resulting
//! point matrix can be emitted as a GeoJSON point cloud or assembled into a
//! mesh of quadrilateral cells. The earth is modelled as a sphere.

#![forbid(unsafe_code)]

/// Spherical-earth points, bearings and great-circle stepping
pub mod geodesy;
/// Line walks, grid construction and cell assembly
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{GridError, Result};
