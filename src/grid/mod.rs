//! Grid layout over a bounding box
//!
//! This module contains the grid walk and its products:
//! - Line walks along a single cardinal bearing
//! - Two-phase grid construction over a bounding box
//! - The resulting point matrix and its quadrilateral cells

/// Bounding boxes and two-phase grid construction
pub mod builder;
/// Point matrix produced by a grid walk
pub mod matrix;
/// Quadrilateral cell assembly from point matrices
pub mod polygons;
/// Stepping along one bearing until a boundary is crossed
pub mod walker;

pub use builder::{BoundingBox, GridBuilder, WalkOrder};
pub use matrix::PointMatrix;
pub use polygons::{Quad, assemble, assemble_array};
pub use walker::{walk_east, walk_south};
