//! GeoJSON geometry encoding for point matrices and grid cells
//!
//! Produces bare geometry objects with no feature wrapper, CRS or properties.
//! Coordinates are always `[lon, lat]`.

use geojson::{Geometry, Value};

use crate::grid::matrix::PointMatrix;
use crate::grid::polygons::{Quad, assemble};
use crate::io::error::Result;

/// Shape of the emitted geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `MultiPoint` of every grid point in row-major order
    Points,
    /// `MultiPolygon` with one polygon per grid cell
    #[default]
    Polygons,
}

/// Encode a matrix in the given format
pub fn encode(matrix: &PointMatrix, format: OutputFormat) -> Geometry {
    match format {
        OutputFormat::Points => encode_points(matrix),
        OutputFormat::Polygons => encode_polygons(matrix),
    }
}

/// Flatten a matrix row by row into a `MultiPoint`
pub fn encode_points(matrix: &PointMatrix) -> Geometry {
    let coordinates = matrix.points().map(|point| point.position()).collect();
    Geometry::new(Value::MultiPoint(coordinates))
}

/// Assemble a matrix into cells and encode them as a `MultiPolygon`
pub fn encode_polygons(matrix: &PointMatrix) -> Geometry {
    encode_quads(&assemble(matrix))
}

/// Encode cells as a `MultiPolygon`, one single-ring polygon per cell
///
/// Shared corners are repeated in every cell that uses them.
pub fn encode_quads(quads: &[Quad]) -> Geometry {
    let polygons = quads.iter().map(|quad| vec![quad.closed_ring()]).collect();
    Geometry::new(Value::MultiPolygon(polygons))
}

/// Serialize a geometry as a compact JSON document
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json(geometry: &Geometry) -> Result<String> {
    Ok(serde_json::to_string(geometry)?)
}
