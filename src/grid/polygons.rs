//! Quadrilateral cells between adjacent matrix points

use ndarray::{Array2, Ix2};

use crate::geodesy::GeoPoint;
use crate::grid::matrix::PointMatrix;

/// One grid cell bounded by four matrix-adjacent points
///
/// Corners run `(r, c)`, `(r + 1, c)`, `(r + 1, c + 1)`, `(r, c + 1)`, which
/// traces a simple ring when joined back to the first corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Cell corners in ring order
    pub corners: [GeoPoint; 4],
}

impl Quad {
    /// Build a cell from its top-left, bottom-left, bottom-right and top-right corners
    pub const fn new(
        top_left: GeoPoint,
        bottom_left: GeoPoint,
        bottom_right: GeoPoint,
        top_right: GeoPoint,
    ) -> Self {
        Self {
            corners: [top_left, bottom_left, bottom_right, top_right],
        }
    }

    /// GeoJSON linear ring: the four corners followed by the first again
    pub fn closed_ring(&self) -> Vec<Vec<f64>> {
        self.corners
            .iter()
            .chain(self.corners.first())
            .map(GeoPoint::position)
            .collect()
    }
}

/// Assemble every cell of a point matrix, row pair by row pair
///
/// Each pair of adjacent rows contributes cells up to the length of the
/// shorter row, so ragged matrices from walk drift never read past a row end.
pub fn assemble(matrix: &PointMatrix) -> Vec<Quad> {
    let mut quads = Vec::new();

    for pair in matrix.rows().windows(2) {
        let [upper, lower] = pair else {
            continue;
        };

        for (top, bottom) in upper.windows(2).zip(lower.windows(2)) {
            if let ([top_left, top_right], [bottom_left, bottom_right]) = (top, bottom) {
                quads.push(Quad::new(*top_left, *bottom_left, *bottom_right, *top_right));
            }
        }
    }

    quads
}

/// Assemble every cell of a rectangular grid using 2×2 windows
///
/// Yields the same cells in the same order as [`assemble`] does for a
/// rectangular [`PointMatrix`].
pub fn assemble_array(grid: &Array2<GeoPoint>) -> Vec<Quad> {
    grid.windows(Ix2(2, 2))
        .into_iter()
        .filter_map(|window| {
            Some(Quad::new(
                *window.get((0, 0))?,
                *window.get((1, 0))?,
                *window.get((1, 1))?,
                *window.get((0, 1))?,
            ))
        })
        .collect()
}
