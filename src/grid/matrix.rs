//! Row-ordered point matrix produced by a grid walk
//!
//! Rows are indexed by the outer walk and columns by the inner walk. Each
//! inner walk stops on its own, so floating-point drift can leave rows with
//! different lengths. The matrix keeps rows exactly as walked; callers that
//! need a rectangle convert with [`PointMatrix::to_array`].

use ndarray::Array2;

use crate::geodesy::GeoPoint;
use crate::io::error::{GridError, Result};

/// Ordered rows of grid points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointMatrix {
    rows: Vec<Vec<GeoPoint>>,
}

impl PointMatrix {
    /// Wrap already-walked rows
    pub const fn from_rows(rows: Vec<Vec<GeoPoint>>) -> Self {
        Self { rows }
    }

    /// All rows in walk order
    pub fn rows(&self) -> &[Vec<GeoPoint>] {
        &self.rows
    }

    /// A single row, if present
    pub fn row(&self, index: usize) -> Option<&[GeoPoint]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A single point, if present
    pub fn get(&self, row: usize, col: usize) -> Option<GeoPoint> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row, in order
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Total number of points across all rows
    pub fn point_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check whether the matrix has no points
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Check whether every row has the same length as row 0
    pub fn is_rectangular(&self) -> bool {
        self.first_ragged_row().is_none()
    }

    /// Iterate points in row-major order
    pub fn points(&self) -> impl Iterator<Item = &GeoPoint> {
        self.rows.iter().flatten()
    }

    /// Consume the matrix, returning its rows
    pub fn into_rows(self) -> Vec<Vec<GeoPoint>> {
        self.rows
    }

    /// Convert to a rectangular array indexed by `[row, col]`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedMatrix`] naming the first row whose length
    /// differs from row 0
    pub fn to_array(&self) -> Result<Array2<GeoPoint>> {
        if let Some((row, found)) = self.first_ragged_row() {
            return Err(GridError::RaggedMatrix {
                row,
                expected: self.rows.first().map_or(0, Vec::len),
                found,
            });
        }

        let cols = self.rows.first().map_or(0, Vec::len);
        Ok(Array2::from_shape_fn((self.rows.len(), cols), |(row, col)| {
            self.get(row, col).unwrap_or_default()
        }))
    }

    fn first_ragged_row(&self) -> Option<(usize, usize)> {
        let expected = self.rows.first().map_or(0, Vec::len);
        self.rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
            .map(|(index, row)| (index, row.len()))
    }
}

impl From<Array2<GeoPoint>> for PointMatrix {
    fn from(array: Array2<GeoPoint>) -> Self {
        Self::from_rows(array.rows().into_iter().map(|row| row.to_vec()).collect())
    }
}
