//! Two-phase grid walk over a bounding box
//!
//! The outer walk runs down (or across) from the north-west corner to produce
//! anchor points, then an inner walk runs the perpendicular direction from
//! every anchor. Each anchor becomes one row of the resulting matrix.

use tracing::{debug, info_span};

use crate::geodesy::GeoPoint;
use crate::grid::matrix::PointMatrix;
use crate::grid::walker::{walk_east, walk_south};
use crate::io::error::{Result, invalid_parameter};

/// Geographic bounding box given by its north-west and south-east corners
///
/// Corner orientation is not checked. A north-west corner that lies south or
/// east of the south-east corner yields a degenerate single-line grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// North-west corner, where every grid starts
    pub north_west: GeoPoint,
    /// South-east corner, bounding the walks
    pub south_east: GeoPoint,
}

impl BoundingBox {
    /// Create a bounding box from corner latitudes and longitudes
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite or a latitude lies
    /// outside [-90, 90]
    pub fn new(nw_lat: f64, nw_lon: f64, se_lat: f64, se_lon: f64) -> Result<Self> {
        validate_latitude("nw_lat", nw_lat)?;
        validate_longitude("nw_lon", nw_lon)?;
        validate_latitude("se_lat", se_lat)?;
        validate_longitude("se_lon", se_lon)?;

        Ok(Self {
            north_west: GeoPoint::from_lat_lon(nw_lat, nw_lon),
            south_east: GeoPoint::from_lat_lon(se_lat, se_lon),
        })
    }
}

fn validate_latitude(parameter: &'static str, lat: f64) -> Result<()> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(invalid_parameter(
            parameter,
            &lat,
            &"latitude must be within [-90, 90]",
        ));
    }
    Ok(())
}

fn validate_longitude(parameter: &'static str, lon: f64) -> Result<()> {
    if !lon.is_finite() {
        return Err(invalid_parameter(
            parameter,
            &lon,
            &"longitude must be finite",
        ));
    }
    Ok(())
}

/// Which axis the outer walk follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WalkOrder {
    /// Walk south for row anchors, then east along each row
    #[default]
    SouthThenEast,
    /// Walk east for row anchors, then south along each row
    ///
    /// Produces the transpose of [`WalkOrder::SouthThenEast`].
    EastThenSouth,
}

/// Builds point matrices covering a bounding box at a fixed step
#[derive(Debug, Clone)]
pub struct GridBuilder {
    bounds: BoundingBox,
    step_km: f64,
    order: WalkOrder,
}

impl GridBuilder {
    /// Create a builder using the default south-then-east order
    pub const fn new(bounds: BoundingBox, step_km: f64) -> Self {
        Self {
            bounds,
            step_km,
            order: WalkOrder::SouthThenEast,
        }
    }

    /// Select the walk order
    #[must_use]
    pub const fn with_order(mut self, order: WalkOrder) -> Self {
        self.order = order;
        self
    }

    /// The bounding box being covered
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Step distance in kilometres
    pub const fn step_km(&self) -> f64 {
        self.step_km
    }

    /// The configured walk order
    pub const fn order(&self) -> WalkOrder {
        self.order
    }

    /// Walk the full grid
    ///
    /// # Errors
    ///
    /// Returns an error if the step is invalid or a walk exceeds its point limit
    pub fn build(&self) -> Result<PointMatrix> {
        self.build_with_progress(|_, _| {})
    }

    /// Walk the full grid, reporting each finished inner walk
    ///
    /// `on_line` receives the index of the completed row and the total number
    /// of rows once the outer walk is known.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is invalid or a walk exceeds its point limit
    pub fn build_with_progress<F>(&self, mut on_line: F) -> Result<PointMatrix>
    where
        F: FnMut(usize, usize),
    {
        let span = info_span!("build_grid", order = ?self.order, step_km = self.step_km);
        let _guard = span.enter();

        let start = self.bounds.north_west;
        let end = self.bounds.south_east;

        let anchors = match self.order {
            WalkOrder::SouthThenEast => walk_south(start, end.lat, self.step_km)?,
            WalkOrder::EastThenSouth => walk_east(start, end.lon, self.step_km)?,
        };
        let total = anchors.len();
        debug!(anchors = total, "outer walk complete");

        let mut rows = Vec::with_capacity(total);
        for (index, anchor) in anchors.into_iter().enumerate() {
            let row = match self.order {
                WalkOrder::SouthThenEast => walk_east(anchor, end.lon, self.step_km)?,
                WalkOrder::EastThenSouth => walk_south(anchor, end.lat, self.step_km)?,
            };
            debug!(row = index, points = row.len(), "inner walk complete");
            rows.push(row);
            on_line(index, total);
        }

        Ok(PointMatrix::from_rows(rows))
    }
}
