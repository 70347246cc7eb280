//! Command-line interface for generating a GeoJSON grid over a bounding box

use crate::geodesy::haversine_km;
use crate::grid::builder::{BoundingBox, GridBuilder, WalkOrder};
use crate::grid::matrix::PointMatrix;
use crate::grid::polygons::assemble_array;
use crate::io::encoder::{OutputFormat, encode, encode_quads};
use crate::io::error::Result;
use crate::io::output::write_geojson;
use crate::io::progress::ProgressManager;
use clap::Parser;
use geojson::Geometry;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gridgen")]
#[command(
    author,
    version,
    about = "Generate a grid of square cells over a bounding box as GeoJSON"
)]
/// Command-line arguments for the grid generator
// Each flag toggles an independent output or reporting option
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// The north-west latitude in decimal degrees
    #[arg(value_name = "NW_LAT", allow_negative_numbers = true)]
    pub nw_lat: f64,

    /// The north-west longitude in decimal degrees
    #[arg(value_name = "NW_LON", allow_negative_numbers = true)]
    pub nw_lon: f64,

    /// The south-east latitude in decimal degrees
    #[arg(value_name = "SE_LAT", allow_negative_numbers = true)]
    pub se_lat: f64,

    /// The south-east longitude in decimal degrees
    #[arg(value_name = "SE_LON", allow_negative_numbers = true)]
    pub se_lon: f64,

    /// The edge length of an individual grid square in kilometres
    #[arg(value_name = "SQUARE_LENGTH")]
    pub square_length: u32,

    /// Location the GeoJSON file should be written to
    #[arg(value_name = "OUT_FILE")]
    pub out_file: PathBuf,

    /// Emit a MultiPoint of grid points instead of a MultiPolygon of cells
    #[arg(short, long, visible_alias = "mp")]
    pub multi_point: bool,

    /// Axis walked first when laying out the grid
    #[arg(short, long, value_enum, default_value_t = WalkOrder::SouthThenEast)]
    pub order: WalkOrder,

    /// Fail instead of writing output when grid rows differ in length
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log grid construction details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Requested output geometry
    pub const fn output_format(&self) -> OutputFormat {
        if self.multi_point {
            OutputFormat::Points
        } else {
            OutputFormat::Polygons
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Bounding box described by the corner arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a corner coordinate is out of range
    pub fn bounding_box(&self) -> Result<BoundingBox> {
        BoundingBox::new(self.nw_lat, self.nw_lon, self.se_lat, self.se_lon)
    }
}

/// Runs one grid generation from parsed arguments to written file
pub struct GridProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GridProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the grid, encode it and write the output file
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, a walk fails, strict
    /// mode rejects a ragged grid, or the output cannot be written
    pub fn process(&mut self) -> Result<PointMatrix> {
        let start_time = Instant::now();
        let matrix = self.build()?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log_summary(&matrix, f64::from(self.cli.square_length));

        let geometry = self.encode(&matrix)?;
        write_geojson(&self.cli.out_file, &geometry)?;

        info!(
            path = %self.cli.out_file.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "grid written"
        );
        Ok(matrix)
    }

    fn build(&mut self) -> Result<PointMatrix> {
        let step_km = f64::from(self.cli.square_length);
        let builder =
            GridBuilder::new(self.cli.bounding_box()?, step_km).with_order(self.cli.order);

        let progress = &mut self.progress_manager;
        builder.build_with_progress(|index, total| {
            if let Some(pm) = progress.as_mut() {
                pm.line_complete(index, total);
            }
        })
    }

    fn encode(&self, matrix: &PointMatrix) -> Result<Geometry> {
        if self.cli.strict {
            let grid = matrix.to_array()?;
            return Ok(match self.cli.output_format() {
                OutputFormat::Points => encode(matrix, OutputFormat::Points),
                OutputFormat::Polygons => encode_quads(&assemble_array(&grid)),
            });
        }

        if !matrix.is_rectangular() {
            warn!(
                row_lengths = ?matrix.row_lengths(),
                "grid rows differ in length; cells are clamped to the shorter row"
            );
        }
        Ok(encode(matrix, self.cli.output_format()))
    }
}

fn log_summary(matrix: &PointMatrix, step_km: f64) {
    let cols = matrix.row(0).map_or(0, <[_]>::len);
    let edge_km = matrix
        .row(0)
        .and_then(|row| Some(haversine_km(*row.first()?, *row.get(1)?)));

    info!(
        rows = matrix.row_count(),
        cols,
        points = matrix.point_count(),
        step_km,
        first_edge_km = ?edge_km,
        "grid built"
    );
}
