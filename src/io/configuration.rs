//! Generation limits and runtime configuration defaults

// Safety limit to prevent runaway walks and excessive memory allocation
/// Maximum number of points a single line walk may emit
pub const MAX_WALK_POINTS: usize = 100_000;

// Logging defaults, overridden by RUST_LOG when set
/// Log filter used when neither RUST_LOG nor `--verbose` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "gridgen=debug,info";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Grids with fewer line walks than this finish without a progress bar
pub const PROGRESS_MIN_LINES: usize = 2;
