//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Generation limits and runtime defaults
pub mod configuration;
/// GeoJSON geometry encoding for grids and cells
pub mod encoder;
/// Error types for grid operations
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Writing GeoJSON documents to disk
pub mod output;
/// Progress display for grid walks
pub mod progress;
