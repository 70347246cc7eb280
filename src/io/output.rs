//! GeoJSON document output

use std::path::Path;

use geojson::Geometry;
use tracing::debug;

use crate::io::error::{GridError, Result};
use crate::io::encoder::to_json;

/// Write a geometry to `path` as a single JSON document
///
/// The parent directory is created when missing. The document is serialized
/// in full before the file is touched, then written in one call.
///
/// # Errors
///
/// Returns an error if:
/// - The geometry cannot be serialized
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_geojson(path: &Path, geometry: &Geometry) -> Result<()> {
    let document = to_json(geometry)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, &document).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    debug!(path = %path.display(), bytes = document.len(), "wrote GeoJSON");
    Ok(())
}
