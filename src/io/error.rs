//! Error types for grid construction, encoding and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Input parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A line walk did not reach its boundary within the point limit
    ///
    /// Occurs when the step is tiny relative to the bounding box, or when a
    /// southward walk targets a pole and bounces back without crossing it.
    WalkLimitExceeded {
        /// Axis being walked ("south" or "east")
        direction: &'static str,
        /// Point limit that was reached
        limit: usize,
    },

    /// Rows of the point matrix have different lengths
    RaggedMatrix {
        /// First row whose length differs from row 0
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// GeoJSON document could not be serialized
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::WalkLimitExceeded { direction, limit } => {
                write!(
                    f,
                    "Walk {direction} did not reach its boundary within {limit} points"
                )
            }
            Self::RaggedMatrix {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Point matrix is not rectangular: row {row} has {found} points, expected {expected}"
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize GeoJSON: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
