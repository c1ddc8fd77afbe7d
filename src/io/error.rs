//! Error types for engine and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for engine operations
///
/// Geometry and history problems are recovered locally by callers (a refused
/// restore, an unresolved hit); only catalog mis-registration is fatal, and
/// only at build time.
#[derive(Debug)]
pub enum EngineError {
    /// Catalog registration or validation failed
    CatalogConfiguration {
        /// Description of the configuration defect
        reason: String,
    },

    /// A shape id does not exist in the catalog
    UnknownShape {
        /// The offending id
        id: usize,
        /// Number of registered shapes
        shape_count: usize,
    },

    /// An edit snapshot does not match the live grid's shape
    ///
    /// Occurs when rows/cols changed between the snapshot and a restore
    /// attempt. The restore is refused and the grid left untouched.
    SnapshotMismatch {
        /// Supertile count recorded in the snapshot
        snapshot_tiles: usize,
        /// Supertile count of the live grid
        grid_tiles: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogConfiguration { reason } => {
                write!(f, "Catalog configuration error: {reason}")
            }
            Self::UnknownShape { id, shape_count } => {
                write!(
                    f,
                    "Shape id {id} is out of bounds (catalog has {shape_count} shapes)"
                )
            }
            Self::SnapshotMismatch {
                snapshot_tiles,
                grid_tiles,
            } => {
                write!(
                    f,
                    "Snapshot holds {snapshot_tiles} supertiles but the grid has {grid_tiles}; restore refused"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EngineError {
    EngineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
