//! Engine constants and runtime configuration defaults

/// Maximum retained generation-parameter history entries
pub const GENERATION_HISTORY_CAP: usize = 20;
/// Maximum retained edit-snapshot history entries
pub const EDIT_HISTORY_CAP: usize = 50;

/// Padding inset of a subtile, as a fraction of its smaller dimension
pub const SUBTILE_PADDING_RATIO: f64 = 0.05;

/// Foreground color for rendered tiles
pub const TILE_COLOR: [u8; 4] = [220, 220, 220, 255];
/// Canvas background color
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Stroke color used for SVG export, chosen for plotter contrast
pub const SVG_EXPORT_COLOR: &str = "black";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid rows
pub const DEFAULT_ROWS: usize = 4;
/// Default grid columns
pub const DEFAULT_COLS: usize = 4;
/// Default canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 600;
/// Default margin around the grid in pixels
pub const DEFAULT_MARGIN: f64 = 0.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rows or columns
pub const MAX_GRID_DIMENSION: usize = 1_000;
/// Maximum allowed canvas edge length in pixels
pub const MAX_CANVAS_SIZE: u32 = 16_384;

/// Prefix for exported file names
pub const OUTPUT_PREFIX: &str = "tiles";
