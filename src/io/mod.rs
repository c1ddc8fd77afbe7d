//! Command-line interface, configuration, errors, and export encoders

/// Command-line argument parsing and batch orchestration
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types for engine and export operations
pub mod error;
/// PNG and SVG export
pub mod image;
/// Progress display for batch generation
pub mod progress;
/// SVG vector sink
pub mod svg;
