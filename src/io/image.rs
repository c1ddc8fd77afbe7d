//! PNG and SVG export for rendered grids

use crate::catalog::TileCatalog;
use crate::io::error::{EngineError, Result};
use crate::io::svg::SvgSink;
use crate::spatial::grid::Grid;
use std::path::Path;

/// Render a grid and save it as a PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_grid_png(grid: &mut Grid, catalog: &TileCatalog, path: &Path) -> Result<()> {
    let rendered = grid.render(catalog);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    rendered.save(path).map_err(|e| EngineError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render a grid as vector geometry and save it as an SVG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// document cannot be written.
pub fn export_grid_svg(grid: &Grid, catalog: &TileCatalog, path: &Path) -> Result<()> {
    let params = grid.params();
    let mut sink = SvgSink::new(params.width, params.height);
    grid.render_vector(catalog, &mut sink);
    let document = sink.finish();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, document).map_err(|e| EngineError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
