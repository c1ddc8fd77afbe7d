//! Command-line interface for batch grid generation and export

use crate::catalog::{ShapeSet, TileCatalog, shapes};
use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_COLS, DEFAULT_MARGIN, DEFAULT_ROWS, DEFAULT_SEED, OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_grid_png, export_grid_svg};
use crate::io::progress::ProgressManager;
use crate::spatial::grid::{Grid, GridParams};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mirrortile")]
#[command(
    author,
    version,
    about = "Generate symmetric tile grid patterns from a seed"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Output directory for exported files
    #[arg(value_name = "OUTPUT", default_value = ".")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of consecutive seeds to generate, starting at --seed
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: u64,

    /// Supertile rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Supertile columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub height: u32,

    /// Blank border around the grid in pixels
    #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
    pub margin: f64,

    /// Also export an SVG alongside each PNG
    #[arg(long)]
    pub svg: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Restrict generation to these shape ids (default: full catalog)
    #[arg(long, value_delimiter = ',')]
    pub shapes: Vec<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch grid generation with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export all requested grids
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog fails validation, a requested shape
    /// id is unknown, or an export fails.
    pub fn process(&mut self) -> Result<()> {
        let catalog = shapes::standard()?;
        let allowed = self.allowed_set(&catalog)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count as usize);
        }

        for offset in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(offset);
            if let Some(ref pm) = self.progress_manager {
                pm.start_grid(seed);
            }
            self.process_seed(seed, &allowed, &catalog)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_grid();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn allowed_set(&self, catalog: &TileCatalog) -> Result<ShapeSet> {
        if self.cli.shapes.is_empty() {
            return Ok(ShapeSet::all(catalog.shape_count()));
        }
        for &id in &self.cli.shapes {
            if !catalog.contains(id) {
                return Err(crate::EngineError::UnknownShape {
                    id,
                    shape_count: catalog.shape_count(),
                });
            }
        }
        Ok(ShapeSet::from_ids(&self.cli.shapes, catalog.shape_count()))
    }

    fn process_seed(&self, seed: u64, allowed: &ShapeSet, catalog: &TileCatalog) -> Result<()> {
        let params = GridParams {
            seed,
            rows: self.cli.rows,
            cols: self.cli.cols,
            margin: self.cli.margin,
            width: f64::from(self.cli.width),
            height: f64::from(self.cli.height),
        };
        let mut grid = Grid::generate(params, allowed, catalog);

        let stem = format!(
            "{OUTPUT_PREFIX}_seed-{seed}_{}x{}",
            self.cli.rows, self.cli.cols
        );
        let png_path = self.cli.output.join(format!("{stem}.png"));
        export_grid_png(&mut grid, catalog, &png_path)?;

        if self.cli.svg {
            let svg_path = self.cli.output.join(format!("{stem}.svg"));
            export_grid_svg(&grid, catalog, &svg_path)?;
        }
        Ok(())
    }
}
