//! CLI entry point for the symmetric tile grid generator

use clap::Parser;
use mirrortile::io::cli::{BatchProcessor, Cli};

fn main() -> mirrortile::Result<()> {
    let cli = Cli::parse();
    let mut processor = BatchProcessor::new(cli);
    processor.process()
}
