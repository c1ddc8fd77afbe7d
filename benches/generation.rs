//! Performance measurement for grid generation and rendering

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mirrortile::catalog::{ShapeSet, shapes};
use mirrortile::spatial::grid::{Grid, GridParams};
use std::hint::black_box;

const PARAMS: GridParams = GridParams {
    seed: 12345,
    rows: 8,
    cols: 8,
    margin: 0.0,
    width: 800.0,
    height: 800.0,
};

/// Measures time to build an 8x8 symmetric grid from a seed
fn bench_generate_8x8(c: &mut Criterion) {
    let Ok(catalog) = shapes::standard() else {
        return;
    };
    let allowed = ShapeSet::all(catalog.shape_count());

    c.bench_function("generate_8x8", |b| {
        b.iter(|| {
            let grid = Grid::generate(PARAMS, &allowed, &catalog);
            black_box(grid.len());
        });
    });
}

/// Measures a full raster render pass with cold quadrant caches
fn bench_render_8x8(c: &mut Criterion) {
    let Ok(catalog) = shapes::standard() else {
        return;
    };
    let allowed = ShapeSet::all(catalog.shape_count());

    c.bench_function("render_8x8", |b| {
        b.iter(|| {
            let mut grid = Grid::generate(PARAMS, &allowed, &catalog);
            let rendered = grid.render(&catalog);
            black_box(rendered.width());
        });
    });
}

criterion_group!(benches, bench_generate_8x8, bench_render_8x8);
criterion_main!(benches);
