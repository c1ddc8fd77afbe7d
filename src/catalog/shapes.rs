//! Built-in shape draw procedures and the standard catalog
//!
//! The standard set contains 28 motifs in nine families: half-rect-plus-circle,
//! corner triangles, side triangles, centered symmetric shapes, checkers,
//! stripes, corner waves, zigzags, and bowtie/hourglass. Draw procedures emit
//! geometry centered on the local origin with x in `[-w/2, w/2]` and y down,
//! insetting by the supplied padding.

use crate::catalog::{CatalogBuilder, OrientationTransform, TileCatalog};
use crate::io::error::Result;
use crate::render::vector::VectorSink;
use std::f64::consts::{FRAC_PI_2, PI};

const fn t(flip_x: usize, flip_y: usize, flip_both: usize) -> OrientationTransform {
    OrientationTransform {
        flip_x,
        flip_y,
        flip_both,
    }
}

/// Build the standard 28-shape catalog
///
/// Ids are assigned contiguously in registration order, so the orientation
/// entries below refer to ids by their known position in that order.
///
/// # Errors
///
/// Returns a configuration error if the hand-written orientation table fails
/// validation (an involution or family-membership defect).
pub fn standard() -> Result<TileCatalog> {
    let mut b = CatalogBuilder::new();

    // 0-3: half rect + circle (left/right swap under x, top/bottom under y)
    b.oriented("half rect circle left", half_rect_circle_left, t(1, 0, 1));
    b.oriented("half rect circle right", half_rect_circle_right, t(0, 1, 0));
    b.oriented("half rect circle top", half_rect_circle_top, t(2, 3, 3));
    b.oriented("half rect circle bottom", half_rect_circle_bottom, t(3, 2, 2));

    // 4-7: corner triangles
    b.oriented("triangle top left", triangle_top_left, t(5, 6, 7));
    b.oriented("triangle top right", triangle_top_right, t(4, 7, 6));
    b.oriented("triangle bottom left", triangle_bottom_left, t(7, 4, 5));
    b.oriented("triangle bottom right", triangle_bottom_right, t(6, 5, 4));

    // 8-11: side triangles
    b.oriented("triangle half left", triangle_half_left, t(9, 8, 9));
    b.oriented("triangle half right", triangle_half_right, t(8, 9, 8));
    b.oriented("triangle half top", triangle_half_top, t(10, 11, 11));
    b.oriented("triangle half bottom", triangle_half_bottom, t(11, 10, 10));

    // 12-15: fully symmetric centered shapes
    b.symmetric("diamond", diamond);
    b.symmetric("cross", cross);
    b.symmetric("target", target);
    b.symmetric("dots", dots);

    // 16-17: checkers swap under a single flip, return under both
    b.oriented("checkers", checkers, t(17, 17, 16));
    b.oriented("checkers inverse", checkers_inverse, t(16, 16, 17));

    // 18-19: stripes are symmetric along both axes
    b.symmetric("stripes horizontal", stripes_horizontal);
    b.symmetric("stripes vertical", stripes_vertical);

    // 20-23: corner waves
    b.oriented("waves top left", waves_top_left, t(21, 23, 22));
    b.oriented("waves top right", waves_top_right, t(20, 22, 23));
    b.oriented("waves bottom right", waves_bottom_right, t(23, 21, 20));
    b.oriented("waves bottom left", waves_bottom_left, t(22, 20, 21));

    // 24-27: phase-neutral zigzags and bowties
    b.symmetric("zigzag horizontal", zigzag_horizontal);
    b.symmetric("zigzag vertical", zigzag_vertical);
    b.symmetric("bowtie", bowtie);
    b.symmetric("hourglass", hourglass);

    b.family(&[0, 1, 2, 3]);
    b.family(&[4, 5, 6, 7]);
    b.family(&[8, 9, 10, 11]);
    b.family(&[12, 13, 14, 15]);
    b.family(&[16, 17]);
    b.family(&[18, 19]);
    b.family(&[20, 21, 22, 23]);
    b.family(&[24, 25]);
    b.family(&[26, 27]);

    b.build()
}

fn half_rect_circle_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    sink.fill_rect(-w / 2.0 + p, -h / 2.0 + p, w / 2.0 - p, h - pad);
    sink.fill_ellipse(w / 4.0, 0.0, w / 4.0 - p, h / 4.0 - p);
}

fn half_rect_circle_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    sink.fill_rect(0.0, -h / 2.0 + p, w / 2.0 - p, h - pad);
    sink.fill_ellipse(-w / 4.0, 0.0, w / 4.0 - p, h / 4.0 - p);
}

fn half_rect_circle_top(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    sink.fill_rect(-w / 2.0 + p, -h / 2.0 + p, w - pad, h / 2.0 - p);
    sink.fill_ellipse(0.0, h / 4.0, w / 4.0 - p, h / 4.0 - p);
}

fn half_rect_circle_bottom(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    sink.fill_rect(-w / 2.0 + p, 0.0, w - pad, h / 2.0 - p);
    sink.fill_ellipse(0.0, -h / 4.0, w / 4.0 - p, h / 4.0 - p);
}

fn triangle_top_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [-w / 2.0 + p, -h / 2.0 + p],
        [w / 2.0 - p, -h / 2.0 + p],
        [-w / 2.0 + p, h / 2.0 - p],
    );
}

fn triangle_top_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [-w / 2.0 + p, -h / 2.0 + p],
        [w / 2.0 - p, -h / 2.0 + p],
        [w / 2.0 - p, h / 2.0 - p],
    );
}

fn triangle_bottom_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [-w / 2.0 + p, -h / 2.0 + p],
        [-w / 2.0 + p, h / 2.0 - p],
        [w / 2.0 - p, h / 2.0 - p],
    );
}

fn triangle_bottom_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [w / 2.0 - p, -h / 2.0 + p],
        [w / 2.0 - p, h / 2.0 - p],
        [-w / 2.0 + p, h / 2.0 - p],
    );
}

fn triangle_half_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [-w / 2.0 + p, 0.0],
        [w / 2.0 - p, -h / 2.0 + p],
        [w / 2.0 - p, h / 2.0 - p],
    );
}

fn triangle_half_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [w / 2.0 - p, 0.0],
        [-w / 2.0 + p, -h / 2.0 + p],
        [-w / 2.0 + p, h / 2.0 - p],
    );
}

fn triangle_half_top(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [0.0, -h / 2.0 + p],
        [w / 2.0 - p, h / 2.0 - p],
        [-w / 2.0 + p, h / 2.0 - p],
    );
}

fn triangle_half_bottom(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    sink.fill_triangle(
        [0.0, h / 2.0 - p],
        [-w / 2.0 + p, -h / 2.0 + p],
        [w / 2.0 - p, -h / 2.0 + p],
    );
}

fn diamond(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = (w - pad) / 2.0;
    let dh = (h - pad) / 2.0;
    sink.fill_polygon(&[[0.0, -dh], [dw, 0.0], [0.0, dh], [-dw, 0.0]]);
}

fn cross(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let tx = (w - pad) / 3.0;
    let ty = (h - pad) / 3.0;
    sink.fill_rect(-tx / 2.0, -h / 2.0 + p, tx, h - pad);
    sink.fill_rect(-w / 2.0 + p, -ty / 2.0, w - pad, ty);
}

fn target(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let weight = w.min(h) / 20.0;
    let rx = (w - pad) / 2.0;
    let ry = (h - pad) / 2.0;
    sink.stroke_ellipse(0.0, 0.0, rx, ry, weight);
    sink.stroke_ellipse(0.0, 0.0, rx * 0.6, ry * 0.6, weight);
    sink.stroke_ellipse(0.0, 0.0, rx * 0.2, ry * 0.2, weight);
}

fn dots(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    let r = dw.min(dh) * 0.1;
    let ox = dw / 4.0;
    let oy = dh / 4.0;
    sink.fill_ellipse(-ox, -oy, r, r);
    sink.fill_ellipse(ox, -oy, r, r);
    sink.fill_ellipse(-ox, oy, r, r);
    sink.fill_ellipse(ox, oy, r, r);
}

fn checkers(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = (w - pad) / 2.0;
    let dh = (h - pad) / 2.0;
    sink.fill_rect(-w / 2.0 + p, -h / 2.0 + p, dw, dh);
    sink.fill_rect(0.0, 0.0, dw, dh);
}

fn checkers_inverse(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = (w - pad) / 2.0;
    let dh = (h - pad) / 2.0;
    sink.fill_rect(0.0, -h / 2.0 + p, dw, dh);
    sink.fill_rect(-w / 2.0 + p, 0.0, dw, dh);
}

fn stripes_horizontal(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let stripe = (h - pad) / 3.0;
    let top = -h / 2.0 + p;
    sink.fill_rect(-w / 2.0 + p, top, w - pad, stripe);
    sink.fill_rect(-w / 2.0 + p, stripe.mul_add(2.0, top), w - pad, stripe);
}

fn stripes_vertical(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let stripe = (w - pad) / 3.0;
    let left = -w / 2.0 + p;
    sink.fill_rect(left, -h / 2.0 + p, stripe, h - pad);
    sink.fill_rect(stripe.mul_add(2.0, left), -h / 2.0 + p, stripe, h - pad);
}

fn waves(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64, corner: [f64; 2], span: [f64; 2]) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    let size = dw.min(dh);
    let weight = size * 0.1;
    for i in 1..=3 {
        let r = size * f64::from(i) / 3.0;
        sink.stroke_arc(
            corner[0] * dw / 2.0,
            corner[1] * dh / 2.0,
            r,
            r,
            span[0],
            span[1],
            weight,
        );
    }
}

fn waves_top_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    waves(sink, w, h, p, [-1.0, -1.0], [0.0, FRAC_PI_2]);
}

fn waves_top_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    waves(sink, w, h, p, [1.0, -1.0], [FRAC_PI_2, PI]);
}

fn waves_bottom_right(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    waves(sink, w, h, p, [1.0, 1.0], [PI, PI + FRAC_PI_2]);
}

fn waves_bottom_left(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    waves(sink, w, h, p, [-1.0, 1.0], [PI + FRAC_PI_2, 2.0 * PI]);
}

fn zigzag_horizontal(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    let weight = dw.min(dh) * 0.1;
    sink.stroke_polyline(
        &[
            [-dw / 2.0, 0.0],
            [-dw / 4.0, -dh / 3.0],
            [0.0, 0.0],
            [dw / 4.0, dh / 3.0],
            [dw / 2.0, 0.0],
        ],
        weight,
    );
}

fn zigzag_vertical(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    let weight = dw.min(dh) * 0.1;
    sink.stroke_polyline(
        &[
            [0.0, -dh / 2.0],
            [-dw / 3.0, -dh / 4.0],
            [0.0, 0.0],
            [dw / 3.0, dh / 4.0],
            [0.0, dh / 2.0],
        ],
        weight,
    );
}

fn bowtie(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    sink.fill_triangle([-dw / 2.0, -dh / 2.0], [-dw / 2.0, dh / 2.0], [0.0, 0.0]);
    sink.fill_triangle([dw / 2.0, -dh / 2.0], [dw / 2.0, dh / 2.0], [0.0, 0.0]);
}

fn hourglass(sink: &mut dyn VectorSink, w: f64, h: f64, p: f64) {
    let pad = p * 2.0;
    let dw = w - pad;
    let dh = h - pad;
    sink.fill_triangle([-dw / 2.0, -dh / 2.0], [dw / 2.0, -dh / 2.0], [0.0, 0.0]);
    sink.fill_triangle([-dw / 2.0, dh / 2.0], [dw / 2.0, dh / 2.0], [0.0, 0.0]);
}
