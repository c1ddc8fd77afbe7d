//! Pixel rasterization of vector primitives
//!
//! A straightforward scanline-free rasterizer: every primitive is reduced to a
//! per-pixel coverage test over its clamped bounding box. Quality is adequate
//! for tile caches and PNG export; there is no anti-aliasing.

use crate::render::vector::VectorSink;
use image::{Rgba, RgbaImage};

/// Number of segments used when flattening a quarter arc
const ARC_SEGMENTS_PER_QUARTER: usize = 12;

/// Vector sink rasterizing primitives into an RGBA image with one fill color
pub struct RasterSink<'a> {
    canvas: &'a mut RgbaImage,
    color: Rgba<u8>,
}

impl<'a> RasterSink<'a> {
    /// Create a sink drawing into `canvas` with the given color
    pub const fn new(canvas: &'a mut RgbaImage, color: Rgba<u8>) -> Self {
        Self { canvas, color }
    }

    /// Clamped pixel bounding box for a rectangular region, or `None` when the
    /// region misses the canvas entirely
    fn bbox(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<[u32; 4]> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        if max_x < 0.0 || max_y < 0.0 || min_x >= w || min_y >= h {
            return None;
        }
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().min(w - 1.0)).max(0.0) as u32;
        let y1 = (max_y.ceil().min(h - 1.0)).max(0.0) as u32;
        Some([x0, y0, x1, y1])
    }

    /// Set every pixel in the bounding box whose center passes `test`
    fn fill_where<F: Fn(f64, f64) -> bool>(
        &mut self,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        test: F,
    ) {
        let Some([x0, y0, x1, y1]) = self.bbox(min_x, min_y, max_x, max_y) else {
            return;
        };
        for py in y0..=y1 {
            for px in x0..=x1 {
                let cx = px as f64 + 0.5;
                let cy = py as f64 + 0.5;
                if test(cx, cy) {
                    self.canvas.put_pixel(px, py, self.color);
                }
            }
        }
    }
}

/// Ray-cast even-odd containment test
fn point_in_polygon(points: &[[f64; 2]], x: f64, y: f64) -> bool {
    let mut inside = false;
    let n = points.len();
    for i in 0..n {
        let Some(&[ax, ay]) = points.get(i) else {
            continue;
        };
        let Some(&[bx, by]) = points.get((i + 1) % n) else {
            continue;
        };
        if (ay > y) != (by > y) {
            let t = (y - ay) / (by - ay);
            if x < t.mul_add(bx - ax, ax) {
                inside = !inside;
            }
        }
    }
    inside
}

/// Squared distance from a point to a line segment
fn segment_distance_sq(a: [f64; 2], b: [f64; 2], x: f64, y: f64) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let len_sq = dx.mul_add(dx, dy * dy);
    let t = if len_sq > 0.0 {
        ((x - a[0]).mul_add(dx, (y - a[1]) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let px = t.mul_add(dx, a[0]);
    let py = t.mul_add(dy, a[1]);
    (x - px).mul_add(x - px, (y - py) * (y - py))
}

impl VectorSink for RasterSink<'_> {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.fill_where(x, y, x + w, y + h, |cx, cy| {
            cx >= x && cx < x + w && cy >= y && cy < y + h
        });
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        self.fill_where(cx - rx, cy - ry, cx + rx, cy + ry, |px, py| {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            nx.mul_add(nx, ny * ny) <= 1.0
        });
    }

    fn fill_triangle(&mut self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) {
        self.fill_polygon(&[a, b, c]);
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]]) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
        let max_x = points
            .iter()
            .map(|p| p[0])
            .fold(f64::NEG_INFINITY, f64::max);
        let max_y = points
            .iter()
            .map(|p| p[1])
            .fold(f64::NEG_INFINITY, f64::max);
        self.fill_where(min_x, min_y, max_x, max_y, |px, py| {
            point_in_polygon(points, px, py)
        });
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, weight: f64) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let half = (weight / 2.0).max(0.5);
        self.fill_where(
            cx - rx - half,
            cy - ry - half,
            cx + rx + half,
            cy + ry + half,
            |px, py| {
                let nx = (px - cx) / rx;
                let ny = (py - cy) / ry;
                let radial = nx.hypot(ny);
                // Distance from the outline, measured along the smaller radius
                (radial - 1.0).abs() * rx.min(ry) <= half
            },
        );
    }

    fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
        weight: f64,
    ) {
        let sweep = (end - start).abs();
        if sweep <= 0.0 || rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let segments = ((sweep / std::f64::consts::FRAC_PI_2) * ARC_SEGMENTS_PER_QUARTER as f64)
            .ceil()
            .max(2.0) as usize;
        let points: Vec<[f64; 2]> = (0..=segments)
            .map(|i| {
                let angle = (end - start).mul_add(i as f64 / segments as f64, start);
                [
                    rx.mul_add(angle.cos(), cx),
                    ry.mul_add(angle.sin(), cy),
                ]
            })
            .collect();
        self.stroke_polyline(&points, weight);
    }

    fn stroke_polyline(&mut self, points: &[[f64; 2]], weight: f64) {
        for pair in points.windows(2) {
            if let (Some(&a), Some(&b)) = (pair.first(), pair.get(1)) {
                self.stroke_line(a, b, weight);
            }
        }
    }

    fn stroke_line(&mut self, a: [f64; 2], b: [f64; 2], weight: f64) {
        let half = (weight / 2.0).max(0.5);
        let min_x = a[0].min(b[0]) - half;
        let min_y = a[1].min(b[1]) - half;
        let max_x = a[0].max(b[0]) + half;
        let max_y = a[1].max(b[1]) + half;
        let half_sq = half * half;
        self.fill_where(min_x, min_y, max_x, max_y, |px, py| {
            segment_distance_sq(a, b, px, py) <= half_sq
        });
    }
}
