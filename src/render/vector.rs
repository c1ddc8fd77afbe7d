//! Vector primitive sink and coordinate frame composition
//!
//! Shapes draw themselves through [`VectorSink`] in a local frame centered on
//! the shape. The nested supertile/quadrant reflections are composed into a
//! [`Frame`] (translation plus independent axis flips) and applied by
//! [`TransformedSink`], so concrete sinks (raster, SVG) receive geometry with
//! all mirroring already resolved.

use std::f64::consts::PI;

/// Consumer of pre-transformed vector draw calls
///
/// Angles are in radians with the y axis pointing down, measured clockwise
/// from the positive x axis. Arc spans run from `start` to `end` with
/// `end > start`.
pub trait VectorSink {
    /// Fill an axis-aligned rectangle given its top-left corner and size
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Fill an ellipse given its center and radii
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64);

    /// Fill a triangle given its three vertices
    fn fill_triangle(&mut self, a: [f64; 2], b: [f64; 2], c: [f64; 2]);

    /// Fill a closed polygon given its vertices in order
    fn fill_polygon(&mut self, points: &[[f64; 2]]);

    /// Stroke an ellipse outline with the given stroke weight
    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, weight: f64);

    /// Stroke a circular/elliptical arc between two angles
    fn stroke_arc(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, start: f64, end: f64, weight: f64);

    /// Stroke an open polyline through the given points
    fn stroke_polyline(&mut self, points: &[[f64; 2]], weight: f64);

    /// Stroke a single line segment
    fn stroke_line(&mut self, a: [f64; 2], b: [f64; 2], weight: f64);
}

/// Composable coordinate frame: a translation plus independent axis flips
///
/// Maps local point `p` to `origin + scale * p` where each scale component is
/// `1` or `-1`. This is the only transform family the engine needs, since the
/// supertile composition uses pure axis reflections around cell centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// World position of the local origin
    pub origin: [f64; 2],
    /// Axis flip state (x, y)
    pub flip: [bool; 2],
}

impl Frame {
    /// Identity frame at a world position
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            origin: [x, y],
            flip: [false, false],
        }
    }

    /// Derive a child frame offset in this frame's local coordinates,
    /// optionally adding further axis flips
    #[must_use]
    pub const fn child(self, offset: [f64; 2], flip_x: bool, flip_y: bool) -> Self {
        let sx = if self.flip[0] { -1.0 } else { 1.0 };
        let sy = if self.flip[1] { -1.0 } else { 1.0 };
        Self {
            origin: [
                self.origin[0] + sx * offset[0],
                self.origin[1] + sy * offset[1],
            ],
            flip: [self.flip[0] ^ flip_x, self.flip[1] ^ flip_y],
        }
    }

    /// Map a local point into world coordinates
    pub const fn map(&self, p: [f64; 2]) -> [f64; 2] {
        let sx = if self.flip[0] { -1.0 } else { 1.0 };
        let sy = if self.flip[1] { -1.0 } else { 1.0 };
        [self.origin[0] + sx * p[0], self.origin[1] + sy * p[1]]
    }

    /// Map an arc span so the transformed arc covers the reflected point set
    ///
    /// Under a single-axis flip the sweep direction reverses, so the span
    /// endpoints swap; under a double flip the span rotates by pi.
    pub fn map_arc(&self, start: f64, end: f64) -> (f64, f64) {
        let (mut s, mut e) = (start, end);
        if self.flip[0] {
            (s, e) = (PI - e, PI - s);
        }
        if self.flip[1] {
            (s, e) = (-e, -s);
        }
        (s, e)
    }
}

/// Sink adapter applying a [`Frame`] to every primitive before forwarding
pub struct TransformedSink<'a> {
    inner: &'a mut dyn VectorSink,
    frame: Frame,
}

impl<'a> TransformedSink<'a> {
    /// Wrap a sink with a coordinate frame
    pub fn new(inner: &'a mut dyn VectorSink, frame: Frame) -> Self {
        Self { inner, frame }
    }
}

impl VectorSink for TransformedSink<'_> {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let a = self.frame.map([x, y]);
        let b = self.frame.map([x + w, y + h]);
        let min = [a[0].min(b[0]), a[1].min(b[1])];
        self.inner
            .fill_rect(min[0], min[1], (b[0] - a[0]).abs(), (b[1] - a[1]).abs());
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let c = self.frame.map([cx, cy]);
        self.inner.fill_ellipse(c[0], c[1], rx, ry);
    }

    fn fill_triangle(&mut self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) {
        self.inner
            .fill_triangle(self.frame.map(a), self.frame.map(b), self.frame.map(c));
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]]) {
        let mapped: Vec<[f64; 2]> = points.iter().map(|&p| self.frame.map(p)).collect();
        self.inner.fill_polygon(&mapped);
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, weight: f64) {
        let c = self.frame.map([cx, cy]);
        self.inner.stroke_ellipse(c[0], c[1], rx, ry, weight);
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
        let c = self.frame.map([cx, cy]);
        let (s, e) = self.frame.map_arc(start, end);
        self.inner.stroke_arc(c[0], c[1], rx, ry, s, e, weight);
    }

    fn stroke_polyline(&mut self, points: &[[f64; 2]], weight: f64) {
        let mapped: Vec<[f64; 2]> = points.iter().map(|&p| self.frame.map(p)).collect();
        self.inner.stroke_polyline(&mapped, weight);
    }

    fn stroke_line(&mut self, a: [f64; 2], b: [f64; 2], weight: f64) {
        self.inner
            .stroke_line(self.frame.map(a), self.frame.map(b), weight);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn test_frame_child_composes_flips() {
        let root = Frame::at(100.0, 100.0);
        let child = root.child([10.0, 20.0], true, false);
        assert_eq!(child.origin, [110.0, 120.0]);
        assert_eq!(child.flip, [true, false]);

        // Offsets in a flipped frame move in the opposite world direction
        let grandchild = child.child([5.0, 0.0], true, false);
        assert_eq!(grandchild.origin, [105.0, 120.0]);
        assert_eq!(grandchild.flip, [false, false]);
    }

    #[test]
    fn test_frame_map_reflects_points() {
        let frame = Frame {
            origin: [50.0, 50.0],
            flip: [true, true],
        };
        assert_eq!(frame.map([10.0, -5.0]), [40.0, 55.0]);
    }

    #[test]
    fn test_double_flip_is_half_turn_for_arcs() {
        let frame = Frame {
            origin: [0.0, 0.0],
            flip: [true, true],
        };
        let (s, e) = frame.map_arc(0.0, PI / 2.0);
        assert!((s - (-PI)).abs() < 1e-12);
        assert!((e - (-PI / 2.0)).abs() < 1e-12);
        // Span length is preserved
        assert!(((e - s) - PI / 2.0).abs() < 1e-12);
    }
}
