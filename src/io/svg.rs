//! SVG export sink for plotter-friendly vector output

use crate::io::configuration::SVG_EXPORT_COLOR;
use crate::render::vector::VectorSink;
use std::fmt::Write as _;

/// Segments per quarter turn when flattening arcs to polylines
const ARC_SEGMENTS_PER_QUARTER: usize = 16;

/// [`VectorSink`] that accumulates primitives into an SVG document
///
/// Arcs are flattened to polylines so the output renders identically to the
/// raster path and stays trivially consumable by plotter toolchains.
pub struct SvgSink {
    body: String,
    width: f64,
    height: f64,
}

impl SvgSink {
    /// Start an empty document of the given pixel size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            body: String::new(),
            width,
            height,
        }
    }

    /// Finalize and return the complete SVG document
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
             viewBox=\"0 0 {:.0} {:.0}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }

    fn push_points(out: &mut String, points: &[[f64; 2]]) {
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:.2},{:.2}", p[0], p[1]);
        }
    }
}

impl VectorSink for SvgSink {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{SVG_EXPORT_COLOR}\"/>"
        );
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let _ = writeln!(
            self.body,
            "  <ellipse cx=\"{cx:.2}\" cy=\"{cy:.2}\" rx=\"{rx:.2}\" ry=\"{ry:.2}\" fill=\"{SVG_EXPORT_COLOR}\"/>"
        );
    }

    fn fill_triangle(&mut self, a: [f64; 2], b: [f64; 2], c: [f64; 2]) {
        self.fill_polygon(&[a, b, c]);
    }

    fn fill_polygon(&mut self, points: &[[f64; 2]]) {
        let mut list = String::new();
        Self::push_points(&mut list, points);
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{list}\" fill=\"{SVG_EXPORT_COLOR}\"/>"
        );
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, weight: f64) {
        let _ = writeln!(
            self.body,
            "  <ellipse cx=\"{cx:.2}\" cy=\"{cy:.2}\" rx=\"{rx:.2}\" ry=\"{ry:.2}\" \
             fill=\"none\" stroke=\"{SVG_EXPORT_COLOR}\" stroke-width=\"{weight:.2}\"/>"
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
        let span = end - start;
        let segments =
            ((span.abs() / std::f64::consts::FRAC_PI_2).ceil() as usize).max(1) * ARC_SEGMENTS_PER_QUARTER;
        let points: Vec<[f64; 2]> = (0..=segments)
            .map(|i| {
                let t = span.mul_add(i as f64 / segments as f64, start);
                [rx.mul_add(t.cos(), cx), ry.mul_add(t.sin(), cy)]
            })
            .collect();
        self.stroke_polyline(&points, weight);
    }

    fn stroke_polyline(&mut self, points: &[[f64; 2]], weight: f64) {
        let mut list = String::new();
        Self::push_points(&mut list, points);
        let _ = writeln!(
            self.body,
            "  <polyline points=\"{list}\" fill=\"none\" stroke=\"{SVG_EXPORT_COLOR}\" \
             stroke-width=\"{weight:.2}\" stroke-linecap=\"round\"/>"
        );
    }

    fn stroke_line(&mut self, a: [f64; 2], b: [f64; 2], weight: f64) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{SVG_EXPORT_COLOR}\" stroke-width=\"{weight:.2}\" stroke-linecap=\"round\"/>",
            a[0], a[1], b[0], b[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_primitives() {
        let mut sink = SvgSink::new(100.0, 50.0);
        sink.fill_rect(1.0, 2.0, 3.0, 4.0);
        let doc = sink.finish();
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains("<rect x=\"1.00\""));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn test_arc_flattens_to_polyline() {
        let mut sink = SvgSink::new(10.0, 10.0);
        sink.stroke_arc(5.0, 5.0, 2.0, 2.0, 0.0, std::f64::consts::PI, 1.0);
        let doc = sink.finish();
        assert!(doc.contains("<polyline"));
        assert!(!doc.contains("<path"));
    }
}
