//! SVG renderer for connectors.
//!
//! Collects SVG elements through the [`RenderSurface`] interface and wraps
//! them in a standalone document.

use crate::surface::RenderSurface;
use crate::Canvas;
use moldraw_core::{Color, LineSegment, Point};

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(" {}=\"{:.3}\"", name, color.opacity())
    }
}

/// A [`RenderSurface`] that emits SVG elements.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements emitted so far, without the document wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wraps the elements in an `<svg>` document of the given size with a
    /// background rectangle.
    pub fn finish(self, width: f64, height: f64, background: Color) -> String {
        let mut doc = String::new();
        doc.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = width,
            h = height
        ));
        doc.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"{}/>\n",
            background.to_hex(),
            opacity_attr("fill-opacity", background)
        ));
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

impl RenderSurface for SvgSurface {
    fn draw_line(&mut self, line: &LineSegment, width: f64, color: Color) {
        self.body.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            line.p1.x,
            line.p1.y,
            line.p2.x,
            line.p2.y,
            color.to_hex(),
            width,
            opacity_attr("stroke-opacity", color)
        ));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.body.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{}\" stroke=\"none\"{}/>\n",
            points_attr(points),
            color.to_hex(),
            opacity_attr("fill-opacity", color)
        ));
    }

    fn draw_polygon_outline(&mut self, points: &[Point], width: f64, color: Color) {
        self.body.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>\n",
            points_attr(points),
            color.to_hex(),
            width,
            opacity_attr("stroke-opacity", color)
        ));
    }
}

/// Renders the canvas as a standalone SVG document.
pub fn render_canvas_svg(canvas: &Canvas, width: f64, height: f64, background: Color) -> String {
    let mut surface = SvgSurface::new();
    canvas.render(&mut surface);
    surface.finish(width, height, background)
}
