//! Render surface abstraction.
//!
//! Drawing items only ever talk to a [`RenderSurface`]; the raster
//! ([`crate::renderer`]) and SVG ([`crate::svg_renderer`]) back-ends and the
//! [`RecordingSurface`] display list all implement it.

use moldraw_core::{Color, LineSegment, Point};

/// The three primitives connectors and handles need.
pub trait RenderSurface {
    /// Strokes a straight line.
    fn draw_line(&mut self, line: &LineSegment, width: f64, color: Color);

    /// Fills a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Strokes the outline of a closed polygon.
    fn draw_polygon_outline(&mut self, points: &[Point], width: f64, color: Color);
}

/// A single recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        line: LineSegment,
        width: f64,
        color: Color,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
    PolygonOutline {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
}

/// Display list that records every primitive it receives.
///
/// Useful to inspect exactly what an item rendered, or to render once and
/// replay onto several back-ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Re-issues the recorded primitives, in order, onto another surface.
    pub fn replay(&self, target: &mut dyn RenderSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Line { line, width, color } => target.draw_line(line, *width, *color),
                DrawCommand::FillPolygon { points, color } => target.fill_polygon(points, *color),
                DrawCommand::PolygonOutline {
                    points,
                    width,
                    color,
                } => target.draw_polygon_outline(points, *width, *color),
            }
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_line(&mut self, line: &LineSegment, width: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            line: *line,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_polygon_outline(&mut self, points: &[Point], width: f64, color: Color) {
        self.commands.push(DrawCommand::PolygonOutline {
            points: points.to_vec(),
            width,
            color,
        });
    }
}
