//! Directed connectors (arrows) between two endpoint handles.
//!
//! A connector's line and arrowhead are derived state: they are a pure
//! function of the two handle positions and the scale factor of the shared
//! [`DrawingInfo`], rebuilt by [`Connector::recompute_geometry`] after every
//! handle move or scale change.
//!
//! Angles follow the screen convention (y grows downward). The direction
//! angle is measured so that a segment pointing right has angle `2π`, one
//! pointing up has `π/2` and one pointing down has `3π/2`.

use std::f64::consts::{FRAC_PI_3, PI, TAU};

use crate::handle::{EndpointHandle, HandleEnd};
use crate::item::{CanvasItem, EventDisposition};
use crate::surface::RenderSurface;
use moldraw_core::{triangle_contains, Color, DrawingInfo, LineSegment, Point, Shared};

/// Arrowhead size as a fraction of the scale factor.
pub const ARROW_SIZE_RATIO: f64 = 0.1;
/// Line stroke width as a fraction of the scale factor.
pub const LINE_WIDTH_RATIO: f64 = 0.02;
/// Arrowhead outline width as a fraction of the scale factor.
pub const ARROW_OUTLINE_RATIO: f64 = 0.001;
/// Connectors stack just below their handles.
pub const CONNECTOR_Z: f64 = 1000.0;

/// Line and arrowhead of a connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorGeometry {
    /// The rendered line, trimmed back to the arrowhead when long enough.
    pub line: LineSegment,
    /// Tip followed by the two base corners.
    pub arrow_head: [Point; 3],
    /// Direction angle in radians, see the module docs.
    pub angle: f64,
    pub arrow_size: f64,
}

impl ConnectorGeometry {
    /// Computes the geometry of an arrow from `start` to `end`.
    pub fn compute(start: Point, end: Point, scale_factor: f64) -> Self {
        let raw = LineSegment::new(start, end);
        let length = raw.length();

        let mut angle = if length == 0.0 {
            0.0
        } else {
            (raw.dx() / length).clamp(-1.0, 1.0).acos()
        };
        // acos only covers [0, π]; segments pointing down (or level) take
        // the other half turn.
        if raw.dy() >= 0.0 {
            angle = TAU - angle;
        }

        let arrow_size = ARROW_SIZE_RATIO * scale_factor;
        let base_corner = |a: f64| end - Point::new(a.sin(), a.cos()) * arrow_size;
        let arrow_head = [
            end,
            base_corner(angle + FRAC_PI_3),
            base_corner(angle + PI - FRAC_PI_3),
        ];

        let mut line = raw;
        // TODO: trim to the arrowhead's actual base for short connectors too;
        // below arrow_size the shaft still runs through the head.
        if length > arrow_size {
            let back = arrow_size * 3.0_f64.sqrt() / 2.0;
            line.p2 = end + Point::new(-angle.cos() * back, angle.sin() * back);
        }

        Self {
            line,
            arrow_head,
            angle,
            arrow_size,
        }
    }
}

/// An arrow owning the two handles that anchor it.
#[derive(Debug)]
pub struct Connector {
    id: u64,
    start: EndpointHandle,
    end: EndpointHandle,
    info: Shared<DrawingInfo>,
    geometry: ConnectorGeometry,
    hovered: bool,
}

impl Connector {
    /// Creates a connector with both handles at `origin`.
    pub fn new(id: u64, origin: Point, info: Shared<DrawingInfo>) -> Self {
        Self::between(id, origin, origin, info)
    }

    /// Creates a connector from `start` to `end`.
    pub fn between(id: u64, start: Point, end: Point, info: Shared<DrawingInfo>) -> Self {
        let scale_factor = info.borrow().scale_factor();
        Self {
            id,
            start: EndpointHandle::new(start),
            end: EndpointHandle::new(end),
            info,
            geometry: ConnectorGeometry::compute(start, end, scale_factor),
            hovered: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn start_handle(&self) -> &EndpointHandle {
        &self.start
    }

    pub fn end_handle(&self) -> &EndpointHandle {
        &self.end
    }

    pub fn handle(&self, end: HandleEnd) -> &EndpointHandle {
        match end {
            HandleEnd::Start => &self.start,
            HandleEnd::End => &self.end,
        }
    }

    // Crate-internal so positions can only change through `move_handle`.
    pub(crate) fn handle_mut(&mut self, end: HandleEnd) -> &mut EndpointHandle {
        match end {
            HandleEnd::Start => &mut self.start,
            HandleEnd::End => &mut self.end,
        }
    }

    /// Moves one handle and recomputes the geometry.
    pub fn move_handle(&mut self, end: HandleEnd, p: Point) {
        self.handle_mut(end).set_position(p);
        self.recompute_geometry();
    }

    pub fn geometry(&self) -> &ConnectorGeometry {
        &self.geometry
    }

    pub fn line(&self) -> LineSegment {
        self.geometry.line
    }

    pub fn arrow_head(&self) -> [Point; 3] {
        self.geometry.arrow_head
    }

    /// Current scale factor of the shared drawing context.
    pub fn scale_factor(&self) -> f64 {
        self.info.borrow().scale_factor()
    }

    pub fn set_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Axis-aligned bounds of the line and arrowhead.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (mut min_x, mut min_y, mut max_x, mut max_y) = self.geometry.line.bounds();
        for p in &self.geometry.arrow_head {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

impl CanvasItem for Connector {
    fn recompute_geometry(&mut self) {
        let scale_factor = self.scale_factor();
        self.geometry =
            ConnectorGeometry::compute(self.start.position(), self.end.position(), scale_factor);
        tracing::trace!(
            id = self.id,
            start = %self.start.position(),
            end = %self.end.position(),
            scale_factor,
            "Recomputed connector geometry"
        );
    }

    fn render(&self, surface: &mut dyn RenderSurface) {
        let scale_factor = self.scale_factor();
        surface.draw_line(
            &self.geometry.line,
            LINE_WIDTH_RATIO * scale_factor,
            Color::BLACK,
        );
        surface.fill_polygon(&self.geometry.arrow_head, Color::BLACK);
        surface.draw_polygon_outline(
            &self.geometry.arrow_head,
            ARROW_OUTLINE_RATIO * scale_factor,
            Color::BLACK,
        );
    }

    fn hit_test(&self, p: Point, tolerance: f64) -> bool {
        let half_width = LINE_WIDTH_RATIO * self.scale_factor() / 2.0;
        self.geometry.line.distance_to_point(p) <= half_width + tolerance
            || triangle_contains(&self.geometry.arrow_head, p)
    }

    fn z_value(&self) -> f64 {
        CONNECTOR_Z
    }

    fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn on_hover_enter(&mut self) {
        self.set_hover(true);
    }

    fn on_hover_leave(&mut self) {
        self.set_hover(false);
    }

    fn on_press(&mut self, _p: Point) -> EventDisposition {
        EventDisposition::Consumed
    }

    fn on_release(&mut self, _p: Point) -> EventDisposition {
        EventDisposition::Consumed
    }
}
