//! Draggable endpoint handles.

use crate::item::{CanvasItem, EventDisposition};
use crate::surface::RenderSurface;
use moldraw_core::{Color, Point};

/// Side length of a handle's square, in scene units.
pub const HANDLE_SIZE: f64 = 15.0;
/// Stroke width of the hover outline.
pub const HANDLE_OUTLINE_WIDTH: f64 = 2.0;
/// Handles stack above connectors.
pub const HANDLE_Z: f64 = 1001.0;

/// Which end of a connector a handle anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleEnd {
    Start,
    End,
}

/// One draggable end of a connector.
///
/// The handle is an invisible square hit target that shows an outline only
/// while hovered. Presses and releases are swallowed so that grabbing a
/// handle never touches the canvas selection.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointHandle {
    position: Point,
    hovered: bool,
}

impl EndpointHandle {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            hovered: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the handle. Any point is accepted. The owning connector must
    /// recompute its geometry afterwards.
    pub fn set_position(&mut self, p: Point) {
        self.position = p;
    }

    pub fn set_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn size(&self) -> f64 {
        HANDLE_SIZE
    }

    /// Corners of the handle square, clockwise from top-left.
    pub fn corners(&self) -> [Point; 4] {
        let h = HANDLE_SIZE / 2.0;
        let Point { x, y } = self.position;
        [
            Point::new(x - h, y - h),
            Point::new(x + h, y - h),
            Point::new(x + h, y + h),
            Point::new(x - h, y + h),
        ]
    }
}

impl CanvasItem for EndpointHandle {
    fn render(&self, surface: &mut dyn RenderSurface) {
        if !self.hovered {
            return;
        }
        surface.draw_polygon_outline(&self.corners(), HANDLE_OUTLINE_WIDTH, Color::BLACK);
    }

    // The square itself is the pick target.
    fn hit_test(&self, p: Point, _tolerance: f64) -> bool {
        let h = HANDLE_SIZE / 2.0;
        (p.x - self.position.x).abs() <= h && (p.y - self.position.y).abs() <= h
    }

    fn z_value(&self) -> f64 {
        HANDLE_Z
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_invisible_unless_hovered() {
        let mut handle = EndpointHandle::new(Point::new(10.0, 20.0));
        let mut surface = RecordingSurface::new();
        handle.render(&mut surface);
        assert!(surface.is_empty());

        handle.on_hover_enter();
        handle.render(&mut surface);
        assert_eq!(
            surface.commands(),
            &[DrawCommand::PolygonOutline {
                points: vec![
                    Point::new(2.5, 12.5),
                    Point::new(17.5, 12.5),
                    Point::new(17.5, 27.5),
                    Point::new(2.5, 27.5),
                ],
                width: HANDLE_OUTLINE_WIDTH,
                color: Color::BLACK,
            }]
        );
    }

    #[test]
    fn test_hover_keeps_position() {
        let mut handle = EndpointHandle::new(Point::new(3.0, 4.0));
        handle.on_hover_enter();
        assert!(handle.is_hovered());
        handle.on_hover_leave();
        assert!(!handle.is_hovered());
        assert_eq!(handle.position(), Point::new(3.0, 4.0));
        assert_eq!(handle.size(), HANDLE_SIZE);
    }

    #[test]
    fn test_hit_square() {
        let handle = EndpointHandle::new(Point::new(0.0, 0.0));
        assert!(handle.hit_test(Point::new(7.5, -7.5), 0.0));
        assert!(handle.hit_test(Point::new(-3.0, 2.0), 0.0));
        assert!(!handle.hit_test(Point::new(7.6, 0.0), 0.0));
        assert!(!handle.hit_test(Point::new(0.0, 8.0), 5.0));
    }

    #[test]
    fn test_swallows_press_and_release() {
        let mut handle = EndpointHandle::new(Point::new(0.0, 0.0));
        assert_eq!(handle.on_press(Point::new(0.0, 0.0)), EventDisposition::Consumed);
        assert_eq!(handle.on_release(Point::new(0.0, 0.0)), EventDisposition::Consumed);
        assert!(!handle.is_hovered());
    }
}
