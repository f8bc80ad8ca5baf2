//! Capability interface shared by everything the canvas can route input to.

use crate::surface::RenderSurface;
use moldraw_core::Point;

/// What an item did with a pointer press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The item swallowed the event. The canvas must not apply its default
    /// handling, in particular it must not change the selection.
    Consumed,
    /// The item did not handle the event; the canvas applies its default.
    Ignored,
}

/// A drawable, hit-testable, hoverable canvas item.
pub trait CanvasItem {
    /// Rebuilds any derived geometry from the item's inputs. Items whose
    /// geometry is their own state need not override this.
    fn recompute_geometry(&mut self) {}

    /// Draws the item from its last computed geometry.
    fn render(&self, surface: &mut dyn RenderSurface);

    /// Whether `p` falls on the item. `tolerance` widens thin items.
    fn hit_test(&self, p: Point, tolerance: f64) -> bool;

    /// Stacking order; higher values are drawn later and picked first.
    fn z_value(&self) -> f64;

    fn is_hovered(&self) -> bool;

    fn on_hover_enter(&mut self);

    fn on_hover_leave(&mut self);

    fn on_press(&mut self, _p: Point) -> EventDisposition {
        EventDisposition::Ignored
    }

    fn on_release(&mut self, _p: Point) -> EventDisposition {
        EventDisposition::Ignored
    }
}
