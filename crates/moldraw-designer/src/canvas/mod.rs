//! Canvas holding connectors and routing pointer input to them.

mod operations;
mod types;

pub use types::{DragState, DrawingMode, ItemRef};

use std::collections::BTreeMap;

use crate::connector::Connector;
use crate::handle::HandleEnd;
use crate::item::CanvasItem;
use crate::selection_manager::SelectionManager;
use crate::surface::RenderSurface;
use moldraw_core::{shared, DrawingError, DrawingInfo, Point, Shared};

/// Default extra pick distance around thin items, in scene units.
pub const DEFAULT_PICK_TOLERANCE: f64 = 2.0;

/// Canvas state: connectors, selection, hover and drag tracking.
///
/// Connectors are kept in creation order, which is also their draw order.
/// Every mutation that moves a handle or changes the scale factor
/// recomputes the affected geometry before returning, so `render` always
/// sees up-to-date geometry.
#[derive(Debug)]
pub struct Canvas {
    info: Shared<DrawingInfo>,
    connectors: BTreeMap<u64, Connector>,
    next_id: u64,
    pub selection_manager: SelectionManager,
    mode: DrawingMode,
    hovered: Option<ItemRef>,
    drag: Option<DragState>,
    pick_tolerance: f64,
    needs_redraw: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(shared(DrawingInfo::default()))
    }
}

impl Canvas {
    /// Creates an empty canvas reading its scale factor from `info`.
    pub fn new(info: Shared<DrawingInfo>) -> Self {
        Self {
            info,
            connectors: BTreeMap::new(),
            next_id: 1,
            selection_manager: SelectionManager::new(),
            mode: DrawingMode::Select,
            hovered: None,
            drag: None,
            pick_tolerance: DEFAULT_PICK_TOLERANCE,
            needs_redraw: false,
        }
    }

    pub fn with_pick_tolerance(mut self, tolerance: f64) -> Self {
        self.pick_tolerance = tolerance.max(0.0);
        self
    }

    pub fn pick_tolerance(&self) -> f64 {
        self.pick_tolerance
    }

    /// The shared drawing context.
    pub fn info(&self) -> Shared<DrawingInfo> {
        self.info.clone()
    }

    pub fn scale_factor(&self) -> f64 {
        self.info.borrow().scale_factor()
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Adds a connector with both handles at `origin`.
    pub fn add_connector(&mut self, origin: Point) -> u64 {
        self.add_connector_between(origin, origin)
    }

    /// Adds a connector from `start` to `end`.
    pub fn add_connector_between(&mut self, start: Point, end: Point) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.connectors
            .insert(id, Connector::between(id, start, end, self.info.clone()));
        self.needs_redraw = true;
        tracing::debug!(id, %start, %end, "Added connector");
        id
    }

    /// Removes a connector together with its handles.
    pub fn remove_connector(&mut self, id: u64) -> Result<Connector, DrawingError> {
        let connector = self
            .connectors
            .remove(&id)
            .ok_or(DrawingError::UnknownConnector { id })?;
        if self.hovered.is_some_and(|item| item.connector_id() == id) {
            self.hovered = None;
        }
        if self.drag.is_some_and(|drag| drag.connector == id) {
            self.drag = None;
        }
        self.needs_redraw = true;
        tracing::debug!(id, "Removed connector");
        Ok(connector)
    }

    pub fn connector(&self, id: u64) -> Option<&Connector> {
        self.connectors.get(&id)
    }

    /// Connectors in draw order.
    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.values()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Moves one handle of a connector and recomputes that connector.
    pub fn move_handle(&mut self, id: u64, end: HandleEnd, p: Point) -> Result<(), DrawingError> {
        let connector = self
            .connectors
            .get_mut(&id)
            .ok_or(DrawingError::UnknownConnector { id })?;
        connector.move_handle(end, p);
        self.needs_redraw = true;
        Ok(())
    }

    /// Sets the shared scale factor and recomputes every connector.
    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<(), DrawingError> {
        self.info.borrow_mut().set_scale_factor(scale_factor)?;
        self.recompute_all();
        Ok(())
    }

    /// Sets the zoom of the shared context and recomputes every connector.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), DrawingError> {
        self.info.borrow_mut().set_zoom(zoom)?;
        self.recompute_all();
        Ok(())
    }

    /// Recomputes every connector from the current handle positions and
    /// scale factor. Call after mutating the shared context directly.
    pub fn recompute_all(&mut self) {
        for connector in self.connectors.values_mut() {
            connector.recompute_geometry();
        }
        self.needs_redraw = true;
        tracing::debug!(
            count = self.connectors.len(),
            scale_factor = self.scale_factor(),
            "Recomputed all connectors"
        );
    }

    /// Draws connectors, then handles above them.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        for connector in self.connectors.values() {
            connector.render(surface);
        }
        for connector in self.connectors.values() {
            connector.start_handle().render(surface);
            connector.end_handle().render(surface);
        }
    }

    /// Bounds of all connectors as `(min_x, min_y, max_x, max_y)`, or
    /// `None` for an empty canvas.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.connectors
            .values()
            .map(Connector::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3)))
    }

    /// Topmost item under `p`. Handles win over connectors; among equal
    /// stacking the most recently created item wins.
    pub fn item_at(&self, p: Point) -> Option<ItemRef> {
        let mut best: Option<(f64, ItemRef)> = None;
        for connector in self.connectors.values() {
            let id = connector.id();
            let candidates: [(&dyn CanvasItem, ItemRef); 3] = [
                (connector, ItemRef::Connector(id)),
                (
                    connector.start_handle(),
                    ItemRef::Handle {
                        connector: id,
                        end: HandleEnd::Start,
                    },
                ),
                (
                    connector.end_handle(),
                    ItemRef::Handle {
                        connector: id,
                        end: HandleEnd::End,
                    },
                ),
            ];
            for (item, item_ref) in candidates {
                if !item.hit_test(p, self.pick_tolerance) {
                    continue;
                }
                let z = item.z_value();
                if best.is_none_or(|(best_z, _)| z >= best_z) {
                    best = Some((z, item_ref));
                }
            }
        }
        best.map(|(_, item_ref)| item_ref)
    }

    pub fn item(&self, item: ItemRef) -> Option<&dyn CanvasItem> {
        let connector = self.connectors.get(&item.connector_id())?;
        let item: &dyn CanvasItem = match item {
            ItemRef::Connector(_) => connector,
            ItemRef::Handle { end, .. } => connector.handle(end),
        };
        Some(item)
    }

    // Positions must not change through this; use `move_handle`.
    fn item_mut(&mut self, item: ItemRef) -> Option<&mut dyn CanvasItem> {
        let connector = self.connectors.get_mut(&item.connector_id())?;
        let item: &mut dyn CanvasItem = match item {
            ItemRef::Connector(_) => connector,
            ItemRef::Handle { end, .. } => connector.handle_mut(end),
        };
        Some(item)
    }

    /// The item currently under the pointer, if any.
    pub fn hovered(&self) -> Option<ItemRef> {
        self.hovered
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns whether anything visible changed since the last call, and
    /// clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
