//! Pointer event routing: hover, press, drag and release.

use super::{Canvas, DragState, DrawingMode, ItemRef};
use crate::handle::HandleEnd;
use crate::item::EventDisposition;
use moldraw_core::Point;

impl Canvas {
    /// Handles a pointer press at `p`.
    ///
    /// In [`DrawingMode::AddArrow`] a new connector is created at `p` and
    /// its end handle is grabbed. In [`DrawingMode::Select`] the topmost item
    /// under `p` receives the press; grabbing a handle starts a drag. Items
    /// that consume the press leave the selection untouched. A press on
    /// empty space clears the selection unless `multi` is set.
    ///
    /// Returns the item that received the press.
    pub fn pointer_press(&mut self, p: Point, multi: bool) -> Option<ItemRef> {
        match self.mode {
            DrawingMode::AddArrow => {
                let id = self.add_connector(p);
                self.drag = Some(DragState {
                    connector: id,
                    end: HandleEnd::End,
                    grab_offset: Point::default(),
                });
                tracing::debug!(id, at = %p, "Started new arrow");
                Some(ItemRef::Handle {
                    connector: id,
                    end: HandleEnd::End,
                })
            }
            DrawingMode::Select => {
                let Some(target) = self.item_at(p) else {
                    if !multi && !self.selection_manager.is_empty() {
                        self.selection_manager.deselect_all();
                        self.needs_redraw = true;
                    }
                    return None;
                };

                let disposition = self
                    .item_mut(target)
                    .map_or(EventDisposition::Ignored, |item| item.on_press(p));

                if let ItemRef::Handle { connector, end } = target {
                    if let Some(owner) = self.connectors.get(&connector) {
                        let grab_offset = owner.handle(end).position() - p;
                        self.drag = Some(DragState {
                            connector,
                            end,
                            grab_offset,
                        });
                        tracing::debug!(connector, ?end, "Started handle drag");
                    }
                }

                if disposition == EventDisposition::Ignored && !multi {
                    self.selection_manager.deselect_all();
                    self.needs_redraw = true;
                }
                Some(target)
            }
        }
    }

    /// Handles pointer motion. While dragging, the grabbed handle follows
    /// the pointer and its connector is recomputed; otherwise hover state
    /// is updated.
    pub fn pointer_move(&mut self, p: Point) {
        let Some(drag) = self.drag else {
            self.update_hover(p);
            return;
        };
        match self.connectors.get_mut(&drag.connector) {
            Some(connector) => {
                connector.move_handle(drag.end, p + drag.grab_offset);
                self.needs_redraw = true;
            }
            None => self.drag = None,
        }
    }

    /// Handles a pointer release. Ends any drag; never changes the
    /// selection.
    pub fn pointer_release(&mut self, p: Point) {
        let target = match self.drag.take() {
            Some(drag) => {
                tracing::debug!(connector = drag.connector, end = ?drag.end, "Finished handle drag");
                Some(ItemRef::Handle {
                    connector: drag.connector,
                    end: drag.end,
                })
            }
            None => self.item_at(p),
        };
        if let Some(item) = target.and_then(|target| self.item_mut(target)) {
            item.on_release(p);
        }
        self.update_hover(p);
    }

    /// The pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.set_hovered(None);
    }

    fn update_hover(&mut self, p: Point) {
        let target = self.item_at(p);
        self.set_hovered(target);
    }

    fn set_hovered(&mut self, target: Option<ItemRef>) {
        if self.hovered == target {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            if let Some(item) = self.item_mut(previous) {
                item.on_hover_leave();
            }
        }
        if let Some(current) = target {
            if let Some(item) = self.item_mut(current) {
                item.on_hover_enter();
            }
        }
        self.hovered = target;
        self.needs_redraw = true;
    }
}
