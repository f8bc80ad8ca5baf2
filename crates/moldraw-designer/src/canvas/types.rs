//! Canvas type definitions: DrawingMode, ItemRef, DragState.

use crate::handle::HandleEnd;
use moldraw_core::Point;

/// Pointer tools of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    /// Pointer presses grab existing handles.
    #[default]
    Select,
    /// A press starts a new connector and drags its end handle.
    AddArrow,
}

/// Addresses an item the canvas can route input to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Connector(u64),
    Handle { connector: u64, end: HandleEnd },
}

impl ItemRef {
    /// Id of the connector the item belongs to.
    pub fn connector_id(&self) -> u64 {
        match *self {
            ItemRef::Connector(id) => id,
            ItemRef::Handle { connector, .. } => connector,
        }
    }
}

/// An in-progress handle drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub connector: u64,
    pub end: HandleEnd,
    /// Handle position minus the grab point, so the handle does not jump
    /// to the pointer when grabbed off-centre.
    pub grab_offset: Point,
}
