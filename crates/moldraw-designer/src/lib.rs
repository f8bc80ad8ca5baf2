//! # MolDraw Designer
//!
//! Interactive connector (arrow) drawing for molecular diagrams,
//! independent of any GUI toolkit.
//!
//! ## Core Components
//!
//! - **EndpointHandle**: draggable anchor for one end of a connector
//! - **Connector**: directed line with an arrowhead between two handles;
//!   its geometry is recomputed from the handle positions and the shared
//!   scale factor
//! - **CanvasItem**: the capability interface (render, hit-test, hover,
//!   press/release) the canvas dispatches through
//! - **Canvas**: owns connectors, routes pointer input, runs handle drags
//!   and the add-arrow tool, keeps the selection set
//! - **Render surfaces**: display-list recorder, tiny-skia raster and SVG
//!
//! ## Architecture
//!
//! ```text
//! DrawingInfo (scale factor, shared)
//!   └── Canvas
//!         ├── Connector ── EndpointHandle x2
//!         ├── SelectionManager
//!         └── render ──> RenderSurface (Recording | Pixmap | Svg)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use moldraw_core::{shared, DrawingInfo, Point};
//! use moldraw_designer::{Canvas, DrawingMode, RecordingSurface};
//!
//! let info = shared(DrawingInfo::with_scale_factor(10.0).unwrap());
//! let mut canvas = Canvas::new(info);
//!
//! canvas.set_mode(DrawingMode::AddArrow);
//! canvas.pointer_press(Point::new(0.0, 0.0), false);
//! canvas.pointer_move(Point::new(10.0, 0.0));
//! canvas.pointer_release(Point::new(10.0, 0.0));
//! canvas.pointer_leave();
//!
//! let mut surface = RecordingSurface::new();
//! canvas.render(&mut surface);
//! assert_eq!(surface.len(), 3);
//! ```

pub mod canvas;
pub mod connector;
pub mod handle;
pub mod item;
pub mod renderer;
pub mod selection_manager;
pub mod surface;
pub mod svg_renderer;

pub use canvas::{Canvas, DragState, DrawingMode, ItemRef, DEFAULT_PICK_TOLERANCE};
pub use connector::{Connector, ConnectorGeometry};
pub use handle::{EndpointHandle, HandleEnd, HANDLE_SIZE};
pub use item::{CanvasItem, EventDisposition};
pub use renderer::{render_canvas, write_png, PixmapSurface};
pub use selection_manager::SelectionManager;
pub use surface::{DrawCommand, RecordingSurface, RenderSurface};
pub use svg_renderer::{render_canvas_svg, SvgSurface};
