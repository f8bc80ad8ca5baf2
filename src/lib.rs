//! # MolDraw
//!
//! Arrow connectors for a 2D molecule editor: directed line segments with a
//! filled triangular arrowhead and draggable endpoint handles.
//!
//! ## Architecture
//!
//! MolDraw is organized as a workspace with multiple crates:
//!
//! 1. **moldraw-core** - Geometry primitives, colors, the shared drawing context, errors
//! 2. **moldraw-designer** - Connectors, endpoint handles, canvas interaction, rendering
//! 3. **moldraw-settings** - JSON/TOML configuration
//! 4. **moldraw** - Headless binary that renders arrows to PNG or SVG

pub mod cli;

pub use moldraw_core::{
    shared, Color, DrawingError, DrawingInfo, Error, LineSegment, Point, Result, Shared,
};

pub use moldraw_designer::{
    render_canvas, render_canvas_svg, write_png, Canvas, CanvasItem, Connector,
    ConnectorGeometry, DrawingMode, EndpointHandle, HandleEnd, ItemRef, RenderSurface,
};

pub use moldraw_settings::{Config, OutputFormat, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so rendered output piped through stdout stays clean.
/// Honours `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
