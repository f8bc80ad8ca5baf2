//! Error handling for MolDraw
//!
//! The connector geometry itself is infallible. Errors only arise at the
//! edges: configuring the drawing context, addressing items that no longer
//! exist, and allocating render targets.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing error type
///
/// Represents errors raised by the drawing context and the canvas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawingError {
    /// Scale factor must be a positive, finite number
    #[error("Invalid scale factor {value}: must be positive and finite")]
    InvalidScaleFactor {
        /// The rejected scale factor.
        value: f64,
    },

    /// Scene dimensions or zoom must be positive, finite numbers
    #[error("Invalid scene size {width}x{height} at zoom {zoom}")]
    InvalidSceneSize {
        /// The rejected scene width.
        width: f64,
        /// The rejected scene height.
        height: f64,
        /// The rejected zoom level.
        zoom: f64,
    },

    /// No connector with the given id exists on the canvas
    #[error("Unknown connector {id}")]
    UnknownConnector {
        /// The id that was looked up.
        id: u64,
    },

    /// A render target could not be created or written
    #[error("Render error: {reason}")]
    Render {
        /// The reason rendering failed.
        reason: String,
    },
}

/// Main error type for MolDraw
///
/// Wraps drawing errors together with the I/O failures of writing output.
#[derive(Error, Debug)]
pub enum Error {
    /// Drawing error
    #[error(transparent)]
    Drawing(#[from] DrawingError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
