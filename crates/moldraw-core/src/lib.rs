//! # MolDraw Core
//!
//! Core types shared by the MolDraw crates: scene-space geometry, colors,
//! the shared drawing context and the error types.

pub mod color;
pub mod drawing_info;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::Color;
pub use drawing_info::DrawingInfo;
pub use error::{DrawingError, Error, Result};
pub use geometry::{triangle_contains, LineSegment, Point};
pub use types::{shared, Shared};
