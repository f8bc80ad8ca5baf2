//! MolDraw Settings Crate
//!
//! Handles application configuration: loading, validation and saving of
//! drawing, rendering and interaction settings.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, InteractionSettings, OutputFormat, RenderSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
