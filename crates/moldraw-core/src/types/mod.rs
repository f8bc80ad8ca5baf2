//! Type aliases shared across crates.

mod aliases;

pub use aliases::*;
