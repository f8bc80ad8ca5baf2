//! Type aliases for commonly used shared-ownership types.
//!
//! Drawing state lives on a single thread (the one owning the drawing
//! surface), so sharing uses `Rc<RefCell<T>>` rather than thread-safe
//! wrappers.
//!
//! ```rust,ignore
//! use moldraw_core::types::*;
//!
//! let info: Shared<DrawingInfo> = shared(DrawingInfo::default());
//! info.borrow_mut().set_scale_factor(40.0)?;
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a new [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
