//! 2D geometry primitives.
//!
//! Everything here is `f64`, axis-aligned where rectangular, and immutable
//! in the sense that operations return new values rather than mutating.

mod offset;
mod path;
mod rect;
mod rrect;
mod size;

pub use offset::Offset;
pub use path::{Path, PathCommand};
pub use rect::Rect;
pub use rrect::{RRect, Radius};
pub use size::Size;
