//! Painting payloads carried by drawing operations.
//!
//! These types are opaque to the rendering core: they ride through display
//! lists unchanged and are interpreted only by the drawing backend.

mod color;
mod paint;

pub use color::Color;
pub use paint::{Paint, PaintStyle};

use std::sync::Arc;

use crate::Size;

/// An immutable, already-shaped block of text.
///
/// Text shaping happens outside the core; the core only forwards the layout
/// to the backend at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    source: Arc<str>,
    size: Size,
}

impl TextLayout {
    /// Creates a text layout from its shaped source and measured size.
    pub fn new(source: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }

    /// Returns the source text.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the measured size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Handle to a backend-owned decoded image.
///
/// Image decoding happens outside the core; display lists carry only this
/// handle plus the logical size to draw at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(u64);

impl ImageHandle {
    /// Creates an image handle from a backend texture id.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the backend texture id.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }
}
