//! Platform view sink - the embedder-facing geometry contract.

use thiserror::Error;

use skiff_foundation::PlatformViewId;
use skiff_types::{Offset, Path, Rect, Size};

/// An I/O-style failure reported by the embedder's sink.
///
/// Sink failures never abort a flush; the core logs them and continues with
/// the next view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The platform channel rejected or dropped the update.
    #[error("platform sink failure: {message}")]
    Io {
        /// Embedder-supplied failure description.
        message: String,
    },
}

impl SinkError {
    /// Creates an I/O-style sink error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// The per-frame geometry snapshot for one embedded platform view.
///
/// Both clipping strategies are always supplied and the embedder picks the
/// one its platform supports:
///
/// - `clip_bounds` is the collapsed single-rect clip; `Some(EMPTY)` means
///   hide the view entirely (the rect-subtraction fallback used where only
///   rectangular clips exist).
/// - `visible_rect` plus `occlusion_paths` enable precise mask-based
///   cut-outs where shaped masks exist.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGeometry {
    /// The embedder's view id.
    pub view_id: PlatformViewId,

    /// Global position of the view's top-left corner, logical pixels.
    pub offset: Offset,

    /// Logical size of the view.
    pub size: Size,

    /// Collapsed clip in global coordinates. `None` when no clip was active
    /// on the fast path; `Some(EMPTY)` hides the view.
    pub clip_bounds: Option<Rect>,

    /// View bounds intersected with the accumulated parent clip, before
    /// occlusion.
    pub visible_rect: Rect,

    /// Merged, capped shapes of framework content covering this view.
    pub occlusion_paths: Vec<Path>,
}

impl ViewGeometry {
    /// Returns true if any part of the view survives the parent clip.
    ///
    /// Occlusion does not factor in here; a fully occluded view is reported
    /// hidden through `clip_bounds` instead.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.visible_rect.is_empty()
    }
}

/// Receiver for per-frame platform view geometry.
///
/// Implemented by the embedder; called once per embedded view per frame, in
/// the order views were embedded during replay. The implementation
/// translates each snapshot into native view positioning.
pub trait PlatformViewSink {
    /// Delivers one view's geometry for this frame.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the platform channel fails; the core logs
    /// the failure and continues with the next view.
    fn update_view_geometry(&mut self, geometry: ViewGeometry) -> Result<(), SinkError>;
}
