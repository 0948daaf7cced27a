//! Frame pipeline errors.

use thiserror::Error;

use skiff_foundation::RenderId;
use skiff_layer::CompositeError;
use skiff_painting::RecordError;

/// Frame-fatal failures of the per-frame pipeline.
///
/// A frame error abandons the remainder of the current frame; the next
/// frame restarts from a clean geometry pass and whatever dirty set layout
/// reports. Errors never cross to the embedder's input thread.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// No root render object is attached to the context.
    #[error("no root render object is attached")]
    NoRoot,

    /// A referenced render object does not resolve in the tree.
    #[error("render object {0} is not present in the render tree")]
    NodeMissing(RenderId),

    /// Recording was requested for a node that owns no layer.
    #[error("render object {0} is not a repaint boundary")]
    NotABoundary(RenderId),

    /// The root boundary never created its layer.
    #[error("root boundary {0} has no layer")]
    RootLayerMissing(RenderId),

    /// A recording finished with defective save/restore pairing.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Compositing hit a root-level invariant violation.
    #[error(transparent)]
    Composite(#[from] CompositeError),

    /// A paint procedure panicked; the panic was contained at the frame
    /// boundary and the rest of the frame abandoned.
    #[error("paint panicked: {message}")]
    PaintPanicked {
        /// The panic payload, stringified.
        message: String,
    },
}
