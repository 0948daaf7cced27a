//! Compositing errors.

use thiserror::Error;

use skiff_foundation::LayerId;

/// Frame-fatal compositing failures.
///
/// Only root-level invariant violations are errors; an absent *child* layer
/// reference is silently skipped so the rest of the frame still composites.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeError {
    /// The root layer id does not resolve in the layer tree.
    #[error("root layer {0} is not present in the layer tree")]
    RootLayerMissing(LayerId),

    /// The root layer exists but was never recorded.
    #[error("root layer {0} has no recorded content")]
    RootContentMissing(LayerId),
}
