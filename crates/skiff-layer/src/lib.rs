//! Layer tree and compositing for the Skiff rendering core.
//!
//! This crate owns everything between recorded display lists and the
//! embedder:
//!
//! - [`Layer`]: a retained display list with a dirty flag, one per repaint
//!   boundary, stored in the slab-backed [`LayerTree`] under a stable
//!   [`LayerId`](skiff_foundation::LayerId)
//! - [`CompositingCanvas`]: replays display lists onto a backend canvas,
//!   tracking translation and clip so nested platform views resolve to
//!   global coordinates
//! - [`GeometryCanvas`] over a [`ViewEmbedder`]: the draw-free pass that
//!   computes per-frame platform view geometry with z-ordered occlusion
//! - [`PlatformViewSink`]: the embedder-implemented receiver of per-view
//!   [`ViewGeometry`] snapshots
//!
//! # Architecture
//!
//! ```text
//!                   DisplayList (root boundary)
//!                     │ replay
//!        ┌────────────┴─────────────┐
//!        ▼                          ▼
//!  CompositingCanvas          GeometryCanvas
//!   │ forwards ops             │ ignores draws
//!   ▼                          ▼
//!  backend canvas             ViewEmbedder ──flush──► PlatformViewSink
//!  (GPU rasterizer)            (occlusion, clips)      (native views)
//! ```

mod compositing;
mod embedding;
mod error;
mod layer;
pub mod occlusion;
mod sink;
mod tracker;
mod tree;

pub use compositing::CompositingCanvas;
pub use embedding::{GeometryCanvas, ViewEmbedder};
pub use error::CompositeError;
pub use layer::Layer;
pub use sink::{PlatformViewSink, SinkError, ViewGeometry};
pub use tracker::TransformClipTracker;
pub use tree::LayerTree;
