//! Render tree and frame pipeline for the Skiff rendering core.
//!
//! This crate drives the per-frame pipeline over the layout-object tree:
//!
//! 1. **Dirty collection** - repaint boundaries with dirty layers, in
//!    parent-before-child depth order
//! 2. **Recording** - deepest boundaries first, each producing a display
//!    list; nested boundaries are referenced by layer id, never inlined
//! 3. **Compositing** - the root display list replays onto the backend
//!    canvas, child references inlined under the live transform/clip
//! 4. **Geometry resolution** - the same op stream replays draw-free to
//!    place embedded platform views
//! 5. **Hit-test arbitration** - the embedder's synchronous predicate for
//!    routing native touches
//!
//! The [`RenderContext`] owns the frame lock shared between the framework
//! thread (which runs phases 1-4) and the embedder's input thread (which
//! only ever calls [`RenderContext::hit_test_platform_view`]).

mod context;
mod error;
mod hit_testing;
mod object;
pub mod objects;
mod parent_data;
mod pipeline;
mod tree;

pub use context::PaintContext;
pub use error::FrameError;
pub use hit_testing::{HitTarget, HitTestEntry, HitTestResult};
pub use object::RenderObject;
pub use parent_data::BoxParentData;
pub use pipeline::{FrameState, RasterOptions, RenderContext};
pub use tree::{RenderNode, RenderTree};
