//! Concrete render objects.
//!
//! The small library of behaviors the core ships: enough to express
//! clipped, stacked, and scrolled scenes with embedded platform views,
//! pointer-handling regions, and occluding overlays. Everything else is
//! expected to come from the framework layers above.

mod clip_rect;
mod colored_box;
mod occlusion_hint;
mod platform_view;
mod pointer_listener;
mod repaint_boundary;
mod stack;

pub use clip_rect::RenderClipRect;
pub use colored_box::RenderColoredBox;
pub use occlusion_hint::RenderOcclusionHint;
pub use platform_view::RenderPlatformView;
pub use pointer_listener::RenderPointerListener;
pub use repaint_boundary::RenderRepaintBoundary;
pub use stack::RenderStack;
