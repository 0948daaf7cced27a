//! Foundation types for the Skiff rendering core.
//!
//! This crate provides the small, dependency-free substrate the rest of the
//! workspace builds on:
//!
//! - Type-safe ids for the render and layer arenas ([`RenderId`], [`LayerId`])
//! - The embedder-facing platform view id ([`PlatformViewId`])
//! - The base error type ([`FoundationError`])
//!
//! # Architecture
//!
//! ```text
//! skiff-foundation (ids, errors)
//!     │
//!     ├── skiff-types      (geometry)
//!     ├── skiff-painting   (display lists reference LayerId)
//!     ├── skiff-layer      (layer arena keyed by LayerId)
//!     └── skiff-rendering  (render arena keyed by RenderId)
//! ```

mod error;
mod id;

pub use error::{FoundationError, Result};
pub use id::{LayerId, PlatformViewId, RenderId};
