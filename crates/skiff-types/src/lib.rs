//! Core types for the Skiff rendering core.
//!
//! This crate defines the geometry primitives every other crate speaks
//! (`Offset`, `Size`, `Rect`, `RRect`, `Path`) and the painting payloads the
//! core carries but never interprets (`Color`, `Paint`, `TextLayout`,
//! `ImageHandle`).
//!
//! All scalar geometry is `f64` in logical pixels. Conversion from device
//! pixels happens at the embedder boundary using the current device scale.

pub mod geometry;
pub mod painting;

pub use geometry::{Offset, Path, PathCommand, RRect, Radius, Rect, Size};
pub use painting::{Color, ImageHandle, Paint, PaintStyle, TextLayout};
