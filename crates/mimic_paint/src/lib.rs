//! Mimic Paint API
//!
//! The drawing collaborator for the Mimic theme contract. Themes never touch a
//! graphics backend directly; they write through the [`Canvas`] trait.
//!
//! # Features
//!
//! - Packed 32-bit ARGB [`Color`] values with compositing helpers
//! - Integer geometry ([`Point`], [`Size`], [`Rect`]) in device pixels
//! - [`PaintContext`]: records paint commands for a renderer to replay
//! - [`Pixmap`]: CPU raster target with source-over blending
//! - Clipping on both canvases

pub mod canvas;
pub mod color;
pub mod context;
pub mod pixmap;
pub mod primitives;

pub use canvas::Canvas;
pub use color::{Color, ColorParseError};
pub use context::{PaintCommand, PaintContext};
pub use pixmap::Pixmap;
pub use primitives::*;
