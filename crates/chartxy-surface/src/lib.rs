#![forbid(unsafe_code)]

//! Drawing-surface contract for chartxy.
//!
//! The chart core never touches a concrete display driver; it draws through
//! the [`DrawSurface`] capability trait defined here. This crate also holds
//! the RGB565 color type, text styling and metrics for the classic 6×8 TFT
//! font cell, a [`RecordingSurface`] for headless tests, and (behind the
//! `embedded-graphics` feature) an adapter onto any embedded-graphics
//! `DrawTarget`.

pub mod color;
#[cfg(feature = "embedded-graphics")]
pub mod eg;
pub mod recording;
pub mod surface;
pub mod text;

pub use color::Rgb565;
#[cfg(feature = "embedded-graphics")]
pub use eg::EgSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{DrawSurface, Orientation, OrientationGuard};
pub use text::{CHAR_CELL_HEIGHT, CHAR_CELL_WIDTH, TextStyle, text_height, text_width};
