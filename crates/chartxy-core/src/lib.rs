#![forbid(unsafe_code)]

//! Coordinate-mapping core for chartxy.
//!
//! This crate holds the pure, surface-independent pieces of the chart:
//! the pixel [`Viewport`], data-space [`AxisRange`]s with index-based tick
//! generation, the [`LinearScale`] affine data↔pixel transform, and the
//! [`ChartError`] taxonomy. Nothing in here draws; drawing lives in
//! `chartxy-surface` and `chartxy`.

pub mod axis;
pub mod error;
pub mod geometry;
pub mod scale;

pub use axis::{AxisRange, Ticks};
pub use error::ChartError;
pub use geometry::Viewport;
pub use scale::LinearScale;
