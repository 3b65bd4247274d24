#![forbid(unsafe_code)]

//! chartxy public facade crate.
//!
//! Draws Cartesian XY plots (axes, ticks, labels, titles, legends, points,
//! lines, zero-reference lines) on a pixel display through the abstract
//! [`DrawSurface`] contract. The chart itself is pure bookkeeping: a pixel
//! viewport, two axis ranges, and the affine scales between them; every
//! visual is a handful of primitive calls into the surface.
//!
//! ```ignore
//! use chartxy::prelude::*;
//!
//! let mut chart = ChartXY::new(&mut display);
//! chart.set_viewport(25, 20, 315, 195)?;
//! chart.set_x_range(0.0, 100.0, 10.0)?;
//! chart.set_y_range(-40.0, 60.0, 20.0)?;
//! chart.draw_frame(&mut display, FrameParts::all(), TickLength::Px(4));
//! chart.draw_line(&mut display, 0.0, -12.0, 35.0, 22.5);
//! ```

pub mod chart;
mod label;
pub mod theme;

// --- Core re-exports -------------------------------------------------------

pub use chartxy_core::{AxisRange, ChartError, LinearScale, Ticks, Viewport};

// --- Surface re-exports ----------------------------------------------------

#[cfg(feature = "embedded-graphics")]
pub use chartxy_surface::EgSurface;
pub use chartxy_surface::{
    CHAR_CELL_HEIGHT, CHAR_CELL_WIDTH, DrawOp, DrawSurface, Orientation, OrientationGuard,
    RecordingSurface, Rgb565, TextStyle, text_height, text_width,
};

// --- Chart re-exports ------------------------------------------------------

pub use chart::{ChartXY, FrameParts, TickLength};
pub use theme::ChartTheme;

/// Standard result type for chartxy configuration calls.
pub type Result<T> = std::result::Result<T, ChartError>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AxisRange, ChartError, ChartTheme, ChartXY, DrawSurface, FrameParts, Orientation,
        Result, Rgb565, TextStyle, TickLength, Viewport,
    };
}

pub use chartxy_core as core;
pub use chartxy_surface as surface;
