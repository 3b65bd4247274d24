#![forbid(unsafe_code)]

//! Affine data↔pixel mapping.

/// A linear map from a data interval onto a pixel interval.
///
/// `d0` maps to `p0` and `d1` maps to `p1`. The pixel interval may be
/// descending (`p1 < p0`), which is how the Y axis is expressed: chart Y
/// grows upward while pixel rows grow downward, so the Y scale maps
/// `y_min ↦ y_hi` and `y_max ↦ y_lo` with a negative pixels-per-unit slope.
///
/// The slope is computed once at construction; a `LinearScale` is rebuilt
/// whenever the viewport or axis range changes, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f32,
    p0: f32,
    px_per_unit: f32,
}

impl LinearScale {
    /// Map the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
    ///
    /// The caller guarantees `d1 != d0`; chart configuration enforces this
    /// through [`AxisRange`](crate::AxisRange) validation before a scale is
    /// ever constructed.
    pub fn new(d0: f32, d1: f32, p0: f32, p1: f32) -> Self {
        Self {
            d0,
            p0,
            px_per_unit: (p1 - p0) / (d1 - d0),
        }
    }

    /// Transform a data value to an unrounded pixel coordinate.
    #[inline]
    pub fn to_px_f(&self, value: f32) -> f32 {
        (value - self.d0) * self.px_per_unit + self.p0
    }

    /// Transform a data value to the nearest pixel coordinate.
    #[inline]
    pub fn to_px(&self, value: f32) -> i32 {
        self.to_px_f(value).round() as i32
    }

    /// Inverse transform: the data value at a pixel coordinate.
    #[inline]
    pub fn from_px(&self, px: i32) -> f32 {
        (px as f32 - self.p0) / self.px_per_unit + self.d0
    }

    /// Signed pixels per data unit (negative for inverted axes).
    #[inline]
    pub const fn px_per_unit(&self) -> f32 {
        self.px_per_unit
    }
}
