#![forbid(unsafe_code)]

//! The drawing-surface capability contract.

use std::ops::{Deref, DerefMut};

use crate::color::Rgb565;
use crate::text::TextStyle;

/// Display orientation, following the rotation indices TFT controllers use
/// (0 = native portrait, each step is a 90° turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Rotation 0: native portrait.
    Portrait,
    /// Rotation 1: 90°, long side horizontal.
    Landscape,
    /// Rotation 2: 180°.
    PortraitFlipped,
    /// Rotation 3: 270°, the other landscape.
    LandscapeFlipped,
}

impl Orientation {
    /// The controller rotation index (0–3).
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Self::Portrait => 0,
            Self::Landscape => 1,
            Self::PortraitFlipped => 2,
            Self::LandscapeFlipped => 3,
        }
    }

    /// Convert a rotation index back, `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Portrait),
            1 => Some(Self::Landscape),
            2 => Some(Self::PortraitFlipped),
            3 => Some(Self::LandscapeFlipped),
            _ => None,
        }
    }

    /// The orientation turned by 180°.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Portrait => Self::PortraitFlipped,
            Self::Landscape => Self::LandscapeFlipped,
            Self::PortraitFlipped => Self::Portrait,
            Self::LandscapeFlipped => Self::Landscape,
        }
    }

    /// Whether the long side is horizontal.
    #[inline]
    pub const fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape | Self::LandscapeFlipped)
    }
}

/// The primitive drawing operations a chart needs from a display.
///
/// Coordinates are `i32`: data points outside the configured axis range map
/// to pixels outside the viewport, and implementations clip rather than
/// wrap. Colors are packed [`Rgb565`]. Text is drawn with its top-left
/// corner at `(x, y)` using the per-call [`TextStyle`]; there is no cursor
/// or pen state in the contract.
///
/// All operations are infallible; a surface that can fail mid-draw (a bus
/// error, say) handles or stores that itself.
pub trait DrawSurface {
    /// Width in pixels under the current orientation.
    fn width(&self) -> u16;

    /// Height in pixels under the current orientation.
    fn height(&self) -> u16;

    /// Current orientation.
    fn orientation(&self) -> Orientation;

    /// Rotate the display. Swaps the reported width/height when switching
    /// between portrait and landscape.
    fn set_orientation(&mut self, orientation: Orientation);

    /// Fill a `w` × `h` rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb565);

    /// Fill a disk of the given radius centered on `(cx, cy)`.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb565);

    /// Draw a straight segment between two points.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565);

    /// Draw a horizontal run of `len` pixels starting at `(x, y)`.
    fn draw_hline(&mut self, x: i32, y: i32, len: u32, color: Rgb565);

    /// Draw a vertical run of `len` pixels starting at `(x, y)`.
    fn draw_vline(&mut self, x: i32, y: i32, len: u32, color: Rgb565);

    /// Render text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle);
}

/// Scoped temporary orientation.
///
/// Switches the surface to the requested orientation on construction and
/// restores the previous one when dropped, so the display can't be left
/// rotated by an early return or a panic mid-draw. Derefs to the surface,
/// so drawing happens through the guard.
pub struct OrientationGuard<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    prev: Orientation,
}

impl<'a, S: DrawSurface + ?Sized> OrientationGuard<'a, S> {
    /// Switch to `orientation`, restoring the current one on drop.
    pub fn new(surface: &'a mut S, orientation: Orientation) -> Self {
        let prev = surface.orientation();
        surface.set_orientation(orientation);
        #[cfg(feature = "tracing")]
        tracing::trace!(from = prev.index(), to = orientation.index(), "orientation switched");
        Self { surface, prev }
    }

    /// Switch to the 180°-turned orientation, restoring on drop.
    pub fn flipped(surface: &'a mut S) -> Self {
        let target = surface.orientation().flipped();
        Self::new(surface, target)
    }
}

impl<S: DrawSurface + ?Sized> Deref for OrientationGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> DerefMut for OrientationGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawSurface + ?Sized> Drop for OrientationGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_orientation(self.prev);
        #[cfg(feature = "tracing")]
        tracing::trace!(to = self.prev.index(), "orientation restored");
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;

    #[test]
    fn index_round_trips() {
        for idx in 0..4u8 {
            let o = Orientation::from_index(idx).unwrap();
            assert_eq!(o.index(), idx);
        }
        assert_eq!(Orientation::from_index(4), None);
    }

    #[test]
    fn flipped_is_an_involution() {
        for idx in 0..4u8 {
            let o = Orientation::from_index(idx).unwrap();
            assert_eq!(o.flipped().flipped(), o);
            assert_ne!(o.flipped(), o);
        }
    }

    #[test]
    fn flipped_preserves_aspect() {
        assert_eq!(Orientation::Landscape.flipped(), Orientation::LandscapeFlipped);
        assert_eq!(Orientation::Portrait.flipped(), Orientation::PortraitFlipped);
        assert!(Orientation::LandscapeFlipped.is_landscape());
        assert!(!Orientation::PortraitFlipped.is_landscape());
    }
}
