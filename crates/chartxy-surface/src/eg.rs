#![forbid(unsafe_code)]

//! [`DrawSurface`] adapter for the embedded-graphics ecosystem.
//!
//! [`EgSurface`] wraps any `DrawTarget<Color = Rgb565>` (an ILI9341/ST7789
//! driver, a framebuffer, a simulator) and maps the chart's primitive calls
//! onto embedded-graphics styled primitives.
//!
//! The wrapped target's own coordinate system is treated as rotation 0
//! (portrait); other orientations are applied by transforming coordinates,
//! since `DrawTarget` has no rotation concept. Glyphs themselves are not
//! rotated: in a non-native orientation, text renders upright at the
//! transformed anchor. Targets whose driver applies rotation in hardware
//! should be left in [`Orientation::Portrait`] here.

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::color::Rgb565;
use crate::surface::{DrawSurface, Orientation};
use crate::text::TextStyle;

/// Wraps an embedded-graphics draw target as a chart [`DrawSurface`].
///
/// The `DrawSurface` contract is infallible, but a concrete target may fail
/// mid-draw (an SPI error, say). The first such error is retained and can be
/// collected with [`take_error`](Self::take_error) after a drawing pass.
pub struct EgSurface<D: DrawTarget<Color = EgRgb565>> {
    target: D,
    orientation: Orientation,
    error: Option<D::Error>,
}

impl<D: DrawTarget<Color = EgRgb565>> EgSurface<D> {
    /// Wrap a target, starting in its native (portrait) orientation.
    pub fn new(target: D) -> Self {
        Self {
            target,
            orientation: Orientation::Portrait,
            error: None,
        }
    }

    /// Borrow the wrapped target.
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Unwrap the target.
    pub fn into_inner(self) -> D {
        self.target
    }

    /// The first draw error since the last call, if any.
    pub fn take_error(&mut self) -> Option<D::Error> {
        self.error.take()
    }

    fn keep<T>(&mut self, result: Result<T, D::Error>) {
        if let Err(err) = result
            && self.error.is_none()
        {
            self.error = Some(err);
        }
    }

    fn native_size(&self) -> (i32, i32) {
        let size = self.target.bounding_box().size;
        (size.width as i32, size.height as i32)
    }

    /// Map a logical point into the target's native frame.
    fn map_point(&self, x: i32, y: i32) -> Point {
        let (w, h) = self.native_size();
        match self.orientation {
            Orientation::Portrait => Point::new(x, y),
            Orientation::Landscape => Point::new(y, h - 1 - x),
            Orientation::PortraitFlipped => Point::new(w - 1 - x, h - 1 - y),
            Orientation::LandscapeFlipped => Point::new(w - 1 - y, x),
        }
    }

    /// Map a logical rectangle (inclusive corners) into a native rectangle.
    fn map_rect(&self, x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        let a = self.map_point(x, y);
        let b = self.map_point(x + w as i32 - 1, y + h as i32 - 1);
        let top_left = Point::new(a.x.min(b.x), a.y.min(b.y));
        let size = Size::new((a.x - b.x).unsigned_abs() + 1, (a.y - b.y).unsigned_abs() + 1);
        Rectangle::new(top_left, size)
    }

    fn font_for(size: u16) -> &'static MonoFont<'static> {
        if size <= 1 { &FONT_6X10 } else { &FONT_10X20 }
    }
}

fn convert(color: Rgb565) -> EgRgb565 {
    EgRgb565::from(RawU16::new(color.raw()))
}

impl<D: DrawTarget<Color = EgRgb565>> DrawSurface for EgSurface<D> {
    fn width(&self) -> u16 {
        let (w, h) = self.native_size();
        if self.orientation.is_landscape() { h as u16 } else { w as u16 }
    }

    fn height(&self) -> u16 {
        let (w, h) = self.native_size();
        if self.orientation.is_landscape() { w as u16 } else { h as u16 }
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb565) {
        if w == 0 || h == 0 {
            return;
        }
        let rect = self.map_rect(x, y, w, h);
        let result = rect
            .into_styled(PrimitiveStyle::with_fill(convert(color)))
            .draw(&mut self.target);
        self.keep(result);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb565) {
        let center = self.map_point(cx, cy);
        let result = Circle::with_center(center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(convert(color)))
            .draw(&mut self.target);
        self.keep(result);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565) {
        let result = Line::new(self.map_point(x0, y0), self.map_point(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(convert(color), 1))
            .draw(&mut self.target);
        self.keep(result);
    }

    fn draw_hline(&mut self, x: i32, y: i32, len: u32, color: Rgb565) {
        if len == 0 {
            return;
        }
        self.draw_line(x, y, x + len as i32 - 1, y, color);
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: u32, color: Rgb565) {
        if len == 0 {
            return;
        }
        self.draw_line(x, y, x, y + len as i32 - 1, color);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        let character_style = MonoTextStyleBuilder::new()
            .font(Self::font_for(style.size))
            .text_color(convert(style.fg))
            .background_color(convert(style.bg))
            .build();
        let anchor = self.map_point(x, y);
        let result =
            Text::with_baseline(text, anchor, character_style, Baseline::Top).draw(&mut self.target);
        self.keep(result.map(|_| ()));
    }
}

#[cfg(test)]
mod tests {
    use super::EgSurface;
    use crate::color::Rgb565;
    use crate::surface::{DrawSurface, Orientation};
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
    use embedded_graphics::prelude::*;

    fn surface() -> EgSurface<MockDisplay<EgRgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        EgSurface::new(display)
    }

    #[test]
    fn hline_paints_native_pixels_in_portrait() {
        let mut s = surface();
        s.draw_hline(0, 0, 3, Rgb565::RED);
        let display = s.into_inner();
        for x in 0..3 {
            assert_eq!(display.get_pixel(Point::new(x, 0)), Some(EgRgb565::RED));
        }
        assert_eq!(display.get_pixel(Point::new(3, 0)), None);
    }

    #[test]
    fn landscape_maps_onto_rotated_frame() {
        // MockDisplay is 64×64; in Landscape the logical origin lands on the
        // native bottom-left corner.
        let mut s = surface();
        s.set_orientation(Orientation::Landscape);
        s.draw_hline(0, 0, 1, Rgb565::BLUE);
        let display = s.into_inner();
        assert_eq!(display.get_pixel(Point::new(0, 63)), Some(EgRgb565::BLUE));
    }

    #[test]
    fn fill_rect_normalizes_flipped_corners() {
        let mut s = surface();
        s.set_orientation(Orientation::LandscapeFlipped);
        s.fill_rect(0, 0, 2, 1, Rgb565::GREEN);
        let display = s.into_inner();
        assert_eq!(display.get_pixel(Point::new(63, 0)), Some(EgRgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(63, 1)), Some(EgRgb565::GREEN));
    }

    #[test]
    fn dimensions_swap_in_landscape() {
        let mut s = surface();
        assert_eq!((s.width(), s.height()), (64, 64));
        s.set_orientation(Orientation::Landscape);
        assert_eq!((s.width(), s.height()), (64, 64));
    }
}
