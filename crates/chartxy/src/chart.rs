#![forbid(unsafe_code)]

//! The chart object and its drawing operations.

use chartxy_core::{AxisRange, ChartError, LinearScale, Viewport};
use chartxy_surface::{
    DrawSurface, Orientation, OrientationGuard, Rgb565, TextStyle, text_height, text_width,
};

use crate::label::{label_width, tick_label};
use crate::theme::ChartTheme;

/// Default viewport margins: room for Y labels on the left, the title band
/// on top, and X labels plus the X title below.
const MARGIN_LEFT: u16 = 25;
const MARGIN_TOP: u16 = 20;
const MARGIN_RIGHT: u16 = 5;
const MARGIN_BOTTOM: u16 = 25;

/// Height of the title band above the viewport, matching size-2 text.
const TITLE_BAND_HEIGHT: u32 = 16;

const TITLE_TEXT_SIZE: u16 = 2;
const AXIS_TEXT_SIZE: u16 = 1;

/// Vertical gap between the viewport's bottom edge and X labels.
const X_LABEL_GAP: i32 = 3;
/// Horizontal gap between Y labels and the viewport's left edge.
const Y_LABEL_PAD: i32 = 2;
/// Y labels sit this many pixels above their tick row.
const Y_LABEL_NUDGE: i32 = 3;

/// X labels this close to the top of the range are dropped so they don't
/// collide with the chart's right edge.
const LABEL_SKIP_FRACTION: f32 = 0.05;

/// Length of axis tick marks, in pixels into the chart region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLength {
    /// Ticks span the full perpendicular extent of the viewport (gridlines).
    Full,
    /// Ticks of a fixed pixel length, clamped to the viewport.
    Px(u16),
}

bitflags::bitflags! {
    /// Selects what [`ChartXY::draw_frame`] renders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameParts: u8 {
        /// Fill the chart region with the background color first.
        const BACKGROUND = 1 << 0;
        /// X axis line and tick marks.
        const X_AXIS     = 1 << 1;
        /// Y axis line and tick marks.
        const Y_AXIS     = 1 << 2;
        /// X tick-value labels.
        const X_LABELS   = 1 << 3;
        /// Y tick-value labels.
        const Y_LABELS   = 1 << 4;
        /// Zero-reference lines, where zero is in range.
        const ZERO_LINES = 1 << 5;
    }
}

/// A Cartesian XY chart bound to one display.
///
/// The chart owns no surface; every drawing operation borrows one, the same
/// way widgets borrow a buffer per render. Configuration (viewport, axis
/// ranges) is validated up front and the data→pixel scale factors are
/// rebuilt on every successful change, so a transform can never observe a
/// stale scale.
///
/// # Example
///
/// ```ignore
/// let mut chart = ChartXY::new(&mut display);
/// chart.set_viewport(25, 20, 315, 195)?;
/// chart.set_x_range(0.0, 100.0, 10.0)?;
/// chart.set_y_range(-40.0, 60.0, 20.0)?;
/// chart.draw_frame(&mut display, FrameParts::all(), TickLength::Px(4));
/// chart.draw_point(&mut display, 42.0, 17.5, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChartXY {
    res_x: u16,
    res_y: u16,
    viewport: Viewport,
    x_range: AxisRange,
    y_range: AxisRange,
    x_scale: LinearScale,
    y_scale: LinearScale,
    /// Drawing colors, each independently settable.
    pub theme: ChartTheme,
}

impl ChartXY {
    /// Bind a chart to a display.
    ///
    /// Forces the display into landscape (rotation 3, the classic ILI9341
    /// wiring), captures its resolution, and starts with a default viewport
    /// inset by small margins and both axes at `[0, 100]` step `10`. On a
    /// display too small for the default margins the viewport falls back to
    /// the full screen.
    pub fn new<S: DrawSurface + ?Sized>(surface: &mut S) -> Self {
        surface.set_orientation(Orientation::LandscapeFlipped);
        let res_x = surface.width();
        let res_y = surface.height();

        let viewport = Viewport::new(
            MARGIN_LEFT,
            MARGIN_TOP,
            res_x.saturating_sub(MARGIN_RIGHT),
            res_y.saturating_sub(MARGIN_BOTTOM),
        )
        .unwrap_or_else(|_| Viewport::full(res_x, res_y));

        let x_range = AxisRange::default();
        let y_range = AxisRange::default();
        let (x_scale, y_scale) = Self::scales(&viewport, &x_range, &y_range);

        Self {
            res_x,
            res_y,
            viewport,
            x_range,
            y_range,
            x_scale,
            y_scale,
            theme: ChartTheme::default(),
        }
    }

    fn scales(
        viewport: &Viewport,
        x_range: &AxisRange,
        y_range: &AxisRange,
    ) -> (LinearScale, LinearScale) {
        let x_scale = LinearScale::new(
            x_range.min(),
            x_range.max(),
            f32::from(viewport.x_lo()),
            f32::from(viewport.x_hi()),
        );
        // Pixel rows grow downward: y_min maps to the bottom edge.
        let y_scale = LinearScale::new(
            y_range.min(),
            y_range.max(),
            f32::from(viewport.y_hi()),
            f32::from(viewport.y_lo()),
        );
        (x_scale, y_scale)
    }

    // --- Configuration -----------------------------------------------------

    /// Set the pixel rectangle the chart renders into, top-left to
    /// bottom-right corner, and rebuild both scale factors.
    ///
    /// Fails with [`ChartError::InvalidViewport`] when the corners are
    /// unordered or the rectangle leaves the display; the previous viewport
    /// and scales stay in effect.
    pub fn set_viewport(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), ChartError> {
        let viewport = Viewport::new(x0, y0, x1, y1)?;
        if !viewport.fits_display(self.res_x, self.res_y) {
            return Err(ChartError::InvalidViewport { x0, y0, x1, y1 });
        }
        self.viewport = viewport;
        (self.x_scale, self.y_scale) = Self::scales(&self.viewport, &self.x_range, &self.y_range);
        #[cfg(feature = "tracing")]
        tracing::debug!(x0, y0, x1, y1, "chart viewport reconfigured");
        Ok(())
    }

    /// Set the X axis data range and tick increment, and rebuild the scales.
    pub fn set_x_range(&mut self, min: f32, max: f32, step: f32) -> Result<(), ChartError> {
        self.x_range = AxisRange::new(min, max, step)?;
        (self.x_scale, self.y_scale) = Self::scales(&self.viewport, &self.x_range, &self.y_range);
        #[cfg(feature = "tracing")]
        tracing::debug!(min, max, step, "x range reconfigured");
        Ok(())
    }

    /// Set the Y axis data range and tick increment, and rebuild the scales.
    pub fn set_y_range(&mut self, min: f32, max: f32, step: f32) -> Result<(), ChartError> {
        self.y_range = AxisRange::new(min, max, step)?;
        (self.x_scale, self.y_scale) = Self::scales(&self.viewport, &self.x_range, &self.y_range);
        #[cfg(feature = "tracing")]
        tracing::debug!(min, max, step, "y range reconfigured");
        Ok(())
    }

    /// The display resolution captured at construction.
    pub const fn resolution(&self) -> (u16, u16) {
        (self.res_x, self.res_y)
    }

    /// The current pixel viewport.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The current X axis range.
    pub const fn x_range(&self) -> AxisRange {
        self.x_range
    }

    /// The current Y axis range.
    pub const fn y_range(&self) -> AxisRange {
        self.y_range
    }

    // --- Transforms --------------------------------------------------------

    /// Chart X value → display pixel column.
    #[inline]
    pub fn x_to_px(&self, x: f32) -> i32 {
        self.x_scale.to_px(x)
    }

    /// Chart Y value → display pixel row (inverted: larger Y is higher on
    /// screen, so a smaller row number).
    #[inline]
    pub fn y_to_px(&self, y: f32) -> i32 {
        self.y_scale.to_px(y)
    }

    /// Display pixel column → chart X value.
    #[inline]
    pub fn px_to_x(&self, px: i32) -> f32 {
        self.x_scale.from_px(px)
    }

    /// Display pixel row → chart Y value.
    #[inline]
    pub fn px_to_y(&self, px: i32) -> f32 {
        self.y_scale.from_px(px)
    }

    // --- Region and titles -------------------------------------------------

    /// Fill the chart region (corners inclusive) with the background color.
    pub fn clear_region<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let vp = &self.viewport;
        surface.fill_rect(
            i32::from(vp.x_lo()),
            i32::from(vp.y_lo()),
            u32::from(vp.span_x()) + 1,
            u32::from(vp.span_y()) + 1,
            self.theme.chart_bg,
        );
    }

    /// Draw the chart title, centered over the viewport in the band above it.
    pub fn draw_title<S: DrawSurface + ?Sized>(&self, surface: &mut S, title: &str) {
        let vp = &self.viewport;
        surface.fill_rect(
            i32::from(vp.x_lo()),
            0,
            u32::from(vp.span_x()),
            TITLE_BAND_HEIGHT,
            self.theme.screen_bg,
        );
        let width = text_width(title, TITLE_TEXT_SIZE);
        let x = i32::from(vp.x_lo()) + (i32::from(vp.span_x()) - width as i32).max(0) / 2;
        surface.draw_text(
            x,
            0,
            title,
            TextStyle::new(TITLE_TEXT_SIZE, self.theme.title, self.theme.screen_bg),
        );
    }

    /// Draw the X axis title, centered under the viewport at the bottom of
    /// the display.
    pub fn draw_x_title<S: DrawSurface + ?Sized>(&self, surface: &mut S, title: &str) {
        let vp = &self.viewport;
        let width = text_width(title, AXIS_TEXT_SIZE);
        let x = i32::from(vp.x_lo()) + (i32::from(vp.span_x()) - width as i32).max(0) / 2;
        let y = (i32::from(self.res_y) - text_height(AXIS_TEXT_SIZE) as i32).max(0);
        surface.draw_text(
            x,
            y,
            title,
            TextStyle::new(AXIS_TEXT_SIZE, self.theme.x_title, self.theme.screen_bg),
        );
    }

    /// Draw the Y axis title.
    ///
    /// The display is flipped 180° for the duration of the call and restored
    /// before returning, even on unwind; the guard owns the restore.
    pub fn draw_y_title<S: DrawSurface + ?Sized>(&self, surface: &mut S, title: &str) {
        let width = text_width(title, AXIS_TEXT_SIZE);
        let x = (i32::from(self.viewport.span_y()) - width as i32).max(0) / 2;
        let style = TextStyle::new(AXIS_TEXT_SIZE, self.theme.y_title, self.theme.screen_bg);
        let mut flipped = OrientationGuard::flipped(surface);
        flipped.draw_text(x, 0, title, style);
    }

    /// Draw arbitrary legend text at a pixel position with the given size
    /// and color, backed by the chart background.
    pub fn draw_legend<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        x: i32,
        y: i32,
        size: u16,
        color: Rgb565,
    ) {
        surface.draw_text(x, y, text, TextStyle::new(size, color, self.theme.chart_bg));
    }

    // --- Axes, ticks, zero lines -------------------------------------------

    /// Draw the X axis: a full-height line at the origin (minimum) tick and
    /// tick marks rising from the bottom edge at every other tick.
    pub fn draw_x_axis<S: DrawSurface + ?Sized>(&self, surface: &mut S, tick_len: TickLength) {
        let vp = &self.viewport;
        let tick_px = match tick_len {
            TickLength::Full => vp.span_y(),
            TickLength::Px(len) => len.min(vp.span_y()),
        };
        let y_start = i32::from(vp.y_hi()) - i32::from(tick_px);
        for (i, value) in self.x_range.ticks().enumerate() {
            let px = self.x_scale.to_px(value);
            if i == 0 {
                surface.draw_vline(
                    px,
                    i32::from(vp.y_lo()),
                    u32::from(vp.span_y()),
                    self.theme.axis,
                );
            } else {
                surface.draw_vline(px, y_start, u32::from(tick_px), self.theme.tick);
            }
        }
    }

    /// Draw the Y axis: a full-width line at the origin (minimum) tick and
    /// tick marks extending right from the left edge at every other tick.
    pub fn draw_y_axis<S: DrawSurface + ?Sized>(&self, surface: &mut S, tick_len: TickLength) {
        let vp = &self.viewport;
        let tick_px = match tick_len {
            TickLength::Full => vp.span_x(),
            TickLength::Px(len) => len.min(vp.span_x()),
        };
        for (i, value) in self.y_range.ticks().enumerate() {
            let py = self.y_scale.to_px(value);
            if i == 0 {
                surface.draw_hline(
                    i32::from(vp.x_lo()),
                    py,
                    u32::from(vp.span_x()),
                    self.theme.axis,
                );
            } else {
                surface.draw_hline(i32::from(vp.x_lo()), py, u32::from(tick_px), self.theme.tick);
            }
        }
    }

    /// Draw the X = 0 reference line if zero is inside the X range
    /// (bounds inclusive). Draws nothing otherwise.
    pub fn draw_x_zero<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.x_range.contains_zero() {
            return;
        }
        let vp = &self.viewport;
        surface.draw_vline(
            self.x_scale.to_px(0.0),
            i32::from(vp.y_lo()),
            u32::from(vp.span_y()),
            self.theme.zero,
        );
    }

    /// Draw the Y = 0 reference line if zero is inside the Y range
    /// (bounds inclusive). Draws nothing otherwise.
    pub fn draw_y_zero<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.y_range.contains_zero() {
            return;
        }
        let vp = &self.viewport;
        surface.draw_hline(
            i32::from(vp.x_lo()),
            self.y_scale.to_px(0.0),
            u32::from(vp.span_x()),
            self.theme.zero,
        );
    }

    // --- Labels ------------------------------------------------------------

    /// Draw X tick-value labels below the viewport, centered on their ticks.
    ///
    /// The origin label is skipped (it collides with the Y labels) and so is
    /// any label within the top 5% of the range (it would run past the
    /// chart's right edge).
    pub fn draw_x_labels<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let style = TextStyle::new(AXIS_TEXT_SIZE, self.theme.label, self.theme.screen_bg);
        let cutoff = self.x_range.max() - LABEL_SKIP_FRACTION * self.x_range.span();
        let y = i32::from(self.viewport.y_hi()) + X_LABEL_GAP;
        for (i, value) in self.x_range.ticks().enumerate() {
            if i == 0 || value >= cutoff {
                continue;
            }
            let px = self.x_scale.to_px(value);
            let nudge = (label_width(value as i32) / 2) as i32;
            surface.draw_text(px - nudge, y, &tick_label(value), style);
        }
    }

    /// Draw Y tick-value labels, right-aligned against the viewport's left
    /// edge, one per tick.
    pub fn draw_y_labels<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let style = TextStyle::new(AXIS_TEXT_SIZE, self.theme.label, self.theme.screen_bg);
        let x_edge = i32::from(self.viewport.x_lo());
        for value in self.y_range.ticks() {
            let py = self.y_scale.to_px(value);
            let nudge = label_width(value as i32) as i32 + Y_LABEL_PAD;
            surface.draw_text(x_edge - nudge, py - Y_LABEL_NUDGE, &tick_label(value), style);
        }
    }

    // --- Data marks --------------------------------------------------------

    /// Draw a data point as a filled disk of the given pixel radius.
    pub fn draw_point<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f32, y: f32, radius: u32) {
        surface.fill_circle(
            self.x_scale.to_px(x),
            self.y_scale.to_px(y),
            radius,
            self.theme.point,
        );
    }

    /// Erase a previously drawn point by redrawing it in the background
    /// color.
    pub fn erase_point<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f32, y: f32, radius: u32) {
        surface.fill_circle(
            self.x_scale.to_px(x),
            self.y_scale.to_px(y),
            radius,
            self.theme.chart_bg,
        );
    }

    /// Draw a straight segment between two data points.
    pub fn draw_line<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    ) {
        surface.draw_line(
            self.x_scale.to_px(x0),
            self.y_scale.to_px(y0),
            self.x_scale.to_px(x1),
            self.y_scale.to_px(y1),
            self.theme.line,
        );
    }

    /// Erase a previously drawn segment by redrawing it in the background
    /// color.
    pub fn erase_line<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    ) {
        surface.draw_line(
            self.x_scale.to_px(x0),
            self.y_scale.to_px(y0),
            self.x_scale.to_px(x1),
            self.y_scale.to_px(y1),
            self.theme.chart_bg,
        );
    }

    // --- Composite ---------------------------------------------------------

    /// Draw the selected chart furniture in one call: background, axes,
    /// zero lines, labels.
    pub fn draw_frame<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        parts: FrameParts,
        tick_len: TickLength,
    ) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("chart_frame", parts = ?parts).entered();

        if parts.contains(FrameParts::BACKGROUND) {
            self.clear_region(surface);
        }
        if parts.contains(FrameParts::X_AXIS) {
            self.draw_x_axis(surface, tick_len);
        }
        if parts.contains(FrameParts::Y_AXIS) {
            self.draw_y_axis(surface, tick_len);
        }
        if parts.contains(FrameParts::ZERO_LINES) {
            self.draw_x_zero(surface);
            self.draw_y_zero(surface);
        }
        if parts.contains(FrameParts::X_LABELS) {
            self.draw_x_labels(surface);
        }
        if parts.contains(FrameParts::Y_LABELS) {
            self.draw_y_labels(surface);
        }
    }
}
