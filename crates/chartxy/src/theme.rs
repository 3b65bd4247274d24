#![forbid(unsafe_code)]

//! Chart color theme.

use chartxy_surface::Rgb565;

/// The colors a chart draws with, one field per role.
///
/// Every field is independently settable; the defaults reproduce the classic
/// black-background TFT look (red axes and labels, blue ticks, yellow trace,
/// green points).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    /// Background outside the chart region (title and label margins).
    pub screen_bg: Rgb565,
    /// Background of the chart region itself; also the erase color.
    pub chart_bg: Rgb565,
    /// Full-length axis lines.
    pub axis: Rgb565,
    /// Chart title text.
    pub title: Rgb565,
    /// Tick-value label text.
    pub label: Rgb565,
    /// Tick marks.
    pub tick: Rgb565,
    /// Line segments drawn between data points.
    pub line: Rgb565,
    /// Data-point markers.
    pub point: Rgb565,
    /// Zero-reference lines.
    pub zero: Rgb565,
    /// X-axis title text.
    pub x_title: Rgb565,
    /// Y-axis title text.
    pub y_title: Rgb565,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            screen_bg: Rgb565::BLACK,
            chart_bg: Rgb565::BLACK,
            axis: Rgb565::RED,
            title: Rgb565::WHITE,
            label: Rgb565::RED,
            tick: Rgb565::BLUE,
            line: Rgb565::YELLOW,
            point: Rgb565::GREEN,
            zero: Rgb565::RED,
            x_title: Rgb565::WHITE,
            y_title: Rgb565::WHITE,
        }
    }
}
