#![forbid(unsafe_code)]

//! An operation-recording surface for headless tests.
//!
//! Instead of rasterizing, [`RecordingSurface`] appends every primitive call
//! to an op log that tests inspect. Dimensions follow the current
//! orientation the way a real controller's do: the surface is constructed
//! with its native portrait dimensions and swaps them when rotated into
//! landscape.

use crate::color::Rgb565;
use crate::surface::{DrawSurface, Orientation};
use crate::text::TextStyle;

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgb565,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        color: Rgb565,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgb565,
    },
    HLine {
        x: i32,
        y: i32,
        len: u32,
        color: Rgb565,
    },
    VLine {
        x: i32,
        y: i32,
        len: u32,
        color: Rgb565,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        style: TextStyle,
    },
    SetOrientation(Orientation),
}

/// A [`DrawSurface`] that records operations instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    native_w: u16,
    native_h: u16,
    orientation: Orientation,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create a surface with the given native (portrait) dimensions,
    /// starting in portrait orientation like a freshly reset controller.
    pub fn new(native_w: u16, native_h: u16) -> Self {
        Self {
            native_w,
            native_h,
            orientation: Orientation::Portrait,
            ops: Vec::new(),
        }
    }

    /// The recorded operations, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Discard the log (useful after initialization noise).
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u16 {
        if self.orientation.is_landscape() {
            self.native_h
        } else {
            self.native_w
        }
    }

    fn height(&self) -> u16 {
        if self.orientation.is_landscape() {
            self.native_w
        } else {
            self.native_h
        }
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.ops.push(DrawOp::SetOrientation(orientation));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb565) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb565) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565) {
        self.ops.push(DrawOp::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn draw_hline(&mut self, x: i32, y: i32, len: u32, color: Rgb565) {
        self.ops.push(DrawOp::HLine { x, y, len, color });
    }

    fn draw_vline(&mut self, x: i32, y: i32, len: u32, color: Rgb565) {
        self.ops.push(DrawOp::VLine { x, y, len, color });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_owned(),
            style,
        });
    }
}
