use crate::coords::Rect;
use crate::paint::LinearRgba;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub style: ShapeStyle,
    pub color: LinearRgba,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, style: ShapeStyle, color: LinearRgba) -> Self {
        Self { rect, style, color }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, style: ShapeStyle, color: LinearRgba) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, style, color)));
    }

    /// Records a filled rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: LinearRgba) {
        self.push_rect(rect, ShapeStyle::Filled, color);
    }
}
