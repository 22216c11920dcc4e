use crate::coords::Vec2;
use crate::paint::LinearRgba;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Triangle draw payload. Winding does not matter; the pipeline does not cull.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub style: ShapeStyle,
    pub color: LinearRgba,
}

impl TriangleCmd {
    #[inline]
    pub fn new(points: [Vec2; 3], style: ShapeStyle, color: LinearRgba) -> Self {
        Self { points, style, color }
    }
}

impl DrawList {
    /// Records a triangle draw command.
    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3], style: ShapeStyle, color: LinearRgba) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(points, style, color)));
    }
}
