use crate::coords::Vec2;
use crate::paint::LinearRgba;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub style: ShapeStyle,
    pub color: LinearRgba,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, style: ShapeStyle, color: LinearRgba) -> Self {
        Self { center, radius, style, color }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, style: ShapeStyle, color: LinearRgba) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, style, color)));
    }
}
