use crate::coords::Vec2;
use crate::paint::LinearRgba;
use crate::scene::{DrawCmd, DrawList};

/// Line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub thickness: f32,
    pub color: LinearRgba,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, thickness: f32, color: LinearRgba) -> Self {
        Self { from, to, thickness, color }
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: LinearRgba) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, thickness, color)));
    }
}
