pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use rect::RectCmd;
pub use triangle::TriangleCmd;

/// How a closed shape is painted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeStyle {
    Filled,
    /// Stroke along the edges, centered on them.
    Outline { thickness: f32 },
}

impl ShapeStyle {
    #[inline]
    pub fn outline(thickness: f32) -> Self {
        ShapeStyle::Outline { thickness }
    }
}
