use crate::scene::shapes::{CircleCmd, LineCmd, RectCmd, TriangleCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to emit its triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Rect(RectCmd),
    Circle(CircleCmd),
    Triangle(TriangleCmd),
}
