//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in call order
//! - keep shape-specific payloads and push helpers isolated per shape file
//!   under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{CircleCmd, LineCmd, RectCmd, ShapeStyle, TriangleCmd};
