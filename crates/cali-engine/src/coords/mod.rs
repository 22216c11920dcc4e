//! Coordinate and geometry types.
//!
//! Canonical CPU space for drawing:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! The vector types are generic over [`Scalar`]; the draw stream uses `f32`.

mod rect;
mod scalar;
mod vector2d;
mod vector3d;
mod viewport;

pub use rect::Rect;
pub use scalar::{Float, Scalar};
pub use vector2d::{Vec2, Vector2D};
pub use vector3d::Vector3D;
pub use viewport::Viewport;
