//! GPU rendering subsystem.
//!
//! The scene draw stream is tessellated on the CPU into a colored triangle
//! list and drawn by a single `wgpu` pipeline.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod clear;
mod ctx;
mod primitives;
mod tessellate;

pub use clear::clear_target;
pub use ctx::{RenderCtx, RenderTarget};
pub use primitives::PrimitiveRenderer;
pub use tessellate::{circle_segments, tessellate, PrimitiveVertex};
