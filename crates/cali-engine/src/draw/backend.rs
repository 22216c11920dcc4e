use std::fmt;

use anyhow::Result;

use crate::coords::{Rect, Vec2, Viewport};

use super::DrawStyle;

/// Available draw backends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BackendKind {
    /// Renders into an offscreen `wgpu` target.
    Wgpu,
    /// Keeps the draw stream in memory without rendering.
    Recording,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Wgpu => "wgpu",
            BackendKind::Recording => "recording",
        })
    }
}

/// Device-side half of a [`DrawManager`](super::DrawManager).
///
/// Geometry arrives validated, in logical pixels. Backends own their device
/// and must tolerate `initialize` after `initialize` (recreate) and
/// `shutdown` when not ready (no-op).
pub trait DrawBackend {
    fn kind(&self) -> BackendKind;

    /// Creates (or recreates) the device for `viewport`.
    fn initialize(&mut self, viewport: Viewport) -> Result<()>;

    /// Releases the device.
    fn shutdown(&mut self);

    fn is_ready(&self) -> bool;

    fn viewport(&self) -> Viewport;

    /// Moves to a new viewport. On error the previous viewport stays active.
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &DrawStyle);
    fn draw_rect(&mut self, rect: Rect, style: &DrawStyle);
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &DrawStyle);
    fn draw_triangle(&mut self, points: [Vec2; 3], style: &DrawStyle);

    /// Submits everything drawn since the last flush.
    fn flush(&mut self) -> Result<()>;
}

impl<B: DrawBackend + ?Sized> DrawBackend for Box<B> {
    fn kind(&self) -> BackendKind {
        (**self).kind()
    }

    fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        (**self).initialize(viewport)
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        (**self).set_viewport(viewport)
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &DrawStyle) {
        (**self).draw_line(from, to, style)
    }

    fn draw_rect(&mut self, rect: Rect, style: &DrawStyle) {
        (**self).draw_rect(rect, style)
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &DrawStyle) {
        (**self).draw_circle(center, radius, style)
    }

    fn draw_triangle(&mut self, points: [Vec2; 3], style: &DrawStyle) {
        (**self).draw_triangle(points, style)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(BackendKind::Wgpu.to_string(), "wgpu");
        assert_eq!(BackendKind::Recording.to_string(), "recording");
    }
}
