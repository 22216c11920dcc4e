use crate::paint::{ColorKey, LinearRgba};
use crate::scene::ShapeStyle;

/// Pen state applied to every draw call of a [`DrawManager`](super::DrawManager).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawStyle {
    pub color: ColorKey,
    /// Stroke width in logical pixels, for lines and outlines.
    pub thickness: f32,
    /// Fill closed shapes instead of outlining them.
    pub filled: bool,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: ColorKey::from_rgb([255, 255, 255]),
            thickness: 1.0,
            filled: false,
        }
    }
}

impl DrawStyle {
    /// How closed shapes are painted under this style.
    #[inline]
    pub fn shape(&self) -> ShapeStyle {
        if self.filled {
            ShapeStyle::Filled
        } else {
            ShapeStyle::outline(self.thickness)
        }
    }

    /// Color in the format the renderer blends in.
    #[inline]
    pub fn linear_color(&self) -> LinearRgba {
        self.color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thin_white_outline() {
        let s = DrawStyle::default();
        assert_eq!(s.color.rgba(), [255, 255, 255, 255]);
        assert_eq!(s.thickness, 1.0);
        assert!(!s.filled);
        assert_eq!(s.shape(), ShapeStyle::outline(1.0));
        assert_eq!(s.linear_color(), LinearRgba::from_premul(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn filled_ignores_thickness() {
        let s = DrawStyle { filled: true, thickness: 7.0, ..DrawStyle::default() };
        assert_eq!(s.shape(), ShapeStyle::Filled);
    }
}
