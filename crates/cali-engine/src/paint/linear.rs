use super::ColorKey;

/// Linear premultiplied RGBA color, the format the GPU pipeline blends in.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinearRgba {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl LinearRgba {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplies straight-alpha linear components, clamping to `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Decodes straight-alpha sRGB bytes into linear premultiplied color.
    ///
    /// Alpha is already linear and is only normalized.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Returns straight-alpha components; RGB is zero when `a == 0`.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<ColorKey> for LinearRgba {
    #[inline]
    fn from(key: ColorKey) -> Self {
        let [r, g, b, a] = key.rgba();
        Self::from_srgb_u8(r, g, b, a)
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn srgb_endpoints_are_exact() {
        assert_eq!(LinearRgba::from(ColorKey::white()), LinearRgba::from_premul(1.0, 1.0, 1.0, 1.0));
        assert_eq!(LinearRgba::from(ColorKey::black()), LinearRgba::from_premul(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn srgb_mid_gray_is_darker_in_linear() {
        let c = LinearRgba::from_srgb_u8(128, 128, 128, 255);
        assert!((c.r - 0.215_861).abs() < 1e-4);
    }

    #[test]
    fn alpha_is_premultiplied() {
        let c = LinearRgba::from(ColorKey::from_rgba([255, 255, 255, 51]));
        assert!((c.a - 0.2).abs() < EPS);
        assert!((c.r - 0.2).abs() < EPS);

        let (r, _, _, a) = c.to_straight();
        assert!((r - 1.0).abs() < 1e-5);
        assert!((a - 0.2).abs() < EPS);
    }

    #[test]
    fn transparent_to_straight_is_zero() {
        assert_eq!(LinearRgba::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
