use std::fmt;
use std::str::FromStr;

use super::error::ColorKeyError;

/// Straight-alpha sRGB bytes: `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// sRGB bytes without alpha: `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Length of `#RRGGBBAA`.
const HEX_STRING_LEN: usize = 9;

/// A single color sample readable as RGBA bytes, RGB bytes, a hex string or a
/// hex number.
///
/// Only the RGBA bytes are stored; every other representation is derived on
/// read, so setters cannot leave the representations disagreeing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorKey {
    rgba: Rgba,
}

impl ColorKey {
    #[inline]
    pub const fn from_rgba(rgba: Rgba) -> Self {
        Self { rgba }
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgba: [rgb[0], rgb[1], rgb[2], 255] }
    }

    /// Parses `#RRGGBBAA`.
    pub fn from_hex_string(s: &str) -> Result<Self, ColorKeyError> {
        if s.len() != HEX_STRING_LEN {
            return Err(ColorKeyError::InvalidLength(s.len()));
        }
        let digits = s.strip_prefix('#').ok_or(ColorKeyError::MissingHash)?;

        // `from_str_radix` tolerates a leading sign, so check digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorKeyError::InvalidHex(digits.to_string()));
        }

        let mut rgba = [0u8; 4];
        for (i, channel) in rgba.iter_mut().enumerate() {
            let pair = &digits[i * 2..i * 2 + 2];
            *channel = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorKeyError::InvalidHex(pair.to_string()))?;
        }

        Ok(Self { rgba })
    }

    /// Opaque color from `0xRRGGBB`. Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_hex_number(hex: u32) -> Self {
        Self {
            rgba: [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255],
        }
    }

    /// Color from `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb_number(argb: u32) -> Self {
        Self {
            rgba: [(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, (argb >> 24) as u8],
        }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::from_rgb([0, 0, 0])
    }

    #[inline]
    pub const fn white() -> Self {
        Self::from_rgb([255, 255, 255])
    }

    #[inline]
    pub const fn rgba(&self) -> Rgba {
        self.rgba
    }

    #[inline]
    pub const fn rgb(&self) -> Rgb {
        [self.rgba[0], self.rgba[1], self.rgba[2]]
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.rgba[3]
    }

    /// `#RRGGBB`, upper-case, alpha omitted.
    pub fn hex_string(&self) -> String {
        let [r, g, b, _] = self.rgba;
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// `#RRGGBBAA`; accepted back by [`from_hex_string`](Self::from_hex_string).
    pub fn hex_string_with_alpha(&self) -> String {
        let [r, g, b, a] = self.rgba;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// `0xRRGGBB`.
    #[inline]
    pub const fn hex_number(&self) -> u32 {
        (self.rgba[0] as u32) << 16 | (self.rgba[1] as u32) << 8 | self.rgba[2] as u32
    }

    /// `0xAARRGGBB`.
    #[inline]
    pub const fn argb_number(&self) -> u32 {
        (self.rgba[3] as u32) << 24 | self.hex_number()
    }

    /// Straight-alpha channels normalized to `[0, 1]`.
    #[inline]
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        self.rgba.map(|c| c as f32 / 255.0)
    }

    #[inline]
    pub fn set_rgba(&mut self, rgba: Rgba) {
        self.rgba = rgba;
    }

    /// Replaces the color channels; alpha is kept.
    #[inline]
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgba = [rgb[0], rgb[1], rgb[2], self.rgba[3]];
    }

    /// Parses `#RRGGBBAA`; on error the key is left unchanged.
    pub fn set_hex_string(&mut self, s: &str) -> Result<(), ColorKeyError> {
        *self = Self::from_hex_string(s)?;
        Ok(())
    }

    /// Replaces the color channels from `0xRRGGBB`; alpha is kept.
    #[inline]
    pub fn set_hex_number(&mut self, hex: u32) {
        let [r, g, b, _] = Self::from_hex_number(hex).rgba;
        self.rgba = [r, g, b, self.rgba[3]];
    }

    /// Per-channel linear interpolation in sRGB byte space, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mut rgba = [0u8; 4];
        for (i, out) in rgba.iter_mut().enumerate() {
            let a = self.rgba[i] as f64;
            let b = other.rgba[i] as f64;
            *out = (a + (b - a) * t).round() as u8;
        }
        Self { rgba }
    }
}

impl From<Rgba> for ColorKey {
    #[inline]
    fn from(rgba: Rgba) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<Rgb> for ColorKey {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl FromStr for ColorKey {
    type Err = ColorKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_string(s)
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex_string_with_alpha())
    }
}
