//! Colors and text parameters.
//!
//! Colors are 8-bit RGBA, the format hosts upload to the GPU, so generated
//! images can be handed over without conversion.

use bytemuck::{Pod, Zeroable};

/// RGBA color, 8 bits per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Off-white used for default text.
    pub const RAYWHITE: Self = Self::rgba(245, 245, 245, 255);
    /// Light gray.
    pub const LIGHTGRAY: Self = Self::rgba(200, 200, 200, 255);
    /// Gray.
    pub const GRAY: Self = Self::rgba(130, 130, 130, 255);
    /// Dark gray.
    pub const DARKGRAY: Self = Self::rgba(80, 80, 80, 255);
    /// Red.
    pub const RED: Self = Self::rgba(230, 41, 55, 255);
    /// Green.
    pub const GREEN: Self = Self::rgba(0, 228, 48, 255);
    /// Sky blue.
    pub const SKYBLUE: Self = Self::rgba(102, 191, 255, 255);

    /// Creates a color from RGBA channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from a 0xRRGGBBAA value.
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self::rgba(r, g, b, a)
    }

    /// Returns a new color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| channel(f32::from(a) + (f32::from(b) - f32::from(a)) * t);
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Converts to HSV. Alpha is dropped.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        let hue = if delta > 0.0 {
            let raw = if max == r {
                60.0 * ((g - b) / delta)
            } else if max == g {
                60.0 * ((b - r) / delta + 2.0)
            } else {
                60.0 * ((r - g) / delta + 4.0)
            };
            if raw < 0.0 { raw + 360.0 } else { raw }
        } else {
            0.0
        };

        Hsv { hue, saturation, value: max }
    }

    /// Creates an opaque color from HSV.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let Hsv { hue, saturation, value } = hsv;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        if s <= 0.0 {
            let c = channel(v * 255.0);
            return Self::rgb(c, c, c);
        }

        let h6 = hue.rem_euclid(360.0) / 60.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let (p, q, t) = (v * (1.0 - s), v * (1.0 - s * f), v * (1.0 - s * (1.0 - f)));
        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgb(channel(r * 255.0), channel(g * 255.0), channel(b * 255.0))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Rounds and clamps a 0-255 float into a channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Hue (degrees, 0..360), saturation and value (0..1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees.
    pub hue: f32,
    /// Saturation.
    pub saturation: f32,
    /// Value (brightness).
    pub value: f32,
}

impl Hsv {
    /// Creates an HSV triple.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self { hue, saturation, value }
    }
}

/// Handle to a font owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub u32);

/// Font and size used to draw a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font handle.
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    /// Creates a text style.
    #[must_use]
    pub const fn new(font: FontId, size: f32) -> Self {
        Self { font, size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(FontId::default(), 20.0)
    }
}
