//! RGBA color
//!
//! Channels are linear f32 in `0.0..=1.0`. Hex constructors accept the usual
//! `0xRRGGBB` / `0xRRGGBBAA` forms used throughout the site palettes.

/// An RGBA color
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From a `0xRRGGBB` literal, fully opaque
    pub const fn hex(value: u32) -> Self {
        let r = ((value >> 16) & 0xFF) as f32 / 255.0;
        let g = ((value >> 8) & 0xFF) as f32 / 255.0;
        let b = (value & 0xFF) as f32 / 255.0;
        Self { r, g, b, a: 1.0 }
    }

    /// From a `0xRRGGBBAA` literal
    pub const fn hex_alpha(value: u32) -> Self {
        let r = ((value >> 24) & 0xFF) as f32 / 255.0;
        let g = ((value >> 16) & 0xFF) as f32 / 255.0;
        let b = ((value >> 8) & 0xFF) as f32 / 255.0;
        let a = (value & 0xFF) as f32 / 255.0;
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, component-wise
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}
