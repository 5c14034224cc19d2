//! Reveal style snapshots
//!
//! A [`RevealStyle`] is the set of animatable properties a reveal drives:
//! opacity, translation, and scale. The identity style (fully visible, no
//! offset) is the `Default`, so a block with no animation metadata renders
//! exactly where layout put it.

use unveil_core::Color;

/// Linear blending between two values of the same type
pub trait Interpolate: Sized {
    /// Blend from `self` toward `target`; `t = 0.0` is `self`, `t = 1.0` is
    /// exactly `target`
    fn interpolate(&self, target: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

/// Animatable properties of a reveal-tracked block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// 0.0 transparent to 1.0 opaque
    pub opacity: f32,
    /// Horizontal offset from the laid-out position, logical pixels
    pub x: f32,
    /// Vertical offset from the laid-out position, logical pixels
    pub y: f32,
    /// Uniform scale about the block's center
    pub scale: f32,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::visible()
    }
}

impl RevealStyle {
    /// Fully visible at the laid-out position
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }

    /// Fully transparent at the laid-out position
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::visible()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Interpolate for RevealStyle {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.interpolate(&target.opacity, t),
            x: self.x.interpolate(&target.x, t),
            y: self.y.interpolate(&target.y, t),
            scale: self.scale.interpolate(&target.scale, t),
        }
    }
}
