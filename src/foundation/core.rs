pub use kurbo::{Rect, Vec2};

/// Position of a frame on its channel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Straight (non-premultiplied) RGB8 node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color3B {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color3B {
    /// Opaque white, the default node tint.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color3B {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Tint plus opacity, the value carried by a color frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// RGB tint.
    pub color: Color3B,
    /// Opacity in `0..=255`.
    pub alpha: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            color: Color3B::WHITE,
            alpha: 255,
        }
    }
}

/// Signed per-channel distance between two [`Rgba`] values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbaDelta {
    /// Red delta.
    pub r: f64,
    /// Green delta.
    pub g: f64,
    /// Blue delta.
    pub b: f64,
    /// Alpha delta.
    pub a: f64,
}

/// Segment blending: a value plus a signed delta scaled by segment progress.
///
/// `offset(from, d, 0.0)` is always `from`. At `1.0` the sum can miss `to` by an ulp, so
/// segments return their stored target there instead of calling `offset`.
pub trait Blend: Copy {
    /// Stored per-segment delta type.
    type Delta: Copy + Default + std::fmt::Debug + PartialEq;

    /// Signed distance from `from` to `to`.
    fn delta(from: Self, to: Self) -> Self::Delta;

    /// True when every component of `delta` is exactly zero.
    fn is_still(delta: Self::Delta) -> bool;

    /// `from + percent * delta`, per component.
    fn offset(from: Self, delta: Self::Delta, percent: f64) -> Self;
}

impl Blend for f64 {
    type Delta = f64;

    fn delta(from: Self, to: Self) -> Self::Delta {
        to - from
    }

    fn is_still(delta: Self::Delta) -> bool {
        delta == 0.0
    }

    fn offset(from: Self, delta: Self::Delta, percent: f64) -> Self {
        from + percent * delta
    }
}

impl Blend for Vec2 {
    type Delta = Vec2;

    fn delta(from: Self, to: Self) -> Self::Delta {
        to - from
    }

    fn is_still(delta: Self::Delta) -> bool {
        delta.x == 0.0 && delta.y == 0.0
    }

    fn offset(from: Self, delta: Self::Delta, percent: f64) -> Self {
        Vec2::new(from.x + percent * delta.x, from.y + percent * delta.y)
    }
}

impl Blend for Rgba {
    type Delta = RgbaDelta;

    fn delta(from: Self, to: Self) -> Self::Delta {
        fn d(a: u8, b: u8) -> f64 {
            f64::from(b) - f64::from(a)
        }

        RgbaDelta {
            r: d(from.color.r, to.color.r),
            g: d(from.color.g, to.color.g),
            b: d(from.color.b, to.color.b),
            a: d(from.alpha, to.alpha),
        }
    }

    fn is_still(delta: Self::Delta) -> bool {
        delta.r == 0.0 && delta.g == 0.0 && delta.b == 0.0 && delta.a == 0.0
    }

    fn offset(from: Self, delta: Self::Delta, percent: f64) -> Self {
        Self {
            color: Color3B {
                r: offset_u8(from.color.r, delta.r, percent),
                g: offset_u8(from.color.g, delta.g, percent),
                b: offset_u8(from.color.b, delta.b, percent),
            },
            alpha: offset_u8(from.alpha, delta.a, percent),
        }
    }
}

/// Blend one 8-bit channel: round half away from zero, then clamp to `0..=255`.
pub fn offset_u8(from: u8, delta: f64, percent: f64) -> u8 {
    (f64::from(from) + percent * delta).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
