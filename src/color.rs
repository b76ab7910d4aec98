// src/color.rs

//! Defines the `Color` value type: four float channels in the 0.0-1.0 range.
//!
//! `Color` is a plain value record. It carries no validation, so channels
//! outside 0.0-1.0 are representable and propagate through arithmetic and
//! conversions unchanged.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Scale factor between a byte channel (0-255) and a float channel (0.0-1.0).
pub const CHANNEL_MAX: f32 = 255.0;

/// An RGBA color with floating-point channels.
///
/// `Default` is transparent black (all channels zero).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from four float channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Creates an opaque color from three float channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    /// Creates a color from byte channels in `[r, g, b, a]` order.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        Color::new(
            byte_to_channel(r),
            byte_to_channel(g),
            byte_to_channel(b),
            byte_to_channel(a),
        )
    }

    /// Returns the channels as bytes in `[r, g, b, a]` order.
    ///
    /// Unlike the packed-integer serializers this saturates to 0-255, so it
    /// is only suitable for display.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        let sat = |c: f32| channel_to_int(c).clamp(0, 255) as u8;
        [sat(self.r), sat(self.g), sat(self.b), sat(self.a)]
    }

    /// Returns the channels as an `[r, g, b, a]` array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns a copy with the alpha channel replaced.
    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }
}

/// Scales a byte channel into the float range.
#[inline]
pub(crate) fn byte_to_channel(byte: u8) -> f32 {
    byte as f32 / CHANNEL_MAX
}

/// Scales a float channel to the byte range, rounding half to even.
///
/// No clamping: 2.0 yields 510 and -1.0 yields -255.
#[inline]
pub(crate) fn channel_to_int(channel: f32) -> i64 {
    (channel * CHANNEL_MAX).round_ties_even() as i64
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}
