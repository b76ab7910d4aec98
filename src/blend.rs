// src/blend.rs

use crate::color::Color;

/// Blends `overlap` over `background` by `alpha`.
///
/// Linear interpolation on every channel, alpha included:
/// `background + (overlap - background) * alpha`. Neither `alpha` nor the
/// result is clamped.
#[must_use]
#[inline]
pub fn alpha_blend(background: Color, overlap: Color, alpha: f32) -> Color {
    background + (overlap - background) * alpha
}
