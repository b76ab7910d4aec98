// src/convert.rs

//! Conversions between [`Color`] and byte channels, packed integers and hex
//! strings.
//!
//! Every function is pure. Float channels map to bytes by `round(c * 255)`
//! and bytes map back by `b / 255`, so a byte round-trips exactly.
//!
//! ```
//! use color_convert::{from_rgb_value, to_rgb_html_string_lower, Color};
//!
//! let orange = from_rgb_value(0xFF8000);
//! assert_eq!(orange.r, 1.0);
//! assert_eq!(to_rgb_html_string_lower(Color::RED), "ff0000");
//! ```

use log::warn;

use crate::color::{byte_to_channel, Color};
use crate::config::ParsingConfig;
use crate::error::ColorParseError;
use crate::html::{self, HexCase};
use crate::layout::ChannelLayout;

// --- Byte constructors ---

/// Creates an opaque color from byte channels.
pub fn from_rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(byte_to_channel(r), byte_to_channel(g), byte_to_channel(b))
}

/// Creates a color from byte channels.
pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::from_bytes([r, g, b, a])
}

/// Creates a color from byte channels given alpha first.
pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
    Color::from_bytes([r, g, b, a])
}

// --- Packed integer constructors ---

/// Creates an opaque color from `0xRRGGBB`.
///
/// Bits above 24 are ignored.
pub fn from_rgb_value(value: i64) -> Color {
    ChannelLayout::Rgb.unpack(value)
}

/// Creates a color from `0xRRGGBBAA`.
///
/// Bits above 32 are ignored.
pub fn from_rgba_value(value: i64) -> Color {
    ChannelLayout::Rgba.unpack(value)
}

/// Creates a color from `0xAARRGGBB`.
///
/// Bits above 32 are ignored.
pub fn from_argb_value(value: i64) -> Color {
    ChannelLayout::Argb.unpack(value)
}

// --- String constructors ---

/// Parses `#RRGGBB` (or any form [`html`](crate::html) accepts).
///
/// Always uses the default parser settings; call
/// [`html::parse_with`](crate::html::parse_with) to choose others.
pub fn from_rgb_html(s: &str) -> Result<Color, ColorParseError> {
    html::parse_with(s, &ParsingConfig::default())
}

/// Parses `#RRGGBBAA` (or any form [`html`](crate::html) accepts).
pub fn from_rgba_html(s: &str) -> Result<Color, ColorParseError> {
    html::parse_with(s, &ParsingConfig::default())
}

/// Like [`from_rgb_html`], but returns opaque black on malformed input
/// instead of an error.
pub fn from_rgb_html_or_default(s: &str) -> Color {
    parse_or_fallback(s, &ParsingConfig::default())
}

/// Like [`from_rgba_html`], but returns opaque black on malformed input
/// instead of an error.
pub fn from_rgba_html_or_default(s: &str) -> Color {
    parse_or_fallback(s, &ParsingConfig::default())
}

fn parse_or_fallback(s: &str, config: &ParsingConfig) -> Color {
    html::parse_with(s, config).unwrap_or_else(|e| {
        warn!(
            "Could not parse color {:?}: {}. Returning fallback {:?}.",
            s, e, config.fallback
        );
        config.fallback
    })
}

// --- Packed integer serializers ---

/// Packs a color as `0xRRGGBB`, dropping alpha.
pub fn to_rgb(color: Color) -> i64 {
    ChannelLayout::Rgb.pack(color)
}

/// Packs a color as `0xRRGGBBAA`.
pub fn to_rgba(color: Color) -> i64 {
    ChannelLayout::Rgba.pack(color)
}

/// Packs a color as `0xAARRGGBB`.
pub fn to_argb(color: Color) -> i64 {
    ChannelLayout::Argb.pack(color)
}

// --- Hex string serializers ---

/// Formats a color as hex digits in the given layout and case, without `#`.
pub fn to_html_string(color: Color, layout: ChannelLayout, case: HexCase) -> String {
    html::format_packed(layout.pack(color), layout, case)
}

/// `Color::RED` -> `"ff0000"`
pub fn to_rgb_html_string_lower(color: Color) -> String {
    to_html_string(color, ChannelLayout::Rgb, HexCase::Lower)
}

/// `Color::RED` -> `"ff0000ff"`
pub fn to_rgba_html_string_lower(color: Color) -> String {
    to_html_string(color, ChannelLayout::Rgba, HexCase::Lower)
}

/// `Color::RED` -> `"ffff0000"`
pub fn to_argb_html_string_lower(color: Color) -> String {
    to_html_string(color, ChannelLayout::Argb, HexCase::Lower)
}

/// `Color::RED` -> `"FF0000"`
pub fn to_rgb_html_string_upper(color: Color) -> String {
    to_html_string(color, ChannelLayout::Rgb, HexCase::Upper)
}

/// `Color::RED` -> `"FF0000FF"`
pub fn to_rgba_html_string_upper(color: Color) -> String {
    to_html_string(color, ChannelLayout::Rgba, HexCase::Upper)
}

/// `Color::RED` -> `"FFFF0000"`
pub fn to_argb_html_string_upper(color: Color) -> String {
    to_html_string(color, ChannelLayout::Argb, HexCase::Upper)
}
