// src/html.rs

//! Hex ("HTML") color strings: parsing into a [`Color`] and formatting packed
//! values as zero-padded hex digits.
//!
//! Accepted input forms, after trimming whitespace:
//! * `#RRGGBB` / `RRGGBB`
//! * `#RRGGBBAA` / `RRGGBBAA`
//! * `#RGB` / `#RGBA` shorthand, each digit doubled
//! * a small table of color names (`red`, `navy`, ...), only without `#`

use log::trace;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::ParsingConfig;
use crate::error::ColorParseError;
use crate::layout::ChannelLayout;

/// Case of hex digits in formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexCase {
    Lower,
    Upper,
}

/// Named colors, as `0xRRGGBBAA`.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("red", 0xFF0000FF),
    ("cyan", 0x00FFFFFF),
    ("blue", 0x0000FFFF),
    ("darkblue", 0x0000A0FF),
    ("lightblue", 0xADD8E6FF),
    ("purple", 0x800080FF),
    ("yellow", 0xFFFF00FF),
    ("lime", 0x00FF00FF),
    ("fuchsia", 0xFF00FFFF),
    ("white", 0xFFFFFFFF),
    ("silver", 0xC0C0C0FF),
    ("grey", 0x808080FF),
    ("gray", 0x808080FF),
    ("black", 0x000000FF),
    ("orange", 0xFFA500FF),
    ("brown", 0xA52A2AFF),
    ("maroon", 0x800000FF),
    ("green", 0x008000FF),
    ("olive", 0x808000FF),
    ("navy", 0x000080FF),
    ("teal", 0x008080FF),
    ("aqua", 0x00FFFFFF),
    ("magenta", 0xFF00FFFF),
];

fn nibble(c: u8) -> Result<u8, ColorParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorParseError::InvalidHexDigit(c as char)),
    }
}

/// Parses the digits after the optional `#` into `[r, g, b, a]` bytes.
fn parse_hex_digits(hex: &str, allow_short_form: bool) -> Result<[u8; 4], ColorParseError> {
    // Non-ASCII input can't be hex; report the first offending char.
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit(c));
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 | 4 if allow_short_form => {
            let mut out = [0xFF; 4];
            for (slot, &c) in out.iter_mut().zip(bytes) {
                *slot = nibble(c)? * 17;
            }
            Ok(out)
        }
        6 | 8 => {
            let mut out = [0xFF; 4];
            for (slot, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
                *slot = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            Ok(out)
        }
        n => Err(ColorParseError::InvalidLength(n)),
    }
}

fn lookup_name(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, value)| ChannelLayout::Rgba.unpack(value as i64))
}

/// Parses a color string with explicit parser settings.
pub fn parse_with(s: &str, config: &ParsingConfig) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    trace!("parsing color string {:?}", s);

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_digits(hex, config.allow_short_form).map(Color::from_bytes);
    }

    if config.allow_named {
        if let Some(color) = lookup_name(s) {
            return Ok(color);
        }
        // Anything that isn't hex-shaped is reported as an unknown name.
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::UnknownName(s.to_string()));
        }
    }

    parse_hex_digits(s, config.allow_short_form).map(Color::from_bytes)
}

/// Formats a packed value as hex digits, zero-padded to the layout's width.
///
/// Negative values format as 16-digit two's complement.
pub fn format_packed(value: i64, layout: ChannelLayout, case: HexCase) -> String {
    let width = layout.hex_digits();
    match case {
        HexCase::Lower => format!("{:0width$x}", value, width = width),
        HexCase::Upper => format!("{:0width$X}", value, width = width),
    }
}

#[cfg(test)]
mod tests;
