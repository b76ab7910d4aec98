// src/layout.rs

//! Channel layouts for packed integer colors.
//!
//! A layout names the big-endian channel order inside the integer. Each
//! channel occupies one byte; the layout only decides which byte.

use serde::{Deserialize, Serialize};

use crate::color::{byte_to_channel, channel_to_int, Color};

/// Channel order of a packed integer color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// `0xRRGGBB`, alpha is implicitly opaque.
    Rgb,
    /// `0xRRGGBBAA`.
    Rgba,
    /// `0xAARRGGBB`.
    Argb,
}

/// Bit offsets of the (r, g, b, a) bytes. `None` means the channel is absent.
struct Shifts {
    r: u32,
    g: u32,
    b: u32,
    a: Option<u32>,
}

impl ChannelLayout {
    const fn shifts(self) -> Shifts {
        match self {
            ChannelLayout::Rgb => Shifts { r: 16, g: 8, b: 0, a: None },
            ChannelLayout::Rgba => Shifts { r: 24, g: 16, b: 8, a: Some(0) },
            ChannelLayout::Argb => Shifts { r: 16, g: 8, b: 0, a: Some(24) },
        }
    }

    /// Number of hex digits in the string form of this layout.
    pub const fn hex_digits(self) -> usize {
        match self {
            ChannelLayout::Rgb => 6,
            ChannelLayout::Rgba | ChannelLayout::Argb => 8,
        }
    }

    /// Extracts a color from the low 32 bits of `value`.
    ///
    /// Bits above the layout's width are masked away, so
    /// `unpack(0x1_00FF_0000)` under `Rgb` is pure red.
    pub fn unpack(self, value: i64) -> Color {
        let s = self.shifts();
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;
        Color::new(
            byte_to_channel(byte(s.r)),
            byte_to_channel(byte(s.g)),
            byte_to_channel(byte(s.b)),
            s.a.map_or(1.0, |shift| byte_to_channel(byte(shift))),
        )
    }

    /// Packs a color into an integer.
    ///
    /// Channels are rounded but not clamped. Out-of-range channels spill into
    /// neighbouring bytes; the result for such inputs is unspecified but
    /// deterministic.
    pub fn pack(self, color: Color) -> i64 {
        let s = self.shifts();
        let mut value = channel_to_int(color.r) << s.r;
        value |= channel_to_int(color.g) << s.g;
        value |= channel_to_int(color.b) << s.b;
        if let Some(shift) = s.a {
            value |= channel_to_int(color.a) << shift;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_unpack_rgb_forces_opaque() {
        let c = ChannelLayout::Rgb.unpack(0x00FF_0000);
        assert_eq!(c, Color::RED);
    }

    #[test_log::test]
    fn test_unpack_ignores_high_bits() {
        assert_eq!(
            ChannelLayout::Rgb.unpack(0x7F12_34FF_0000),
            ChannelLayout::Rgb.unpack(0xFF_0000)
        );
        assert_eq!(
            ChannelLayout::Rgba.unpack(0x1_FF00_00FF),
            ChannelLayout::Rgba.unpack(0xFF00_00FF)
        );
    }

    #[test_log::test]
    fn test_pack_positions() {
        let c = Color::from_bytes([0x11, 0x22, 0x33, 0x44]);
        assert_eq!(ChannelLayout::Rgb.pack(c), 0x11_2233);
        assert_eq!(ChannelLayout::Rgba.pack(c), 0x1122_3344);
        assert_eq!(ChannelLayout::Argb.pack(c), 0x4411_2233);
    }

    #[test_log::test]
    fn test_pack_does_not_clamp() {
        // r = 2.0 becomes 510 (0x1FE) and spills into bit 24
        let c = Color::new(2.0, 0.0, 0.0, 1.0);
        assert_eq!(ChannelLayout::Rgb.pack(c), 0x1FE << 16);
    }

    #[test_log::test]
    fn test_hex_digits() {
        assert_eq!(ChannelLayout::Rgb.hex_digits(), 6);
        assert_eq!(ChannelLayout::Rgba.hex_digits(), 8);
        assert_eq!(ChannelLayout::Argb.hex_digits(), 8);
    }
}
