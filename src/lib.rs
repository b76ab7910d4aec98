// src/lib.rs

//! Conversions between RGB/RGBA/ARGB color representations.
//!
//! A [`Color`] holds four float channels. The functions in [`convert`],
//! re-exported here, turn it into and out of byte channels, packed integers
//! (`0xRRGGBB`, `0xRRGGBBAA`, `0xAARRGGBB`) and hex strings. [`alpha_blend`]
//! linearly interpolates two colors.

pub mod blend;
pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod html;
pub mod layout;

pub use blend::alpha_blend;
pub use color::Color;
pub use convert::*;
pub use error::ColorParseError;
pub use html::HexCase;
pub use layout::ChannelLayout;
