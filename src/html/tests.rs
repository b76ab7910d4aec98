// src/html/tests.rs

//! Tests for hex color string parsing and formatting.

use super::*;

fn parse(s: &str) -> Result<Color, ColorParseError> {
    parse_with(s, &ParsingConfig::default())
}

// --- Parsing ---

#[test_log::test]
fn test_parse_six_digits_is_opaque() {
    assert_eq!(parse("#FF0000"), Ok(Color::RED));
    assert_eq!(parse("ff0000"), Ok(Color::RED));
}

#[test_log::test]
fn test_parse_eight_digits_matches_packed() {
    assert_eq!(
        parse("#FF8000FF"),
        Ok(ChannelLayout::Rgba.unpack(0xFF8000FF))
    );
    assert_eq!(parse("#00000000"), Ok(Color::CLEAR));
}

#[test_log::test]
fn test_parse_mixed_case_and_whitespace() {
    assert_eq!(parse("  #fF00Ff \n"), Ok(Color::MAGENTA));
}

#[test_log::test]
fn test_parse_short_form() {
    assert_eq!(parse("#f00"), Ok(Color::RED));
    assert_eq!(parse("#f008").map(|c| c.to_bytes()), Ok([0xFF, 0, 0, 0x88]));
}

#[test_log::test]
fn test_short_form_can_be_disabled() {
    let config = ParsingConfig {
        allow_short_form: false,
        ..ParsingConfig::default()
    };
    assert_eq!(
        parse_with("#f00", &config),
        Err(ColorParseError::InvalidLength(3))
    );
    assert_eq!(parse_with("#ff0000", &config), Ok(Color::RED));
}

#[test_log::test]
fn test_parse_named() {
    assert_eq!(parse("red"), Ok(Color::RED));
    assert_eq!(parse("White"), Ok(Color::WHITE));
    assert_eq!(parse("navy").map(|c| c.to_bytes()), Ok([0, 0, 0x80, 0xFF]));
    assert_eq!(parse("grey"), parse("gray"));
}

#[test_log::test]
fn test_names_require_no_hash() {
    assert_eq!(parse("#red"), Err(ColorParseError::InvalidHexDigit('r')));
}

#[test_log::test]
fn test_named_can_be_disabled() {
    let config = ParsingConfig {
        allow_named: false,
        ..ParsingConfig::default()
    };
    assert_eq!(
        parse_with("red", &config),
        Err(ColorParseError::InvalidHexDigit('r'))
    );
}

#[test_log::test]
fn test_parse_errors() {
    assert_eq!(parse(""), Err(ColorParseError::Empty));
    assert_eq!(parse("   "), Err(ColorParseError::Empty));
    assert_eq!(parse("#"), Err(ColorParseError::InvalidLength(0)));
    assert_eq!(parse("#12345"), Err(ColorParseError::InvalidLength(5)));
    assert_eq!(parse("#123456789"), Err(ColorParseError::InvalidLength(9)));
    assert_eq!(parse("#12g456"), Err(ColorParseError::InvalidHexDigit('g')));
    assert_eq!(parse("#ff00é0"), Err(ColorParseError::InvalidHexDigit('é')));
    assert_eq!(
        parse("rebeccapurple"),
        Err(ColorParseError::UnknownName("rebeccapurple".to_string()))
    );
}

#[test_log::test]
fn test_css_functions_are_rejected() {
    assert!(parse("rgb(255, 0, 0)").is_err());
}

// --- Formatting ---

#[test_log::test]
fn test_format_pads_to_layout_width() {
    assert_eq!(format_packed(0xFF, ChannelLayout::Rgb, HexCase::Lower), "0000ff");
    assert_eq!(format_packed(0xFF, ChannelLayout::Rgba, HexCase::Lower), "000000ff");
    assert_eq!(format_packed(0xABCDEF, ChannelLayout::Argb, HexCase::Upper), "00ABCDEF");
}

#[test_log::test]
fn test_format_negative_is_twos_complement() {
    assert_eq!(
        format_packed(-1, ChannelLayout::Rgb, HexCase::Lower),
        "ffffffffffffffff"
    );
}
