// src/main.rs

//! `colorconv`: prints every representation of the colors given on the
//! command line.
//!
//! ```text
//! colorconv [--upper] <COLOR>...
//! ```
//!
//! A `COLOR` is a hex string (`#ff8000`, `ff8000ff`, `#f80`), a color name
//! (`navy`), or a packed integer written `0x...` or in decimal. Packed
//! integers of up to six hex digits are read as RGB, longer ones as RGBA.
//! An all-digit argument is always decimal; write `#123456` for hex.

use anyhow::{bail, Context};
use log::{debug, error, info};

use color_convert::config::{ParsingConfig, CONFIG};
use color_convert::html::parse_with;
use color_convert::{
    from_rgb_value, from_rgba_value, to_html_string, ChannelLayout, Color, HexCase,
};

/// Parses one command line argument into a color.
fn parse_arg(arg: &str, parsing: &ParsingConfig) -> anyhow::Result<Color> {
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        // from_str_radix would accept a sign
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("invalid packed color '{}'", arg);
        }
        let value = i64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid packed color '{}'", arg))?;
        return Ok(packed_to_color(value, hex.len() > 6));
    }
    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        let value: i64 = arg
            .parse()
            .with_context(|| format!("invalid packed color '{}'", arg))?;
        return Ok(packed_to_color(value, value > 0xFF_FFFF));
    }
    parse_with(arg, parsing).with_context(|| format!("invalid color '{}'", arg))
}

fn packed_to_color(value: i64, has_alpha: bool) -> Color {
    if has_alpha {
        from_rgba_value(value)
    } else {
        from_rgb_value(value)
    }
}

fn describe(arg: &str, color: Color, case: HexCase, hash_prefix: bool) -> String {
    let prefix = if hash_prefix { "#" } else { "" };
    let hex = |layout| format!("{}{}", prefix, to_html_string(color, layout, case));
    format!(
        "{}\n  channels: r={:.4} g={:.4} b={:.4} a={:.4}\n  rgb:  {}\n  rgba: {}\n  argb: {}",
        arg,
        color.r,
        color.g,
        color.b,
        color.a,
        hex(ChannelLayout::Rgb),
        hex(ChannelLayout::Rgba),
        hex(ChannelLayout::Argb),
    )
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut case = CONFIG.output.case;
    let mut inputs = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--upper" => case = HexCase::Upper,
            "--lower" => case = HexCase::Lower,
            _ => inputs.push(arg),
        }
    }
    if inputs.is_empty() {
        bail!("usage: colorconv [--upper|--lower] <COLOR>...");
    }
    debug!("Converting {} color(s) with {:?} output", inputs.len(), case);

    let mut failures = 0;
    for arg in &inputs {
        match parse_arg(arg, &CONFIG.parsing) {
            Ok(color) => println!("{}", describe(arg, color, case, CONFIG.output.hash_prefix)),
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} colors could not be parsed", failures, inputs.len());
    }
    info!("Converted {} color(s).", inputs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(arg: &str) -> anyhow::Result<Color> {
        parse_arg(arg, &ParsingConfig::default())
    }

    #[test_log::test]
    fn test_parse_arg_forms() {
        assert_eq!(parse_default("0xFF8000").unwrap(), from_rgb_value(0xFF8000));
        assert_eq!(parse_default("0xFF8000FF").unwrap(), from_rgba_value(0xFF8000FF));
        assert_eq!(parse_default("16711680").unwrap(), Color::RED);
        assert_eq!(parse_default("#ff0000").unwrap(), Color::RED);
        assert_eq!(parse_default("red").unwrap(), Color::RED);
        assert!(parse_default("0xnope").is_err());
        assert!(parse_default("#12").is_err());
    }

    #[test_log::test]
    fn test_packed_arg_rejects_sign() {
        assert!(parse_default("0x-1").is_err());
        assert!(parse_default("0x+FF").is_err());
        assert!(parse_default("0x").is_err());
    }

    #[test_log::test]
    fn test_parse_arg_honours_parsing_config() {
        let strict = ParsingConfig {
            allow_named: false,
            allow_short_form: false,
            ..ParsingConfig::default()
        };
        assert!(parse_arg("red", &strict).is_err());
        assert!(parse_arg("#f00", &strict).is_err());
        assert_eq!(parse_arg("#ff0000", &strict).unwrap(), Color::RED);
    }

    #[test_log::test]
    fn test_describe_lists_layouts() {
        let text = describe("red", Color::RED, HexCase::Upper, true);
        assert!(text.contains("rgb:  #FF0000"));
        assert!(text.contains("rgba: #FF0000FF"));
        assert!(text.contains("argb: #FFFF0000"));
    }
}
