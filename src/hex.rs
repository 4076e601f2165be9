//! Parsing of `#RRGGBB` hex colors, the form reference colors are usually handed over in (from a
//! command line, a config file, or a palette). Only the six-digit form is accepted: no shorthand
//! `#rgb`, no alpha, no missing `#`. Digits can be either case.

use regex::Regex;

use crate::color::RGBColor;
use crate::error::HexParseError;

lazy_static! {
    static ref HEX_RE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// Parses a single `#RRGGBB` string into a color.
pub fn parse_hex(hex: &str) -> Result<RGBColor, HexParseError> {
    let caps = HEX_RE
        .captures(hex)
        .ok_or_else(|| HexParseError::InvalidHex(hex.to_string()))?;
    // the regex guarantees two hex digits per group
    let channel = |i: usize| i64::from_str_radix(&caps[i], 16).unwrap_or_default();
    Ok(RGBColor::new(channel(1), channel(2), channel(3)))
}

/// Parses any number of `#RRGGBB` strings into colors, in order. Empty strings are skipped rather
/// than treated as errors, so unset options can be passed straight through.
///
/// # Example
/// ```
/// # use chameleon::hex::parse_hex_rgb;
/// # use chameleon::color::RGBColor;
/// let colors = parse_hex_rgb(&["#ff0033", "", "#000000"]).unwrap();
/// assert_eq!(colors, vec![RGBColor::new(255, 0, 51), RGBColor::new(0, 0, 0)]);
/// ```
pub fn parse_hex_rgb<S: AsRef<str>>(hex_colors: &[S]) -> Result<Vec<RGBColor>, HexParseError> {
    hex_colors
        .iter()
        .map(|hex| hex.as_ref())
        .filter(|hex| !hex.is_empty())
        .map(parse_hex)
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0033"), Ok(RGBColor::new(255, 0, 51)));
        assert_eq!(parse_hex("#FfA0c3"), Ok(RGBColor::new(255, 160, 195)));
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb(&["#ff0033"]), Ok(vec![RGBColor::new(255, 0, 51)]));
        assert_eq!(parse_hex_rgb(&[""]), Ok(vec![]));
        let none: [&str; 0] = [];
        assert_eq!(parse_hex_rgb(&none), Ok(vec![]));
        assert_eq!(
            parse_hex_rgb(&["#ff0033".to_string(), "#000000".to_string()]),
            Ok(vec![RGBColor::new(255, 0, 51), RGBColor::new(0, 0, 0)])
        );
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["ff0033", "#ff003", "#ff00331", "#gg0033", "#ff 033", "#f03"].iter() {
            assert_eq!(parse_hex(bad), Err(HexParseError::InvalidHex(bad.to_string())));
        }
        assert!(parse_hex_rgb(&["#000000", "nope"]).is_err());
    }
}
