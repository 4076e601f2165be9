//! This file defines [`RGBColor`], the color that goes into and comes out of every conversion: three
//! integer channels, 0-255 for any color sampled off a screen. Conversions don't clamp their
//! results, so channels of a computed color can fall outside that range (YIQ round trips can
//! overshoot, and nothing stops an expression from writing `rgb(r * 2, g, b)`); the type uses `i64`
//! so those values survive for the caller to inspect.

use std::fmt;
use std::str::FromStr;

use crate::colors::{ColorModel, HSVColor};
use crate::coord::Coord;
use crate::error::{EvalError, HexParseError};
use crate::hex::parse_hex;
use crate::number::float_to_int;

/// A color with red, green, and blue channels, nominally in 0-255.
/// # Example
///
/// ```
/// # use chameleon::color::RGBColor;
/// let color: RGBColor = "#ff0033".parse().unwrap();
/// assert_eq!(color, RGBColor::new(255, 0, 51));
/// assert_eq!(color.to_string(), "#ff0033");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: i64,
    /// The green channel.
    pub g: i64,
    /// The blue channel.
    pub b: i64,
}

impl RGBColor {
    /// Makes a new color from its channels.
    pub fn new(r: i64, g: i64, b: i64) -> RGBColor {
        RGBColor { r, g, b }
    }

    /// Whether every channel is in 0-255.
    pub fn in_range(&self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0..=255).contains(c))
    }

    /// The color with every channel divided by 255, ready for conversion math.
    pub fn to_coord(&self) -> Coord {
        Coord::new(self.r as f64, self.g as f64, self.b as f64).map(|c| c / 255.0)
    }

    /// The inverse of [`to_coord`](RGBColor::to_coord): multiplies each channel by 255 and
    /// truncates toward zero. Values outside [0, 1] give channels outside 0-255, which are kept;
    /// infinite or NaN channels are a domain error.
    pub fn from_coord(c: Coord) -> Result<RGBColor, EvalError> {
        let to_channel = |c: f64| float_to_int((c * 255.0).trunc());
        Ok(RGBColor {
            r: to_channel(c.x)?,
            g: to_channel(c.y)?,
            b: to_channel(c.z)?,
        })
    }

    /// Lightens a dark color or darkens a light one by `percent` of its HSV value, keeping the
    /// result in range. Colors with a value above one half get darker. Useful for drawing a border
    /// that stands out against the color it surrounds.
    ///
    /// ```
    /// # use chameleon::color::RGBColor;
    /// assert_eq!(RGBColor::new(255, 0, 0).adjust_brightness(45.), RGBColor::new(140, 0, 0));
    /// assert_eq!(RGBColor::new(100, 100, 100).adjust_brightness(45.), RGBColor::new(145, 145, 145));
    /// ```
    pub fn adjust_brightness(&self, percent: f64) -> RGBColor {
        let mut hsv = HSVColor::from_rgb(self.to_coord());
        let part = hsv.v * percent / 100.0;
        hsv.v = if hsv.v > 0.5 {
            (hsv.v - part).max(0.0)
        } else {
            (hsv.v + part).min(1.0)
        };
        let rgb = hsv.to_rgb();
        // channels are in [0, 1] here, so the casts can't go out of range
        let to_channel = |c: f64| (c * 255.0).trunc() as i64;
        RGBColor::new(to_channel(rgb.x), to_channel(rgb.y), to_channel(rgb.z))
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor::new(rgb.0 as i64, rgb.1 as i64, rgb.2 as i64)
    }
}

/// Writes a channel as at least two hex digits. Negative channels get a leading minus instead of
/// wrapping around.
fn write_channel(f: &mut fmt::Formatter, c: i64) -> fmt::Result {
    if c < 0 {
        write!(f, "-{:x}", c.unsigned_abs())
    } else {
        write!(f, "{:02x}", c)
    }
}

impl fmt::Display for RGBColor {
    /// Formats as `#rrggbb` in lowercase hex.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#")?;
        write_channel(f, self.r)?;
        write_channel(f, self.g)?;
        write_channel(f, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<RGBColor, HexParseError> {
        parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_normalization_round_trips() {
        for c in 0..=255 {
            let color = RGBColor::new(c, 255 - c, c / 2);
            assert_eq!(RGBColor::from_coord(color.to_coord()), Ok(color));
        }
    }

    #[test]
    fn test_denormalization_truncates_without_clamping() {
        assert_eq!(
            RGBColor::from_coord(Coord::new(0.999, -0.01, 1.2)),
            Ok(RGBColor::new(254, -2, 306))
        );
        assert!(RGBColor::from_coord(Coord::new(f64::NAN, 0., 0.)).is_err());
        assert!(RGBColor::from_coord(Coord::new(0., f64::INFINITY, 0.)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RGBColor::new(0, 10, 255).to_string(), "#000aff");
        assert_eq!(RGBColor::new(-1, 300, 5).to_string(), "#-112c05");
        assert!(!RGBColor::new(-1, 300, 5).in_range());
        assert!(RGBColor::new(0, 128, 255).in_range());
    }

    #[test]
    fn test_adjust_brightness() {
        assert_eq!(RGBColor::new(0, 0, 0).adjust_brightness(45.), RGBColor::new(0, 0, 0));
        assert_eq!(RGBColor::new(40, 80, 200).adjust_brightness(45.), RGBColor::new(21, 43, 109));
    }
}
