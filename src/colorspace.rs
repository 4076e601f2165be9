//! This module provides [`ColorSpace`], the descriptor for each color space a conversion expression
//! can declare variables in, as well as a table of all of them. A descriptor knows its name, its
//! three component letters (the letters of the name, in order), and four pure functions:
//!
//! - *forward*: normalized RGB to the space's normalized components;
//! - *backward*: the space's normalized components to normalized RGB;
//! - *encode*: normalized components to external units, the values variables are declared with;
//! - *decode*: external units back to normalized components.
//!
//! External units per space:
//!
//! | Space | Components | External units |
//! | --- | --- | --- |
//! | `rgb` | `r`, `g`, `b` | integers 0-255, truncated |
//! | `hls` | `h`, `l`, `s` | hue in degrees [0, 360); `l` and `s` as fractions in [0, 1] |
//! | `hsv` | `h`, `s`, `v` | hue in degrees [0, 360); `s` and `v` as fractions in [0, 1] |
//! | `yiq` | `y`, `i`, `q` | unscaled |

use std::fmt;

use crate::color::RGBColor;
use crate::colors::{ColorModel, HLSColor, HSVColor, UnitRGBColor, YIQColor};
use crate::coord::Coord;
use crate::error::EvalError;
use crate::number::Number;

/// One of the four color spaces conversion expressions can use. There are no others.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Red, green, blue.
    Rgb,
    /// Hue, lightness, saturation.
    Hls,
    /// Hue, saturation, value.
    Hsv,
    /// Luma and two chroma axes.
    Yiq,
}

/// Every color space, in the order they're documented.
pub static COLOR_SPACES: [ColorSpace; 4] =
    [ColorSpace::Rgb, ColorSpace::Hls, ColorSpace::Hsv, ColorSpace::Yiq];

fn forward_with<T: ColorModel>(rgb: Coord) -> Coord {
    T::from_rgb(rgb).into()
}

fn backward_with<T: ColorModel>(c: Coord) -> Coord {
    T::from(c).to_rgb()
}

fn encode_with<T: ColorModel>(c: Coord) -> [Number; 3] {
    T::from(c).to_external()
}

fn decode_with<T: ColorModel>(components: [f64; 3]) -> Coord {
    T::from_external(components).into()
}

impl ColorSpace {
    /// The name expressions refer to this space by, such as `"hls"`.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hls => "hls",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Yiq => "yiq",
        }
    }

    /// Looks up a space by its name. Names are case-sensitive.
    ///
    /// ```
    /// # use chameleon::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_name("hsv"), Some(ColorSpace::Hsv));
    /// assert_eq!(ColorSpace::from_name("HSV"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<ColorSpace> {
        COLOR_SPACES.iter().cloned().find(|space| space.name() == name)
    }

    /// The letters the space's components are declared under, in component order.
    pub fn letters(self) -> [char; 3] {
        let mut letters = [' '; 3];
        for (slot, letter) in letters.iter_mut().zip(self.name().chars()) {
            *slot = letter;
        }
        letters
    }

    /// Converts normalized RGB into this space's normalized components.
    pub fn forward(self, rgb: Coord) -> Coord {
        match self {
            ColorSpace::Rgb => forward_with::<UnitRGBColor>(rgb),
            ColorSpace::Hls => forward_with::<HLSColor>(rgb),
            ColorSpace::Hsv => forward_with::<HSVColor>(rgb),
            ColorSpace::Yiq => forward_with::<YIQColor>(rgb),
        }
    }

    /// Converts this space's normalized components into normalized RGB. The result isn't clamped.
    pub fn backward(self, c: Coord) -> Coord {
        match self {
            ColorSpace::Rgb => backward_with::<UnitRGBColor>(c),
            ColorSpace::Hls => backward_with::<HLSColor>(c),
            ColorSpace::Hsv => backward_with::<HSVColor>(c),
            ColorSpace::Yiq => backward_with::<YIQColor>(c),
        }
    }

    /// Scales normalized components into external units.
    pub fn encode_external(self, c: Coord) -> [Number; 3] {
        match self {
            ColorSpace::Rgb => encode_with::<UnitRGBColor>(c),
            ColorSpace::Hls => encode_with::<HLSColor>(c),
            ColorSpace::Hsv => encode_with::<HSVColor>(c),
            ColorSpace::Yiq => encode_with::<YIQColor>(c),
        }
    }

    /// Scales components in external units back to normalized ones.
    pub fn decode_external(self, components: [f64; 3]) -> Coord {
        match self {
            ColorSpace::Rgb => decode_with::<UnitRGBColor>(components),
            ColorSpace::Hls => decode_with::<HLSColor>(components),
            ColorSpace::Hsv => decode_with::<HSVColor>(components),
            ColorSpace::Yiq => decode_with::<YIQColor>(components),
        }
    }

    /// The components of `color` in this space, in external units: the values its variables get
    /// declared with.
    ///
    /// ```
    /// # use chameleon::colorspace::ColorSpace;
    /// # use chameleon::color::RGBColor;
    /// # use chameleon::number::Number;
    /// let red = RGBColor::new(255, 0, 0);
    /// assert_eq!(
    ///     ColorSpace::Hsv.components(&red),
    ///     [Number::Float(0.), Number::Float(1.), Number::Float(1.)]
    /// );
    /// ```
    pub fn components(self, color: &RGBColor) -> [Number; 3] {
        self.encode_external(self.forward(color.to_coord()))
    }

    /// Converts components in external units back to an RGB color. This is what calling a color
    /// space in an expression does, as in `hls(h + 180, l, s)`. Out-of-range channels are kept.
    pub fn to_rgb(self, components: [f64; 3]) -> Result<RGBColor, EvalError> {
        RGBColor::from_coord(self.backward(self.decode_external(components)))
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_letters_follow_names() {
        assert_eq!(ColorSpace::Rgb.letters(), ['r', 'g', 'b']);
        assert_eq!(ColorSpace::Hls.letters(), ['h', 'l', 's']);
        assert_eq!(ColorSpace::Hsv.letters(), ['h', 's', 'v']);
        assert_eq!(ColorSpace::Yiq.letters(), ['y', 'i', 'q']);
    }

    #[test]
    fn test_every_space_round_trips_rgb() {
        let colors = [
            RGBColor::new(10, 20, 30),
            RGBColor::new(255, 0, 0),
            RGBColor::new(128, 128, 128),
            RGBColor::new(3, 200, 97),
        ];
        for space in COLOR_SPACES.iter() {
            for color in colors.iter() {
                let components: Vec<f64> =
                    space.components(color).iter().map(|c| c.as_f64()).collect();
                let back = space
                    .to_rgb([components[0], components[1], components[2]])
                    .unwrap();
                // YIQ's matrices are only approximately inverse
                let tolerance = if *space == ColorSpace::Yiq { 2 } else { 1 };
                assert!((back.r - color.r).abs() <= tolerance, "{} {:?} {:?}", space, color, back);
                assert!((back.g - color.g).abs() <= tolerance, "{} {:?} {:?}", space, color, back);
                assert!((back.b - color.b).abs() <= tolerance, "{} {:?} {:?}", space, color, back);
            }
        }
    }

    #[test]
    fn test_rgb_components_are_integers() {
        assert_eq!(
            ColorSpace::Rgb.components(&RGBColor::new(1, 2, 3)),
            [Number::Int(1), Number::Int(2), Number::Int(3)]
        );
    }

    #[test]
    fn test_hls_hue_rotation() {
        let red = RGBColor::new(255, 0, 0);
        let hls = ColorSpace::Hls.components(&red);
        assert_eq!(hls, [Number::Float(0.), Number::Float(0.5), Number::Float(1.)]);
        assert_eq!(ColorSpace::Hls.to_rgb([180., 0.5, 1.]), Ok(RGBColor::new(0, 255, 255)));
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(ColorSpace::from_name("yiq").map(|s| s.to_string()), Some("yiq".to_string()));
        assert_eq!(ColorSpace::from_name("lab"), None);
    }
}
