//! This module contains the color models conversion expressions can declare components in, one type
//! per model, each implementing [`ColorModel`]. For convenience, each type is imported into this
//! module's namespace directly.
//!
//! All of these are simple transformations of RGB, so conversions go straight to and from RGB with
//! normalized components (every channel in [0, 1]), no intermediate space involved.

pub mod hlscolor;
pub mod hsvcolor;
pub mod unitrgbcolor;
pub mod yiqcolor;

pub use self::hlscolor::HLSColor;
pub use self::hsvcolor::HSVColor;
pub use self::unitrgbcolor::UnitRGBColor;
pub use self::yiqcolor::YIQColor;

use crate::coord::Coord;
use crate::number::Number;

/// A color model that can be converted to and from normalized RGB, and whose three components can
/// be expressed in *external units*: the ranges people actually write in expressions, like degrees
/// for hue. The components in a `Coord` are always in the order of the model's name, so `HLSColor`
/// maps `h` to `x`, `l` to `y`, and `s` to `z`.
pub trait ColorModel: From<Coord> + Into<Coord> + Copy {
    /// Converts from RGB with every channel in [0, 1].
    fn from_rgb(rgb: Coord) -> Self;

    /// Converts to RGB with every channel nominally in [0, 1]. Models that can describe colors
    /// outside the RGB cube return values outside that range rather than clamping.
    fn to_rgb(&self) -> Coord;

    /// The components in external units. By default these are the normalized components, as
    /// floats.
    fn to_external(&self) -> [Number; 3] {
        let c: Coord = (*self).into();
        [Number::Float(c.x), Number::Float(c.y), Number::Float(c.z)]
    }

    /// The inverse of [`to_external`](ColorModel::to_external).
    fn from_external(components: [f64; 3]) -> Self {
        Self::from(Coord::from(components))
    }
}

/// The hue shared by HLS and HSV, in [0, 1): which side of the RGB hexagon the color lies on, and
/// how far along it. Gray, where the largest and smallest channels match, has hue 0.
pub(crate) fn hexcone_hue(rgb: Coord) -> f64 {
    let max_c = rgb.max();
    let min_c = rgb.min();
    if max_c == min_c {
        return 0.0;
    }
    let range = max_c - min_c;
    let rc = (max_c - rgb.x) / range;
    let gc = (max_c - rgb.y) / range;
    let bc = (max_c - rgb.z) / range;
    let h = if rgb.x == max_c {
        bc - gc
    } else if rgb.y == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

/// Scales a normalized hue to degrees, leaving the other two components as fractions.
pub(crate) fn hue_to_degrees(c: Coord) -> [Number; 3] {
    [
        Number::Float(c.x * 360.0),
        Number::Float(c.y),
        Number::Float(c.z),
    ]
}

/// Scales a hue in degrees back to [0, 1] turns, leaving the other two components alone.
pub(crate) fn hue_from_degrees(components: [f64; 3]) -> Coord {
    Coord::new(components[0] / 360.0, components[1], components[2])
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hexcone_hue_primaries() {
        assert_eq!(hexcone_hue(Coord::new(1., 0., 0.)), 0.0);
        assert!((hexcone_hue(Coord::new(0., 1., 0.)) - 1. / 3.).abs() <= 1e-12);
        assert!((hexcone_hue(Coord::new(0., 0., 1.)) - 2. / 3.).abs() <= 1e-12);
        // magenta is past blue, just short of wrapping around to red
        assert!((hexcone_hue(Coord::new(1., 0., 1.)) - 5. / 6.).abs() <= 1e-12);
        assert_eq!(hexcone_hue(Coord::new(0.4, 0.4, 0.4)), 0.0);
    }
}
