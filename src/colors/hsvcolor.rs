//! This module implements the HSV color space, a cousin of HLS. The definition of value differs from
//! lightness: it goes from black to full saturation instead of black to white. That makes value a
//! poor analog of luminance (dark purple has the same value as white), but it makes hue and
//! saturation a bit more meaningful than in HLS. An HSV declaration binds `h`, `s`, and `v`.

use crate::colors::{hexcone_hue, hue_from_degrees, hue_to_degrees, ColorModel};
use crate::coord::Coord;
use crate::number::Number;

/// An HSV color, with every component normalized.
/// # Example
/// Halving the value of a color darkens it without changing its hue.
///
/// ```
/// # use chameleon::colors::{ColorModel, HSVColor};
/// # use chameleon::coord::Coord;
/// let orange = HSVColor::from_rgb(Coord::new(1., 0.5, 0.));
/// let darker = HSVColor { v: orange.v / 2., ..orange };
/// assert_eq!(darker.to_rgb(), Coord::new(0.5, 0.25, 0.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, in [0, 1). Declared in degrees.
    pub h: f64,
    /// The saturation: the distance from the gray of the same value, in [0, 1].
    pub s: f64,
    /// The value: the largest RGB channel, in [0, 1].
    pub v: f64,
}

impl ColorModel for HSVColor {
    fn from_rgb(rgb: Coord) -> HSVColor {
        let max_c = rgb.max();
        let min_c = rgb.min();
        if max_c == min_c {
            return HSVColor {
                h: 0.0,
                s: 0.0,
                v: max_c,
            };
        }
        HSVColor {
            h: hexcone_hue(rgb),
            s: (max_c - min_c) / max_c,
            v: max_c,
        }
    }

    fn to_rgb(&self) -> Coord {
        let (h, s, v) = (self.h, self.s, self.v);
        if s == 0.0 {
            return Coord::new(v, v, v);
        }
        // which side of the hexagon we're on, and how far along it
        let sextant = (h * 6.0).trunc();
        let f = h * 6.0 - sextant;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match (sextant as i64).rem_euclid(6) {
            0 => Coord::new(v, t, p),
            1 => Coord::new(q, v, p),
            2 => Coord::new(p, v, t),
            3 => Coord::new(p, q, v),
            4 => Coord::new(t, p, v),
            _ => Coord::new(v, p, q),
        }
    }

    fn to_external(&self) -> [Number; 3] {
        hue_to_degrees((*self).into())
    }

    fn from_external(components: [f64; 3]) -> HSVColor {
        HSVColor::from(hue_from_degrees(components))
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(hsv: HSVColor) -> Coord {
        Coord {
            x: hsv.h,
            y: hsv.s,
            z: hsv.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsv_rgb_conversion() {
        let red = HSVColor::from_rgb(Coord::new(1., 0., 0.));
        assert_eq!(red, HSVColor { h: 0., s: 1., v: 1. });
        let yellow = HSVColor { h: 1. / 6., s: 1., v: 1. }.to_rgb();
        assert!((yellow.x - 1.).abs() <= 1e-12);
        assert!((yellow.y - 1.).abs() <= 1e-12);
        assert!(yellow.z.abs() <= 1e-12);
    }

    #[test]
    fn test_every_sextant_round_trips() {
        let colors = [
            Coord::new(0.9, 0.5, 0.1),
            Coord::new(0.5, 0.9, 0.1),
            Coord::new(0.1, 0.9, 0.5),
            Coord::new(0.1, 0.5, 0.9),
            Coord::new(0.5, 0.1, 0.9),
            Coord::new(0.9, 0.1, 0.5),
        ];
        for rgb in colors.iter() {
            let back = HSVColor::from_rgb(*rgb).to_rgb();
            for axis in 0..3 {
                assert!((back[axis] - rgb[axis]).abs() <= 1e-12, "{:?} -> {:?}", rgb, back);
            }
        }
    }

    #[test]
    fn test_black_has_zero_value() {
        let black = HSVColor::from_rgb(Coord::new(0., 0., 0.));
        assert_eq!(black, HSVColor { h: 0., s: 0., v: 0. });
        assert_eq!(black.to_rgb(), Coord::new(0., 0., 0.));
    }
}
