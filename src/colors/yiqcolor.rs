//! This module implements YIQ, the color space of NTSC television: `y` is luma, and `i` and `q` are
//! two chroma axes (roughly orange-blue and purple-green). It's a linear transform of RGB, so
//! conversion is a matrix multiplication each way.
//!
//! The two matrices here are only approximately inverse to each other, and YIQ can describe colors
//! outside of the RGB cube, so converting back may land slightly outside [0, 1]. Nothing is clamped:
//! callers see exactly what the arithmetic produced.

use crate::colors::ColorModel;
use crate::coord::Coord;

/// A color in the YIQ space. Components are declared as-is, with no scaling.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YIQColor {
    /// Luma, in [0, 1].
    pub y: f64,
    /// In-phase chroma, roughly in [-0.6, 0.6].
    pub i: f64,
    /// Quadrature chroma, roughly in [-0.53, 0.53].
    pub q: f64,
}

impl ColorModel for YIQColor {
    fn from_rgb(rgb: Coord) -> YIQColor {
        let (r, g, b) = (rgb.x, rgb.y, rgb.z);
        YIQColor {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            i: 0.596 * r - 0.274 * g - 0.321 * b,
            q: 0.211 * r - 0.523 * g + 0.312 * b,
        }
    }

    fn to_rgb(&self) -> Coord {
        let (y, i, q) = (self.y, self.i, self.q);
        Coord::new(
            y + 0.956 * i + 0.621 * q,
            y - 0.272 * i - 0.647 * q,
            y - 1.105 * i + 1.702 * q,
        )
    }
}

impl From<Coord> for YIQColor {
    fn from(c: Coord) -> YIQColor {
        YIQColor {
            y: c.x,
            i: c.y,
            q: c.z,
        }
    }
}

impl From<YIQColor> for Coord {
    fn from(yiq: YIQColor) -> Coord {
        Coord {
            x: yiq.y,
            y: yiq.i,
            z: yiq.q,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_gray_has_no_chroma() {
        let gray = YIQColor::from_rgb(Coord::new(0.5, 0.5, 0.5));
        assert!((gray.y - 0.5).abs() <= 1e-12);
        assert!(gray.i.abs() <= 1e-3);
        assert!(gray.q.abs() <= 1e-3);
    }

    #[test]
    fn test_round_trip_is_close_but_unclamped() {
        let white = YIQColor::from_rgb(Coord::new(1., 1., 1.)).to_rgb();
        for axis in 0..3 {
            assert!((white[axis] - 1.).abs() <= 1e-2);
        }
        // pure blue overshoots slightly on the way back
        let blue = YIQColor::from_rgb(Coord::new(0., 0., 1.)).to_rgb();
        assert!((blue.z - 1.).abs() <= 1e-2);
        let out_of_gamut = YIQColor { y: 1., i: 0.5, q: 0. }.to_rgb();
        assert!(out_of_gamut.x > 1.);
    }
}
