//! This file implements HLS: hue, lightness, saturation. It's the same cylindrical space usually
//! called HSL, with the components listed in a different order, and that order matters here because
//! it decides which variable is which: an HLS declaration binds `h`, `l`, and `s`.
//!
//! HLS stretches the RGB cube into a double hexcone: lightness runs from black through the fully
//! saturated colors in the middle to white, and saturation is chroma relative to the largest chroma
//! possible at that lightness. That makes very light or very dark colors look highly saturated even
//! when they're close to white or black, but it's cheap to compute and easy to reason about, which
//! is what a color picker wants. Gray has a hue of 0, although any hue would do.

use crate::colors::{hexcone_hue, hue_from_degrees, hue_to_degrees, ColorModel};
use crate::coord::Coord;
use crate::number::Number;

/// A color in the HLS space. All three components are normalized: hue is measured in turns, [0,
/// 1), rather than degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HLSColor {
    /// The hue, in [0, 1). Declared in degrees.
    pub h: f64,
    /// The lightness: the average of the largest and smallest RGB channels, in [0, 1].
    pub l: f64,
    /// The saturation, in [0, 1].
    pub s: f64,
}

impl ColorModel for HLSColor {
    fn from_rgb(rgb: Coord) -> HLSColor {
        let max_c = rgb.max();
        let min_c = rgb.min();
        let l = (min_c + max_c) / 2.0;
        if max_c == min_c {
            return HLSColor { h: 0.0, l, s: 0.0 };
        }
        let range = max_c - min_c;
        let s = if l <= 0.5 {
            range / (max_c + min_c)
        } else {
            range / (2.0 - max_c - min_c)
        };
        HLSColor {
            h: hexcone_hue(rgb),
            l,
            s,
        }
    }

    fn to_rgb(&self) -> Coord {
        if self.s == 0.0 {
            return Coord::new(self.l, self.l, self.l);
        }
        let m2 = if self.l <= 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let m1 = 2.0 * self.l - m2;
        Coord::new(
            hue_channel(m1, m2, self.h + 1.0 / 3.0),
            hue_channel(m1, m2, self.h),
            hue_channel(m1, m2, self.h - 1.0 / 3.0),
        )
    }

    fn to_external(&self) -> [Number; 3] {
        hue_to_degrees((*self).into())
    }

    fn from_external(components: [f64; 3]) -> HLSColor {
        HLSColor::from(hue_from_degrees(components))
    }
}

/// One RGB channel of an HLS color, given the channel's phase-shifted hue. `m1` and `m2` are the
/// smallest and largest channel values the color can have.
fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    let sextant = hue * 6.0;
    if sextant < 1.0 {
        m1 + (m2 - m1) * sextant
    } else if hue < 0.5 {
        m2
    } else if sextant < 4.0 {
        // written as 4 - 6h rather than (2/3 - h) * 6 so the sextant borders come out exact
        m1 + (m2 - m1) * (4.0 - sextant)
    } else {
        m1
    }
}

impl From<Coord> for HLSColor {
    fn from(c: Coord) -> HLSColor {
        HLSColor {
            h: c.x,
            l: c.y,
            s: c.z,
        }
    }
}

impl From<HLSColor> for Coord {
    fn from(hls: HLSColor) -> Coord {
        Coord {
            x: hls.h,
            y: hls.l,
            z: hls.s,
        }
    }
}
