//! RGB with each channel in [0, 1]. As a color model this is the identity: its components are the
//! normalized channels themselves. What sets it apart is its external units, which are the familiar
//! 0-255 integers, so that an RGB declaration binds `r`, `g`, and `b` as integers that bitwise
//! operators work on.

use crate::colors::ColorModel;
use crate::coord::Coord;
use crate::number::Number;

/// An RGB color with floating-point channels, nominally in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl ColorModel for UnitRGBColor {
    fn from_rgb(rgb: Coord) -> UnitRGBColor {
        UnitRGBColor::from(rgb)
    }

    fn to_rgb(&self) -> Coord {
        (*self).into()
    }

    /// Scales each channel to 0-255 and truncates, giving integers.
    fn to_external(&self) -> [Number; 3] {
        let to_byte = |c: f64| Number::Int((c * 255.0).trunc() as i64);
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    fn from_external(components: [f64; 3]) -> UnitRGBColor {
        UnitRGBColor::from(Coord::from(components).map(|c| c / 255.0))
    }
}

impl From<Coord> for UnitRGBColor {
    fn from(c: Coord) -> UnitRGBColor {
        UnitRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<UnitRGBColor> for Coord {
    fn from(rgb: UnitRGBColor) -> Coord {
        Coord {
            x: rgb.r,
            y: rgb.g,
            z: rgb.b,
        }
    }
}
