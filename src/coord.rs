//! This module contains [`Coord`](coord::Coord), a point in some three-component color space. Every
//! color model in this crate does its conversion math on `Coord`s whose components are normalized:
//! RGB channels and hue both live in [0, 1], for example, rather than 0-255 and 0-360. The
//! human-facing units only show up when components are declared as variables (see
//! [`ColorSpace`](colorspace::ColorSpace)).

use std::ops::Index;

/// A point in a three-component color space. `Coord` has three axes, `x`, `y`, and `z`, with no
/// difference between them beyond convention: any color model that converts to and from a `Coord`
/// matches its components with these axes in the order of the letters in its name. For example,
/// `HLSColor` puts `h` on the x-axis, `l` on the y-axis, and `s` on the z-axis.
///
/// # Example
/// ```
/// # use chameleon::coord::Coord;
/// let point = Coord::new(0.25, 0.5, 1.);
/// assert_eq!(point[1], 0.5);
/// assert_eq!(point.map(|c| c * 2.), Coord::new(0.5, 1., 2.));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// Makes a new point from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Coord {
        Coord { x, y, z }
    }

    /// Applies `f` to every component.
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// The components in axis order.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The largest component.
    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// The smallest component.
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Coord {
        Coord {
            x: c[0],
            y: c[1],
            z: c[2],
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        c.to_array()
    }
}

impl Index<usize> for Coord {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Coord has 3 axes, got index {}", axis),
        }
    }
}
