//! This module brings the most common Chameleon functionality under a single namespace, to prevent
//! excessive imports: the [`Calculator`], the [`RGBColor`] it works with, the [`ColorSpace`]
//! descriptors, the hex parsing helper, the configuration types, and the errors. The individual
//! color models in [`colors`](crate::colors) and the pieces of the expression machinery are not
//! included.

pub use crate::calculator::Calculator;
pub use crate::color::RGBColor;
pub use crate::colors::ColorModel;
pub use crate::colorspace::ColorSpace;
pub use crate::config::{Conversion, ConversionConfig};
pub use crate::error::{Error, EvalError, HexParseError, ParseError};
pub use crate::hex::parse_hex_rgb;
