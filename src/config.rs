//! Settings for a conversion session, as an application would load them from its options or a
//! config file, and the [`Conversion`] they build. A session has one expression and a fixed list of
//! reference colors; every color the user picks is run through the expression with the references
//! appended after it.
//!
//! ```
//! # use chameleon::config::ConversionConfig;
//! # use chameleon::color::RGBColor;
//! let config = ConversionConfig {
//!     conversion: "rgb(r1, g, b)".to_string(),
//!     colors: vec!["#800000".to_string()],
//! };
//! let conversion = config.build().unwrap();
//! assert_eq!(conversion.apply(RGBColor::new(1, 2, 3)), Ok(RGBColor::new(128, 2, 3)));
//! ```

use crate::calculator::Calculator;
use crate::color::RGBColor;
use crate::error::{Error, EvalError};
use crate::hex::parse_hex_rgb;

/// The expression used when none is configured. It leaves colors unchanged.
pub const DEFAULT_CONVERSION: &str = "rgb(r, g, b)";

/// The options of a conversion session. Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// The conversion expression.
    pub conversion: String,
    /// Reference colors as `#RRGGBB` strings, available as the `1`, `2`, ... suffixed variables.
    /// Empty strings are skipped.
    pub colors: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> ConversionConfig {
        ConversionConfig {
            conversion: DEFAULT_CONVERSION.to_string(),
            colors: vec![],
        }
    }
}

impl ConversionConfig {
    /// Parses the expression and the reference colors. Either failing means the configuration is
    /// unusable, so this is where those errors surface, before any color is converted.
    pub fn build(&self) -> Result<Conversion, Error> {
        let calculator = Calculator::new(&self.conversion)?;
        let references = parse_hex_rgb(&self.colors)?;
        Ok(Conversion::new(calculator, references))
    }
}

/// A parsed expression together with the reference colors it's evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    calculator: Calculator,
    references: Vec<RGBColor>,
}

impl Conversion {
    /// Pairs `calculator` with the reference colors, which stay the same for every color converted.
    pub fn new(calculator: Calculator, references: Vec<RGBColor>) -> Conversion {
        Conversion {
            calculator,
            references,
        }
    }

    /// Converts `current`, passing the reference colors after it.
    pub fn apply(&self, current: RGBColor) -> Result<RGBColor, EvalError> {
        let mut colors = Vec::with_capacity(self.references.len() + 1);
        colors.push(current);
        colors.extend_from_slice(&self.references);
        self.calculator.evaluate(&colors)
    }

    /// The parsed expression.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The reference colors, in order.
    pub fn references(&self) -> &[RGBColor] {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::error::{HexParseError, ParseError};

    #[test]
    fn test_defaults() {
        let config: ConversionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConversionConfig::default());
        let conversion = config.build().unwrap();
        assert_eq!(conversion.calculator().expression(), DEFAULT_CONVERSION);
        assert!(conversion.references().is_empty());
        assert_eq!(
            conversion.apply(RGBColor::new(12, 34, 56)),
            Ok(RGBColor::new(12, 34, 56))
        );
    }

    #[test]
    fn test_deserialize() {
        let config: ConversionConfig = serde_json::from_str(
            r##"{"conversion": "hls(h, l1, s)", "colors": ["#000000", "", "#ffffff"]}"##,
        )
        .unwrap();
        let conversion = config.build().unwrap();
        assert_eq!(
            conversion.references(),
            &[RGBColor::new(0, 0, 0), RGBColor::new(255, 255, 255)]
        );
        assert_eq!(conversion.apply(RGBColor::new(255, 0, 0)), Ok(RGBColor::new(0, 0, 0)));
    }

    #[test]
    fn test_references_follow_the_current_color() {
        let config = ConversionConfig {
            conversion: "rgb(r2, g1, b)".to_string(),
            colors: vec!["#0a0b0c".to_string(), "#141516".to_string()],
        };
        let conversion = config.build().unwrap();
        assert_eq!(conversion.apply(RGBColor::new(1, 2, 3)), Ok(RGBColor::new(20, 11, 3)));
        assert_eq!(conversion.apply(RGBColor::new(4, 5, 6)), Ok(RGBColor::new(20, 11, 6)));
    }

    #[test]
    fn test_build_errors() {
        let bad_expression = ConversionConfig {
            conversion: "rgb(r,, b)".to_string(),
            colors: vec![],
        };
        assert!(matches!(
            bad_expression.build(),
            Err(Error::Parse(ParseError::UnexpectedToken { .. }))
        ));
        let bad_color = ConversionConfig {
            conversion: DEFAULT_CONVERSION.to_string(),
            colors: vec!["red".to_string()],
        };
        assert_eq!(
            bad_color.build(),
            Err(Error::Hex(HexParseError::InvalidHex("red".to_string())))
        );
    }
}
