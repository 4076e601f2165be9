//! This module provides [`Calculator`], the entry point for turning one color into another with an
//! expression. An expression is parsed once, when the calculator is built, and can then be
//! evaluated any number of times against different colors, each evaluation getting its own fresh
//! set of variables.
//!
//! An expression names the color space it works in by calling it: `rgb(255 - r, 255 - g, 255 -
//! b)` inverts a color, `hls(h + 180, l, s)` rotates its hue halfway around. Mentioning the space
//! declares its component variables, one per letter of its name, for the current color (`r`, or
//! `r0`) and for each reference color after it (`r1`, `r2`, and so on). Components come in these
//! units:
//!
//! - `rgb`: integers from 0 to 255;
//! - `hls` and `hsv`: hue in degrees, the other two as fractions from 0 to 1;
//! - `yiq`: unscaled.
//!
//! The functions of the usual math library (`sqrt`, `floor`, `atan2`, `log`, ...) and the constants
//! `pi` and `e` are available too.

use std::str::FromStr;

use tracing::debug;

use crate::ast::Expr;
use crate::color::RGBColor;
use crate::error::{EvalError, ParseError};
use crate::eval::{Evaluator, Value};
use crate::parser::parse;

/// A parsed conversion expression, ready to be applied to colors.
///
/// # Example
/// ```
/// # use chameleon::calculator::Calculator;
/// # use chameleon::color::RGBColor;
/// let invert = Calculator::new("rgb(255 - r, 255 - g, 255 - b)").unwrap();
/// assert_eq!(
///     invert.evaluate(&[RGBColor::new(10, 20, 30)]),
///     Ok(RGBColor::new(245, 235, 225))
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    expression: String,
    tree: Expr,
}

impl Calculator {
    /// Parses `expression`. Syntax errors are reported here, never during evaluation.
    pub fn new(expression: &str) -> Result<Calculator, ParseError> {
        let tree = parse(expression)?;
        debug!(expression, depth = tree.depth(), "parsed conversion");
        Ok(Calculator {
            expression: expression.to_string(),
            tree,
        })
    }

    /// The expression as it was written.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The parsed expression.
    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// Evaluates the expression. `colors` holds the current color first, followed by any reference
    /// colors. The result isn't clamped: channels outside 0-255 are returned as computed.
    pub fn evaluate(&self, colors: &[RGBColor]) -> Result<RGBColor, EvalError> {
        if colors.is_empty() {
            return Err(EvalError::NoColors);
        }
        let mut evaluator = Evaluator::new(colors);
        let color = match evaluator.eval(&self.tree)? {
            Value::Color(color) => color,
            other => return Err(EvalError::NotAColor(other.kind())),
        };
        debug!(
            expression = %self.expression,
            current = %colors[0],
            result = %color,
            "evaluated conversion"
        );
        Ok(color)
    }
}

impl FromStr for Calculator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Calculator, ParseError> {
        Calculator::new(s)
    }
}
