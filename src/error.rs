//! The errors a conversion can run into. Parsing failures ([`ParseError`]) happen once, when a
//! [`Calculator`](../calculator/struct.Calculator.html) is built, and are fatal: an expression that
//! doesn't parse is a configuration mistake. Evaluation failures ([`EvalError`]) can happen on any
//! call to `evaluate` and are never recovered from or replaced by a default value.

use thiserror::Error;

/// A syntax error in a conversion expression. Positions are byte offsets into the expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression is empty or only whitespace.
    #[error("empty expression")]
    Empty,
    /// A character that can't start any token.
    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedCharacter {
        /// Where the character is.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// A token in a place the grammar doesn't allow it.
    #[error("unexpected {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        /// Where the token starts.
        position: usize,
        /// The token as written.
        found: String,
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// The expression ended too early.
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A numeric literal that can't be represented, such as an integer past 64 bits.
    #[error("invalid number {literal:?} at position {position}")]
    InvalidNumber {
        /// Where the literal starts.
        position: usize,
        /// The literal as written.
        literal: String,
    },
    /// Parentheses, calls or operators nested past
    /// [`MAX_DEPTH`](../parser/constant.MAX_DEPTH.html).
    #[error("expression nested too deeply at position {position}")]
    TooDeep {
        /// Where the limit was reached.
        position: usize,
    },
}

/// An error raised while evaluating a parsed expression against a set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A name that is neither a declared color component, a constant, a function, nor a color
    /// space.
    #[error("name {0:?} is not defined")]
    UndefinedVariable(String),
    /// Syntax the parser accepts but the calculator can't compute with, like `**`.
    #[error("can't calculate with {0}")]
    UnsupportedConstruct(String),
    /// An operation applied to the wrong kind of value: bitwise operators on floats, calling a
    /// number, adding a color, and so on.
    #[error("type error: {0}")]
    Type(String),
    /// A mathematically undefined operation: division by zero, `log(-1)`, integer overflow.
    #[error("math domain error: {0}")]
    Domain(String),
    /// A function called with the wrong number of arguments.
    #[error("{name}() takes {expected} argument(s), {found} given")]
    Arity {
        /// The function's name.
        name: String,
        /// A description of the accepted argument counts, such as "3" or "at least 2".
        expected: String,
        /// How many were passed.
        found: usize,
    },
    /// The whole expression evaluated to something other than a color, e.g. `r + 1` instead of
    /// `rgb(r + 1, g, b)`.
    #[error("expression evaluates to {0}, not a color; wrap it in rgb(), hls(), hsv() or yiq()")]
    NotAColor(&'static str),
    /// No input colors were passed to an evaluation.
    #[error("no input colors given")]
    NoColors,
}

/// An error parsing a `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// The string is not a `#` followed by exactly six hex digits.
    #[error("invalid hex color {0:?}, expected the form #RRGGBB")]
    InvalidHex(String),
}

/// Any error this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`EvalError`].
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// See [`HexParseError`].
    #[error(transparent)]
    Hex(#[from] HexParseError),
}
