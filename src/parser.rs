//! This file turns conversion expressions into [`Expr`] trees. The grammar is plain arithmetic:
//! numbers, names, calls like `hls(h, l, s)`, parentheses, and the operators below, listed from
//! loosest to tightest binding. Operators on the same level associate to the left, except `**`.
//!
//! | Operators | |
//! | --- | --- |
//! | `\|` | bitwise or |
//! | `^` | bitwise exclusive or |
//! | `&` | bitwise and |
//! | `<<` `>>` | shifts |
//! | `+` `-` | addition, subtraction |
//! | `*` `/` `//` `%` | multiplication, division, floor division, modulo |
//! | `+x` `-x` `~x` | unary operators |
//! | `**` | power, right-associative |
//!
//! Numbers are decimal integers, `0x`/`0o`/`0b` integers, or floats like `1.5`, `.5`, `1.` and
//! `2e-3`. Nothing else is accepted: no comparisons, strings, lists, or assignment.

use regex::Regex;

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::ParseError;
use crate::number::Number;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(
        r"(?x)
        ^(?:
            (?P<space>\s+)
          | (?P<number>
                0[xX][0-9a-fA-F]+
              | 0[oO][0-7]+
              | 0[bB][01]+
              | (?:[0-9]+\.[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?
              | [0-9]+[eE][+-]?[0-9]+
              | [0-9]+
            )
          | (?P<name>[A-Za-z_][A-Za-z0-9_]*)
          | (?P<symbol>\*\*|//|<<|>>|[-+*/%&|^~(),])
        )"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Number),
    Name(String),
    Symbol(&'static str),
}

#[derive(Debug, Clone)]
struct Spanned {
    token: Token,
    position: usize,
    text: String,
}

/// The fixed set of punctuation, so tokens can hold `&'static str`s.
const SYMBOLS: [&str; 16] = [
    "**", "//", "<<", ">>", "-", "+", "*", "/", "%", "&", "|", "^", "~", "(", ")", ",",
];

fn parse_number(text: &str, position: usize) -> Result<Number, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        position,
        literal: text.to_string(),
    };
    let lower = text.to_ascii_lowercase();
    let radix = if lower.starts_with("0x") {
        Some(16)
    } else if lower.starts_with("0o") {
        Some(8)
    } else if lower.starts_with("0b") {
        Some(2)
    } else {
        None
    };
    match radix {
        Some(radix) => i64::from_str_radix(&text[2..], radix)
            .map(Number::Int)
            .map_err(|_| invalid()),
        None if lower.contains(|c: char| c == '.' || c == 'e') => {
            text.parse::<f64>().map(Number::Float).map_err(|_| invalid())
        }
        // leading zeros would read like an old-style octal literal, unless the number is zero
        None if text.starts_with('0') && text.bytes().any(|b| b != b'0') => Err(invalid()),
        None => text.parse::<i64>().map(Number::Int).map_err(|_| invalid()),
    }
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = vec![];
    let mut position = 0;
    while position < input.len() {
        let rest = &input[position..];
        let caps = match TOKEN_RE.captures(rest) {
            Some(caps) => caps,
            None => {
                return Err(ParseError::UnexpectedCharacter {
                    position,
                    found: rest.chars().next().unwrap_or(' '),
                })
            }
        };
        let text = caps.get(0).map_or("", |m| m.as_str());
        let token = if caps.name("space").is_some() {
            None
        } else if caps.name("number").is_some() {
            Some(Token::Number(parse_number(text, position)?))
        } else if caps.name("name").is_some() {
            Some(Token::Name(text.to_string()))
        } else {
            let symbol = SYMBOLS.iter().find(|&&s| s == text).cloned().unwrap_or("");
            Some(Token::Symbol(symbol))
        };
        if let Some(token) = token {
            tokens.push(Spanned {
                token,
                position,
                text: text.to_string(),
            });
        }
        position += text.len();
    }
    Ok(tokens)
}

/// Binary operator precedence levels, loosest first. `**` is handled separately since it's
/// right-associative and binds tighter than unary operators.
const LEVELS: [&[(&str, BinaryOperator)]; 6] = [
    &[("|", BinaryOperator::BitOr)],
    &[("^", BinaryOperator::BitXor)],
    &[("&", BinaryOperator::BitAnd)],
    &[("<<", BinaryOperator::LShift), (">>", BinaryOperator::RShift)],
    &[("+", BinaryOperator::Add), ("-", BinaryOperator::Sub)],
    &[
        ("*", BinaryOperator::Mul),
        ("/", BinaryOperator::Div),
        ("//", BinaryOperator::FloorDiv),
        ("%", BinaryOperator::Mod),
    ],
];

const OPERAND: &str = "a number, a name, or '('";

/// The deepest an expression may nest, counting both parentheses and the depth of the tree.
pub const MAX_DEPTH: usize = 200;

/// A parsed subtree along with its depth, so the limit can be checked as the tree is built.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Node {
        Node { expr, depth: 1 }
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    next: usize,
    end: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.next)
    }

    fn peek_symbol(&self) -> Option<&'static str> {
        match self.peek() {
            Some(Spanned {
                token: Token::Symbol(s),
                ..
            }) => Some(*s),
            _ => None,
        }
    }

    fn advance(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.next).cloned();
        self.next += 1;
        token
    }

    fn position(&self) -> usize {
        self.peek().map_or(self.end, |spanned| spanned.position)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(spanned) => ParseError::UnexpectedToken {
                position: spanned.position,
                found: format!("{:?}", spanned.text),
                expected,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    fn expect_symbol(&mut self, symbol: &'static str, expected: &'static str) -> Result<(), ParseError> {
        if self.peek_symbol() == Some(symbol) {
            self.next += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Goes one level deeper: a parenthesis, an argument list, a unary operator or an exponent.
    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.position(),
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    /// Builds an interior node over children at most `children` deep.
    fn branch(&self, expr: Expr, children: usize) -> Result<Node, ParseError> {
        let depth = children + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.position(),
            });
        }
        Ok(Node { expr, depth })
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        self.binary(0)
    }

    fn binary(&mut self, level: usize) -> Result<Node, ParseError> {
        if level == LEVELS.len() {
            return self.unary();
        }
        let mut left = self.binary(level + 1)?;
        loop {
            let op = self.peek_symbol().and_then(|symbol| {
                LEVELS[level]
                    .iter()
                    .find(|&&(s, _)| s == symbol)
                    .map(|&(_, op)| op)
            });
            let op = match op {
                Some(op) => op,
                None => return Ok(left),
            };
            self.next += 1;
            let right = self.binary(level + 1)?;
            let depth = left.depth.max(right.depth);
            left = self.branch(
                Expr::BinaryOp {
                    op,
                    left: Box::new(left.expr),
                    right: Box::new(right.expr),
                },
                depth,
            )?;
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        let op = match self.peek_symbol() {
            Some("+") => UnaryOperator::Plus,
            Some("-") => UnaryOperator::Minus,
            Some("~") => UnaryOperator::Invert,
            _ => return self.power(),
        };
        self.enter()?;
        self.next += 1;
        let operand = self.unary()?;
        self.leave();
        self.branch(
            Expr::UnaryOp {
                op,
                operand: Box::new(operand.expr),
            },
            operand.depth,
        )
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.postfix()?;
        if self.peek_symbol() != Some("**") {
            return Ok(base);
        }
        self.enter()?;
        self.next += 1;
        // the exponent may carry its own sign: 2 ** -1
        let exponent = self.unary()?;
        self.leave();
        let depth = base.depth.max(exponent.depth);
        self.branch(
            Expr::BinaryOp {
                op: BinaryOperator::Pow,
                left: Box::new(base.expr),
                right: Box::new(exponent.expr),
            },
            depth,
        )
    }

    fn postfix(&mut self) -> Result<Node, ParseError> {
        let mut node = self.atom()?;
        while self.peek_symbol() == Some("(") {
            self.enter()?;
            self.next += 1;
            let args = self.arguments()?;
            self.leave();
            let depth = args.iter().map(|arg| arg.depth).fold(node.depth, usize::max);
            node = self.branch(
                Expr::Call {
                    callee: Box::new(node.expr),
                    args: args.into_iter().map(|arg| arg.expr).collect(),
                },
                depth,
            )?;
        }
        Ok(node)
    }

    /// Parses a comma-separated argument list after the opening parenthesis, consuming the closing
    /// one. A single trailing comma is allowed.
    fn arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut args = vec![];
        loop {
            if self.peek_symbol() == Some(")") {
                self.next += 1;
                return Ok(args);
            }
            args.push(self.expression()?);
            match self.peek_symbol() {
                Some(",") => self.next += 1,
                Some(")") => {}
                _ => return Err(self.unexpected("',' or ')'")),
            }
        }
    }

    fn atom(&mut self) -> Result<Node, ParseError> {
        let spanned = match self.peek() {
            Some(spanned) => spanned.clone(),
            None => return Err(self.unexpected(OPERAND)),
        };
        match spanned.token {
            Token::Number(n) => {
                self.advance();
                Ok(Node::leaf(Expr::Literal(n)))
            }
            Token::Name(name) => {
                self.advance();
                Ok(Node::leaf(Expr::Name(name)))
            }
            Token::Symbol("(") => {
                self.enter()?;
                self.advance();
                let inner = self.expression()?;
                self.expect_symbol(")", "')'")?;
                self.leave();
                Ok(inner)
            }
            Token::Symbol(_) => Err(self.unexpected(OPERAND)),
        }
    }
}

/// Parses a whole conversion expression. Leading and trailing whitespace is ignored; anything else
/// that isn't part of the expression is an error, and so is nesting deeper than [`MAX_DEPTH`].
///
/// # Example
/// ```
/// # use chameleon::parser::parse;
/// let tree = parse("hls(h + 180, l, s)").unwrap();
/// assert_eq!(tree.to_string(), "hls((h + 180), l, s)");
/// assert!(parse("rgb(r,, b)").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser {
        tokens,
        next: 0,
        end: input.len(),
        nesting: 0,
    };
    let node = parser.expression()?;
    if parser.peek().is_some() {
        return Err(parser.unexpected("an operator or the end of the expression"));
    }
    Ok(node.expr)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn parsed(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("42"), Ok(Expr::Literal(Number::Int(42))));
        assert_eq!(parse("0xff"), Ok(Expr::Literal(Number::Int(255))));
        assert_eq!(parse("0o17"), Ok(Expr::Literal(Number::Int(15))));
        assert_eq!(parse("0b101"), Ok(Expr::Literal(Number::Int(5))));
        assert_eq!(parse("1.5"), Ok(Expr::Literal(Number::Float(1.5))));
        assert_eq!(parse(".5"), Ok(Expr::Literal(Number::Float(0.5))));
        assert_eq!(parse("2."), Ok(Expr::Literal(Number::Float(2.0))));
        assert_eq!(parse("2e-3"), Ok(Expr::Literal(Number::Float(0.002))));
        assert_eq!(
            parse("99999999999999999999"),
            Err(ParseError::InvalidNumber {
                position: 0,
                literal: "99999999999999999999".to_string()
            })
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parsed("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(parsed("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(parsed("r & 0xf0 | g >> 4"), "((r & 240) | (g >> 4))");
        assert_eq!(parsed("a << 1 + 2"), "(a << (1 + 2))");
        assert_eq!(parsed("a ^ b & c"), "(a ^ (b & c))");
        assert_eq!(parsed("a // b % c"), "((a // b) % c)");
        assert_eq!(parsed("-a * b"), "((-a) * b)");
        assert_eq!(parsed("-2 ** 2"), "(-(2 ** 2))");
        assert_eq!(parsed("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
        assert_eq!(parsed("2 ** -1"), "(2 ** (-1))");
        assert_eq!(parsed("(1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn test_calls() {
        assert_eq!(parsed("rgb(255 - r, 255 - g, 255 - b)"), "rgb((255 - r), (255 - g), (255 - b))");
        assert_eq!(parsed("max(r, g,)"), "max(r, g)");
        assert_eq!(parsed("f()"), "f()");
        assert_eq!(parsed("(rgb)(1, 2, 3)"), "rgb(1, 2, 3)");
        assert_eq!(
            parse("hls(h, l1, s)"),
            Ok(Expr::Call {
                callee: Box::new(Expr::Name("hls".to_string())),
                args: vec![
                    Expr::Name("h".to_string()),
                    Expr::Name("l1".to_string()),
                    Expr::Name("s".to_string()),
                ],
            })
        );
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parsed("  rgb( r ,g,\tb )\n"), "rgb(r, g, b)");
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(
            parse("0777"),
            Err(ParseError::InvalidNumber {
                position: 0,
                literal: "0777".to_string()
            })
        );
        assert!(parse("r + 09").is_err());
        assert_eq!(parse("0"), Ok(Expr::Literal(Number::Int(0))));
        assert_eq!(parse("000"), Ok(Expr::Literal(Number::Int(0))));
        assert_eq!(parse("007.5"), Ok(Expr::Literal(Number::Float(7.5))));
        assert_eq!(parse("0o777"), Ok(Expr::Literal(Number::Int(511))));
    }

    #[test]
    fn test_nesting_is_limited() {
        assert_eq!(parse(&"(".repeat(10_000)), Err(ParseError::TooDeep { position: MAX_DEPTH }));
        let parens = format!("rgb({}r{}, g, b)", "(".repeat(3_000), ")".repeat(3_000));
        assert!(matches!(parse(&parens), Err(ParseError::TooDeep { .. })));
        let negations = format!("{}1", "-".repeat(100_000));
        assert!(matches!(parse(&negations), Err(ParseError::TooDeep { .. })));
        let calls = format!("f{}", "()".repeat(10_000));
        assert!(matches!(parse(&calls), Err(ParseError::TooDeep { .. })));
        let powers = vec!["2"; 10_000].join(" ** ");
        assert!(matches!(parse(&powers), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn test_long_chains_are_limited() {
        let sum = vec!["1"; 10_000].join(" + ");
        assert!(matches!(parse(&sum), Err(ParseError::TooDeep { .. })));
        let sum = vec!["1"; MAX_DEPTH].join(" + ");
        assert_eq!(parse(&sum).map(|tree| tree.depth()), Ok(MAX_DEPTH));
    }

    #[test]
    fn test_nesting_up_to_the_limit() {
        let parens = format!("{}r{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&parens), Ok(Expr::Name("r".to_string())));
        let negations = format!("{}1", "-".repeat(MAX_DEPTH - 1));
        assert_eq!(parse(&negations).map(|tree| tree.depth()), Ok(MAX_DEPTH));
        let negations = format!("{}1", "-".repeat(MAX_DEPTH));
        assert!(matches!(parse(&negations), Err(ParseError::TooDeep { .. })));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            parse("rgb(r,, b)"),
            Err(ParseError::UnexpectedToken {
                position: 6,
                found: "\",\"".to_string(),
                expected: OPERAND,
            })
        );
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("rgb(r, g"), Err(ParseError::UnexpectedEnd { expected: "',' or ')'" }));
        assert_eq!(parse("1 +"), Err(ParseError::UnexpectedEnd { expected: OPERAND }));
        assert_eq!(
            parse("r == g"),
            Err(ParseError::UnexpectedCharacter {
                position: 2,
                found: '='
            })
        );
        assert!(parse("1 2").is_err());
        assert!(parse("(1").is_err());
        assert!(parse("1)").is_err());
        assert!(parse("'red'").is_err());
        assert!(parse("[r, g, b]").is_err());
        assert!(parse("r = 1").is_err());
        assert!(parse("r < g").is_err());
    }
}
