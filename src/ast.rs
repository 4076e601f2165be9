//! The syntax tree of a conversion expression. It's a closed set of node types: anything the parser
//! produces is one of these, and the evaluator handles each one explicitly.

use std::fmt;

use crate::number::Number;

/// A binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, true division
    Div,
    /// `//`, floor division
    FloorDiv,
    /// `%`
    Mod,
    /// `**`. Parsed so the error can say what went wrong, but not computed: use `pow()`.
    Pow,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
}

impl BinaryOperator {
    /// The operator as written.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::FloorDiv => "//",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "**",
            BinaryOperator::LShift => "<<",
            BinaryOperator::RShift => ">>",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
        }
    }
}

/// A unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, which does nothing to a number.
    Plus,
    /// `-`
    Minus,
    /// `~`. Parsed but not computed.
    Invert,
}

impl UnaryOperator {
    /// The operator as written.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Invert => "~",
        }
    }
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal(Number),
    /// A name: a declared component, a constant, a function, or a color space.
    Name(String),
    /// `left op right`
    BinaryOp {
        /// The operator.
        op: BinaryOperator,
        /// The left operand, evaluated first.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
    /// `op operand`
    UnaryOp {
        /// The operator.
        op: UnaryOperator,
        /// The operand.
        operand: Box<Expr>,
    },
    /// `callee(args...)`
    Call {
        /// What's being called, evaluated before the arguments.
        callee: Box<Expr>,
        /// The arguments, evaluated left to right.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// The number of nodes on the longest path from this node to a leaf, counting both ends.
    pub fn depth(&self) -> usize {
        match *self {
            Expr::Literal(_) | Expr::Name(_) => 1,
            Expr::BinaryOp {
                ref left,
                ref right,
                ..
            } => 1 + left.depth().max(right.depth()),
            Expr::UnaryOp { ref operand, .. } => 1 + operand.depth(),
            Expr::Call {
                ref callee,
                ref args,
            } => 1 + args.iter().map(Expr::depth).fold(callee.depth(), usize::max),
        }
    }
}

impl fmt::Display for Expr {
    /// Writes the expression back out, parenthesizing every operation so the structure is
    /// unambiguous.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Name(ref name) => write!(f, "{}", name),
            Expr::BinaryOp {
                op,
                ref left,
                ref right,
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::UnaryOp { op, ref operand } => write!(f, "({}{})", op.symbol(), operand),
            Expr::Call {
                ref callee,
                ref args,
            } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
