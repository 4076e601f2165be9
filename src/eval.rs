//! The tree-walking evaluator. Evaluating an [`Expr`] gives a [`Value`]: usually a number, but names
//! can also stand for functions and color spaces, and calling a color space gives a color.
//!
//! Names are looked up in this order:
//!
//! 1. a component variable already declared in the [`Scope`], like `r` or `h1`;
//! 2. a constant, `pi` or `e`;
//! 3. a math function, like `sqrt`;
//! 4. a color space name. This declares the space's component variables in the scope and then
//!    evaluates to a converter, which turns three components in that space back into a color.
//!
//! Because of the last rule, `rgb(r, g, b)` works: the callee `rgb` is evaluated before the
//! arguments, so `r`, `g` and `b` are declared by the time they're read.

use tracing::warn;

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::color::RGBColor;
use crate::colorspace::ColorSpace;
use crate::error::EvalError;
use crate::functions::{lookup_constant, lookup_function, Arity, MathFunction};
use crate::number::Number;
use crate::scope::Scope;

/// Anything an expression or subexpression can evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer or a float.
    Number(Number),
    /// Two numbers, as returned by `frexp()` and `modf()`. Nothing else accepts them.
    Pair(Number, Number),
    /// A math function, waiting to be called.
    Function(MathFunction),
    /// A color space's conversion back to RGB, waiting to be called with three components.
    Converter(ColorSpace),
    /// The result of calling a converter.
    Color(RGBColor),
}

impl Value {
    /// A short description of this kind of value, for error messages.
    pub fn kind(&self) -> &'static str {
        match *self {
            Value::Number(Number::Int(_)) => "an int",
            Value::Number(Number::Float(_)) => "a float",
            Value::Pair(_, _) => "a pair",
            Value::Function(_) => "a function",
            Value::Converter(_) => "a color space",
            Value::Color(_) => "a color",
        }
    }

    fn type_name(&self) -> &'static str {
        match *self {
            Value::Number(n) => n.type_name(),
            Value::Pair(_, _) => "pair",
            Value::Function(_) => "function",
            Value::Converter(_) => "color space",
            Value::Color(_) => "color",
        }
    }
}

/// What a name stands for.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Resolved {
    /// A declared component variable.
    Variable(Number),
    /// `pi` or `e`.
    Constant(f64),
    /// A math function.
    Function(MathFunction),
    /// A color space name, which declares the space when it's evaluated.
    ColorSpaceTrigger(ColorSpace),
}

/// Looks up what `name` stands for, without declaring anything.
pub fn resolve(scope: &Scope, name: &str) -> Option<Resolved> {
    if let Some(n) = scope.get(name) {
        return Some(Resolved::Variable(n));
    }
    if let Some(c) = lookup_constant(name) {
        return Some(Resolved::Constant(c));
    }
    if let Some(f) = lookup_function(name) {
        return Some(Resolved::Function(f));
    }
    ColorSpace::from_name(name).map(Resolved::ColorSpaceTrigger)
}

/// Evaluates expressions against one scope. An `Evaluator` is meant to be used for a single
/// evaluation and then dropped along with its scope.
#[derive(Debug)]
pub struct Evaluator<'a> {
    scope: Scope<'a>,
}

impl<'a> Evaluator<'a> {
    /// An evaluator over a fresh scope for `colors`, current color first.
    pub fn new(colors: &'a [RGBColor]) -> Evaluator<'a> {
        Evaluator {
            scope: Scope::new(colors),
        }
    }

    /// The scope, including everything declared so far.
    pub fn scope(&self) -> &Scope<'a> {
        &self.scope
    }

    /// Evaluates `expr`.
    pub fn eval(&mut self, expr: &Expr) -> Result<Value, EvalError> {
        match *expr {
            Expr::Literal(n) => Ok(Value::Number(n)),
            Expr::Name(ref name) => self.eval_name(name),
            Expr::BinaryOp {
                op,
                ref left,
                ref right,
            } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                binary(op, left, right)
            }
            Expr::UnaryOp { op, ref operand } => {
                let operand = self.eval(operand)?;
                unary(op, operand)
            }
            Expr::Call {
                ref callee,
                ref args,
            } => {
                let callee = self.eval(callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<Value>, EvalError>>()?;
                call(callee, args)
            }
        }
    }

    fn eval_name(&mut self, name: &str) -> Result<Value, EvalError> {
        match resolve(&self.scope, name) {
            Some(Resolved::Variable(n)) => Ok(Value::Number(n)),
            Some(Resolved::Constant(c)) => Ok(Value::Number(Number::Float(c))),
            Some(Resolved::Function(f)) => Ok(Value::Function(f)),
            Some(Resolved::ColorSpaceTrigger(space)) => {
                self.scope.declare(space);
                Ok(Value::Converter(space))
            }
            None => Err(EvalError::UndefinedVariable(name.to_string())),
        }
    }
}

fn number_operands(op: &str, left: &Value, right: &Value) -> Result<(Number, Number), EvalError> {
    match (left, right) {
        (&Value::Number(a), &Value::Number(b)) => Ok((a, b)),
        _ => Err(EvalError::Type(format!(
            "unsupported operand type(s) for {}: '{}' and '{}'",
            op,
            left.type_name(),
            right.type_name()
        ))),
    }
}

type Operation = fn(Number, Number) -> Result<Number, EvalError>;

/// The arithmetic behind each operator, or an error for the ones that parse but aren't computed.
fn operation(op: BinaryOperator) -> Result<Operation, EvalError> {
    let operation: Operation = match op {
        BinaryOperator::Add => Number::add,
        BinaryOperator::Sub => Number::sub,
        BinaryOperator::Mul => Number::mul,
        BinaryOperator::Div => Number::div,
        BinaryOperator::FloorDiv => Number::floor_div,
        BinaryOperator::Mod => Number::rem,
        BinaryOperator::LShift => Number::shl,
        BinaryOperator::RShift => Number::shr,
        BinaryOperator::BitAnd => Number::bitand,
        BinaryOperator::BitOr => Number::bitor,
        BinaryOperator::BitXor => Number::bitxor,
        BinaryOperator::Pow => {
            return Err(EvalError::UnsupportedConstruct(
                "the ** operator, use pow() instead".to_string(),
            ))
        }
    };
    Ok(operation)
}

fn binary(op: BinaryOperator, left: Value, right: Value) -> Result<Value, EvalError> {
    let apply = operation(op)?;
    let (a, b) = number_operands(op.symbol(), &left, &right)?;
    apply(a, b).map(Value::Number)
}

fn unary(op: UnaryOperator, operand: Value) -> Result<Value, EvalError> {
    if op == UnaryOperator::Invert {
        return Err(EvalError::UnsupportedConstruct("the ~ operator".to_string()));
    }
    let n = match operand {
        Value::Number(n) => n,
        other => {
            return Err(EvalError::Type(format!(
                "bad operand type for unary {}: '{}'",
                op.symbol(),
                other.type_name()
            )))
        }
    };
    match op {
        UnaryOperator::Minus => n.neg().map(Value::Number),
        _ => Ok(Value::Number(n)),
    }
}

fn numbers(name: &str, args: Vec<Value>) -> Result<Vec<Number>, EvalError> {
    args.into_iter()
        .map(|arg| match arg {
            Value::Number(n) => Ok(n),
            other => Err(EvalError::Type(format!(
                "{}() expects numbers, got {}",
                name,
                other.kind()
            ))),
        })
        .collect()
}

fn call(callee: Value, args: Vec<Value>) -> Result<Value, EvalError> {
    match callee {
        Value::Function(f) => {
            f.arity().check(f.name(), args.len())?;
            let args = numbers(f.name(), args)?;
            f.call(&args)
        }
        Value::Converter(space) => {
            Arity::Exact(3).check(space.name(), args.len())?;
            let args = numbers(space.name(), args)?;
            let color = space.to_rgb([args[0].as_f64(), args[1].as_f64(), args[2].as_f64()])?;
            if !color.in_range() {
                warn!(space = space.name(), ?color, "conversion left the RGB range");
            }
            Ok(Value::Color(color))
        }
        other => Err(EvalError::Type(format!(
            "'{}' object is not callable",
            other.type_name()
        ))),
    }
}
