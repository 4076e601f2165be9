//! The fixed library of functions and constants conversion expressions can use. Nothing can be
//! added at runtime: the tables are built once and shared by every calculator.
//!
//! The functions follow the conventions of a typical scripting-language math library. Integers are
//! accepted anywhere a float is. `ceil`, `floor`, `trunc`, `int` and `gcd` return integers, and
//! `abs`, `min` and `max` keep integers integral; everything else returns a float. Any result that
//! is infinite or NaN even though the arguments weren't (`sqrt(-1)`, `log(0)`, `exp(1000)`) is a
//! domain error rather than a silently poisoned color.

use std::collections::HashMap;
use std::f64::consts;
use std::fmt;

use num::Integer;

use crate::error::EvalError;
use crate::eval::Value;
use crate::number::{float_to_int, Number};

/// A built-in function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum MathFunction {
    Int,
    Float,
    Abs,
    Min,
    Max,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atan2,
    Atanh,
    Ceil,
    Copysign,
    Cos,
    Cosh,
    Degrees,
    Erf,
    Erfc,
    Exp,
    Expm1,
    Fabs,
    Floor,
    Fmod,
    Frexp,
    Gamma,
    Gcd,
    Hypot,
    Ldexp,
    Lgamma,
    Log,
    Log10,
    Log1p,
    Log2,
    Modf,
    Pow,
    Radians,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    Trunc,
}

lazy_static! {
    static ref FUNCTIONS: HashMap<&'static str, MathFunction> = hashmap! {
        "int" => MathFunction::Int,
        "float" => MathFunction::Float,
        "abs" => MathFunction::Abs,
        "min" => MathFunction::Min,
        "max" => MathFunction::Max,
        "acos" => MathFunction::Acos,
        "acosh" => MathFunction::Acosh,
        "asin" => MathFunction::Asin,
        "asinh" => MathFunction::Asinh,
        "atan" => MathFunction::Atan,
        "atan2" => MathFunction::Atan2,
        "atanh" => MathFunction::Atanh,
        "ceil" => MathFunction::Ceil,
        "copysign" => MathFunction::Copysign,
        "cos" => MathFunction::Cos,
        "cosh" => MathFunction::Cosh,
        "degrees" => MathFunction::Degrees,
        "erf" => MathFunction::Erf,
        "erfc" => MathFunction::Erfc,
        "exp" => MathFunction::Exp,
        "expm1" => MathFunction::Expm1,
        "fabs" => MathFunction::Fabs,
        "floor" => MathFunction::Floor,
        "fmod" => MathFunction::Fmod,
        "frexp" => MathFunction::Frexp,
        "gamma" => MathFunction::Gamma,
        "gcd" => MathFunction::Gcd,
        "hypot" => MathFunction::Hypot,
        "ldexp" => MathFunction::Ldexp,
        "lgamma" => MathFunction::Lgamma,
        "log" => MathFunction::Log,
        "log10" => MathFunction::Log10,
        "log1p" => MathFunction::Log1p,
        "log2" => MathFunction::Log2,
        "modf" => MathFunction::Modf,
        "pow" => MathFunction::Pow,
        "radians" => MathFunction::Radians,
        "sin" => MathFunction::Sin,
        "sinh" => MathFunction::Sinh,
        "sqrt" => MathFunction::Sqrt,
        "tan" => MathFunction::Tan,
        "tanh" => MathFunction::Tanh,
        "trunc" => MathFunction::Trunc,
    };
    static ref CONSTANTS: HashMap<&'static str, f64> = hashmap! {
        "pi" => consts::PI,
        "e" => consts::E,
    };
}

/// Looks up a built-in function by name.
pub fn lookup_function(name: &str) -> Option<MathFunction> {
    FUNCTIONS.get(name).cloned()
}

/// Looks up a built-in constant (`pi` or `e`) by name.
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).cloned()
}

/// How many arguments a function accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// Anywhere from the first to the second, inclusive.
    Between(usize, usize),
    /// This many or more.
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments are acceptable.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Between(lo, hi) => lo <= count && count <= hi,
            Arity::AtLeast(n) => count >= n,
        }
    }

    /// Checks that `count` arguments are acceptable for the function called `name`.
    pub fn check(self, name: &str, count: usize) -> Result<(), EvalError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(EvalError::Arity {
                name: name.to_string(),
                expected: self.to_string(),
                found: count,
            })
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Between(lo, hi) => write!(f, "{} to {}", lo, hi),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

fn float(x: f64) -> Result<Value, EvalError> {
    Ok(Value::Number(Number::Float(x)))
}

fn int(i: i64) -> Result<Value, EvalError> {
    Ok(Value::Number(Number::Int(i)))
}

fn integer_arg(name: &str, n: Number) -> Result<i64, EvalError> {
    match n {
        Number::Int(i) => Ok(i),
        Number::Float(_) => Err(EvalError::Type(format!(
            "{}() expects an integer, got a float",
            name
        ))),
    }
}

/// Rejects NaN or infinite results that came from ordinary arguments.
fn checked(name: &str, args: &[f64], result: f64) -> Result<f64, EvalError> {
    let nan_from_numbers = result.is_nan() && !args.iter().any(|a| a.is_nan());
    let infinite_from_finite = result.is_infinite() && args.iter().all(|a| a.is_finite());
    if nan_from_numbers || infinite_from_finite {
        Err(EvalError::Domain(format!("{}() is undefined for {:?}", name, args)))
    } else {
        Ok(result)
    }
}

impl MathFunction {
    /// The name this function is called by.
    pub fn name(self) -> &'static str {
        use self::MathFunction::*;
        match self {
            Int => "int",
            Float => "float",
            Abs => "abs",
            Min => "min",
            Max => "max",
            Acos => "acos",
            Acosh => "acosh",
            Asin => "asin",
            Asinh => "asinh",
            Atan => "atan",
            Atan2 => "atan2",
            Atanh => "atanh",
            Ceil => "ceil",
            Copysign => "copysign",
            Cos => "cos",
            Cosh => "cosh",
            Degrees => "degrees",
            Erf => "erf",
            Erfc => "erfc",
            Exp => "exp",
            Expm1 => "expm1",
            Fabs => "fabs",
            Floor => "floor",
            Fmod => "fmod",
            Frexp => "frexp",
            Gamma => "gamma",
            Gcd => "gcd",
            Hypot => "hypot",
            Ldexp => "ldexp",
            Lgamma => "lgamma",
            Log => "log",
            Log10 => "log10",
            Log1p => "log1p",
            Log2 => "log2",
            Modf => "modf",
            Pow => "pow",
            Radians => "radians",
            Sin => "sin",
            Sinh => "sinh",
            Sqrt => "sqrt",
            Tan => "tan",
            Tanh => "tanh",
            Trunc => "trunc",
        }
    }

    /// The argument counts this function accepts.
    pub fn arity(self) -> Arity {
        use self::MathFunction::*;
        match self {
            Min | Max => Arity::AtLeast(2),
            Log => Arity::Between(1, 2),
            Atan2 | Copysign | Fmod | Gcd | Hypot | Ldexp | Pow => Arity::Exact(2),
            _ => Arity::Exact(1),
        }
    }

    /// Calls the function, failing with an arity error if the number of arguments doesn't match
    /// [`arity`](MathFunction::arity).
    pub fn call(self, args: &[Number]) -> Result<Value, EvalError> {
        use self::MathFunction::*;
        let name = self.name();
        self.arity().check(name, args.len())?;
        let x = args[0];
        let unary = |f: fn(f64) -> f64| -> Result<Value, EvalError> {
            let a = x.as_f64();
            float(checked(name, &[a], f(a))?)
        };
        let binary = |f: fn(f64, f64) -> f64| -> Result<Value, EvalError> {
            let (a, b) = (x.as_f64(), args[1].as_f64());
            float(checked(name, &[a, b], f(a, b))?)
        };
        let rounded = |f: fn(f64) -> f64| -> Result<Value, EvalError> {
            match x {
                Number::Int(i) => int(i),
                Number::Float(a) => int(float_to_int(f(a))?),
            }
        };
        match self {
            Int => int(x.truncate()?),
            Float => float(x.as_f64()),
            Abs => match x {
                Number::Int(i) => i
                    .checked_abs()
                    .map(|a| Value::Number(Number::Int(a)))
                    .ok_or_else(|| EvalError::Domain("integer overflow".to_string())),
                Number::Float(a) => float(a.abs()),
            },
            Min => Ok(Value::Number(extremum(args, |a, b| a < b))),
            Max => Ok(Value::Number(extremum(args, |a, b| a > b))),
            Acos => unary(f64::acos),
            Acosh => unary(f64::acosh),
            Asin => unary(f64::asin),
            Asinh => unary(f64::asinh),
            Atan => unary(f64::atan),
            Atan2 => binary(f64::atan2),
            Atanh => unary(f64::atanh),
            Ceil => rounded(f64::ceil),
            Copysign => binary(f64::copysign),
            Cos => unary(f64::cos),
            Cosh => unary(f64::cosh),
            Degrees => unary(f64::to_degrees),
            Erf => unary(libm::erf),
            Erfc => unary(libm::erfc),
            Exp => unary(f64::exp),
            Expm1 => unary(f64::exp_m1),
            Fabs => unary(f64::abs),
            Floor => rounded(f64::floor),
            Fmod => binary(|a, b| a % b),
            Frexp => {
                let a = x.as_f64();
                if a == 0.0 || !a.is_finite() {
                    Ok(Value::Pair(Number::Float(a), Number::Int(0)))
                } else {
                    let (mantissa, exponent) = libm::frexp(a);
                    Ok(Value::Pair(Number::Float(mantissa), Number::Int(exponent as i64)))
                }
            }
            Gamma => unary(libm::tgamma),
            Gcd => {
                let a = integer_arg(name, x)?;
                let b = integer_arg(name, args[1])?;
                let divisor = Integer::gcd(&a.unsigned_abs(), &b.unsigned_abs());
                if divisor > i64::MAX as u64 {
                    Err(EvalError::Domain("integer overflow".to_string()))
                } else {
                    int(divisor as i64)
                }
            }
            Hypot => binary(f64::hypot),
            Ldexp => {
                let a = x.as_f64();
                let exponent = integer_arg(name, args[1])?;
                // past this range the result is 0 or infinite anyway
                let exponent = exponent.max(-100_000).min(100_000) as i32;
                float(checked(name, &[a], libm::ldexp(a, exponent))?)
            }
            Lgamma => unary(libm::lgamma),
            Log => {
                let a = x.as_f64();
                let ln_a = checked(name, &[a], a.ln())?;
                match args.get(1) {
                    None => float(ln_a),
                    Some(base) => {
                        let b = base.as_f64();
                        let ln_b = checked(name, &[b], b.ln())?;
                        if ln_b == 0.0 {
                            Err(EvalError::Domain("log() base of 1 divides by zero".to_string()))
                        } else {
                            float(ln_a / ln_b)
                        }
                    }
                }
            }
            Log10 => unary(f64::log10),
            Log1p => unary(f64::ln_1p),
            Log2 => unary(f64::log2),
            Modf => {
                let a = x.as_f64();
                let whole = a.trunc();
                let fraction = if a.is_infinite() { 0.0f64.copysign(a) } else { a - whole };
                Ok(Value::Pair(Number::Float(fraction), Number::Float(whole)))
            }
            Pow => binary(f64::powf),
            Radians => unary(f64::to_radians),
            Sin => unary(f64::sin),
            Sinh => unary(f64::sinh),
            Sqrt => unary(f64::sqrt),
            Tan => unary(f64::tan),
            Tanh => unary(f64::tanh),
            Trunc => rounded(f64::trunc),
        }
    }
}

/// The first argument that no later argument beats, keeping its kind of number.
fn extremum(args: &[Number], beats: fn(f64, f64) -> bool) -> Number {
    let mut best = args[0];
    for &candidate in &args[1..] {
        if beats(candidate.as_f64(), best.as_f64()) {
            best = candidate;
        }
    }
    best
}

impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn call(name: &str, args: &[Number]) -> Result<Value, EvalError> {
        lookup_function(name).unwrap().call(args)
    }

    fn call_f64(name: &str, args: &[f64]) -> f64 {
        let args: Vec<Number> = args.iter().map(|&a| Number::Float(a)).collect();
        match call(name, &args) {
            Ok(Value::Number(n)) => n.as_f64(),
            other => panic!("{}({:?}) gave {:?}", name, args, other),
        }
    }

    #[test]
    fn test_calls_check_their_arity() {
        assert_eq!(
            MathFunction::Sqrt.call(&[]),
            Err(EvalError::Arity {
                name: "sqrt".to_string(),
                expected: "1".to_string(),
                found: 0
            })
        );
        assert_eq!(
            MathFunction::Atan2.call(&[Number::Int(1)]),
            Err(EvalError::Arity {
                name: "atan2".to_string(),
                expected: "2".to_string(),
                found: 1
            })
        );
        assert!(matches!(MathFunction::Max.call(&[Number::Int(1)]), Err(EvalError::Arity { .. })));
        assert!(matches!(
            MathFunction::Log.call(&[Number::Int(1), Number::Int(2), Number::Int(3)]),
            Err(EvalError::Arity { .. })
        ));
        assert_eq!(MathFunction::Max.call(&[Number::Int(1), Number::Int(2)]), Ok(Value::Number(Number::Int(2))));
    }

    #[test]
    fn test_every_function_is_named_consistently() {
        for (&name, &function) in FUNCTIONS.iter() {
            assert_eq!(function.name(), name);
            assert_eq!(lookup_function(name), Some(function));
        }
        assert_eq!(FUNCTIONS.len(), 43);
        assert_eq!(lookup_function("print"), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(lookup_constant("pi"), Some(consts::PI));
        assert_eq!(lookup_constant("e"), Some(consts::E));
        assert_eq!(lookup_constant("tau"), None);
    }

    #[test]
    fn test_arity() {
        assert!(MathFunction::Sqrt.arity().accepts(1));
        assert!(!MathFunction::Sqrt.arity().accepts(2));
        assert!(MathFunction::Log.arity().accepts(2));
        assert!(!MathFunction::Max.arity().accepts(1));
        assert!(MathFunction::Max.arity().accepts(5));
        assert_eq!(MathFunction::Min.arity().to_string(), "at least 2");
    }

    #[test]
    fn test_integer_results() {
        assert_eq!(call("floor", &[Number::Float(-1.5)]), int(-2));
        assert_eq!(call("ceil", &[Number::Float(1.2)]), int(2));
        assert_eq!(call("int", &[Number::Float(-1.9)]), int(-1));
        assert_eq!(call("trunc", &[Number::Int(7)]), int(7));
        assert_eq!(call("gcd", &[Number::Int(12), Number::Int(-18)]), int(6));
        assert_eq!(call("abs", &[Number::Int(-3)]), int(3));
        assert_eq!(call("max", &[Number::Int(3), Number::Float(2.5)]), int(3));
        assert_eq!(call("min", &[Number::Int(3), Number::Float(2.5), Number::Int(9)]), float(2.5));
    }

    #[test]
    fn test_float_results() {
        assert!(approx_eq!(f64, call_f64("sqrt", &[2.]), consts::SQRT_2, ulps = 2));
        assert!(approx_eq!(f64, call_f64("log", &[8., 2.]), 3., ulps = 2));
        assert!(approx_eq!(f64, call_f64("degrees", &[consts::PI]), 180., ulps = 2));
        assert!(approx_eq!(f64, call_f64("gamma", &[5.]), 24., epsilon = 1e-9));
        assert!(approx_eq!(f64, call_f64("erf", &[0.]), 0., ulps = 2));
        assert!(approx_eq!(f64, call_f64("fmod", &[-7., 3.]), -1., ulps = 2));
        assert_eq!(call("float", &[Number::Int(3)]), float(3.));
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            call("frexp", &[Number::Float(8.)]),
            Ok(Value::Pair(Number::Float(0.5), Number::Int(4)))
        );
        assert_eq!(
            call("modf", &[Number::Float(-2.5)]),
            Ok(Value::Pair(Number::Float(-0.5), Number::Float(-2.)))
        );
    }

    #[test]
    fn test_domain_errors() {
        for &(name, ref args) in [
            ("sqrt", vec![Number::Int(-1)]),
            ("log", vec![Number::Int(0)]),
            ("log", vec![Number::Int(10), Number::Int(1)]),
            ("acos", vec![Number::Float(2.)]),
            ("exp", vec![Number::Int(1000)]),
            ("gamma", vec![Number::Int(0)]),
            ("fmod", vec![Number::Int(1), Number::Int(0)]),
            ("floor", vec![Number::Float(f64::INFINITY)]),
        ]
        .iter()
        {
            match call(name, args) {
                Err(EvalError::Domain(_)) => {}
                other => panic!("{}({:?}) gave {:?}", name, args, other),
            }
        }
    }

    #[test]
    fn test_integer_only_arguments() {
        match call("gcd", &[Number::Float(4.), Number::Int(2)]) {
            Err(EvalError::Type(_)) => {}
            other => panic!("expected a type error, got {:?}", other),
        }
        match call("ldexp", &[Number::Float(1.), Number::Float(2.)]) {
            Err(EvalError::Type(_)) => {}
            other => panic!("expected a type error, got {:?}", other),
        }
        assert_eq!(call("ldexp", &[Number::Float(1.5), Number::Int(3)]), float(12.));
    }
}
