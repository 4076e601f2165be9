//! This module implements the numbers conversion expressions compute with. There are two kinds:
//! integers, which RGB components are declared as, and floats, which everything else is declared
//! as. The arithmetic follows the usual scripting-language conventions so that expressions behave
//! the way they read: `r // 2` stays an integer and can be fed to `&` or `<<`, `/` always gives a
//! float, and `//` and `%` round toward negative infinity (so `-7 % 3` is 2, taking the sign of the
//! divisor). Mixing an integer and a float promotes to float. Integers are 64-bit, and anything that
//! would overflow them is reported instead of wrapping.

use std::fmt;

use num::Integer;

use crate::error::EvalError;

/// A number in a conversion expression: either an integer or a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    /// An integer, such as a declared RGB component or the result of `floor()`.
    Int(i64),
    /// A float, such as a declared hue or the result of `/`.
    Float(f64),
}

fn overflow() -> EvalError {
    EvalError::Domain("integer overflow".to_string())
}

fn zero_division(op: &str) -> EvalError {
    EvalError::Domain(format!("division by zero in {}", op))
}

impl Number {
    /// The value as a float, whatever kind it is.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Whether this is an integer.
    pub fn is_int(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(_) => false,
        }
    }

    /// The name of this kind of number, as used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Float(_) => "float",
        }
    }

    /// Truncates a float toward zero to get an integer, failing for infinities, NaN, and anything
    /// out of 64-bit range. Integers pass through unchanged.
    pub fn truncate(self) -> Result<i64, EvalError> {
        match self {
            Number::Int(i) => Ok(i),
            Number::Float(f) => float_to_int(f.trunc()),
        }
    }

    /// Negation.
    pub fn neg(self) -> Result<Number, EvalError> {
        match self {
            Number::Int(i) => i.checked_neg().map(Number::Int).ok_or_else(overflow),
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }

    /// Addition.
    pub fn add(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_add(b).map(Number::Int).ok_or_else(overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Subtraction.
    pub fn sub(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_sub(b).map(Number::Int).ok_or_else(overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() - b.as_f64())),
        }
    }

    /// Multiplication.
    pub fn mul(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_mul(b).map(Number::Int).ok_or_else(overflow)
            }
            (a, b) => Ok(Number::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// True division, `/`. Always gives a float.
    pub fn div(self, rhs: Number) -> Result<Number, EvalError> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(zero_division("/"));
        }
        Ok(Number::Float(self.as_f64() / divisor))
    }

    /// Floor division, `//`: the quotient rounded toward negative infinity. Integer if both
    /// operands are.
    pub fn floor_div(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(_), Number::Int(0)) => Err(zero_division("//")),
            (Number::Int(a), Number::Int(b)) => {
                if a == i64::MIN && b == -1 {
                    Err(overflow())
                } else {
                    Ok(Number::Int(Integer::div_floor(&a, &b)))
                }
            }
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                if b == 0.0 {
                    return Err(zero_division("//"));
                }
                Ok(Number::Float(float_divmod(a, b).0))
            }
        }
    }

    /// Modulo, `%`: the remainder of floor division, with the sign of the divisor.
    pub fn rem(self, rhs: Number) -> Result<Number, EvalError> {
        match (self, rhs) {
            (Number::Int(_), Number::Int(0)) => Err(zero_division("%")),
            (Number::Int(a), Number::Int(b)) => {
                if b == -1 {
                    Ok(Number::Int(0))
                } else {
                    Ok(Number::Int(Integer::mod_floor(&a, &b)))
                }
            }
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                if b == 0.0 {
                    return Err(zero_division("%"));
                }
                Ok(Number::Float(float_divmod(a, b).1))
            }
        }
    }

    /// Left shift, `<<`. Integers only.
    pub fn shl(self, rhs: Number) -> Result<Number, EvalError> {
        let (a, b) = int_operands("<<", self, rhs)?;
        if b < 0 {
            return Err(EvalError::Domain("negative shift count".to_string()));
        }
        if a == 0 {
            return Ok(Number::Int(0));
        }
        if b >= 63 {
            return Err(overflow());
        }
        let shifted = a << b;
        if shifted >> b != a {
            return Err(overflow());
        }
        Ok(Number::Int(shifted))
    }

    /// Arithmetic right shift, `>>`. Integers only.
    pub fn shr(self, rhs: Number) -> Result<Number, EvalError> {
        let (a, b) = int_operands(">>", self, rhs)?;
        if b < 0 {
            return Err(EvalError::Domain("negative shift count".to_string()));
        }
        // shifting past the width leaves only the sign
        Ok(Number::Int(a >> b.min(63)))
    }

    /// Bitwise and, `&`. Integers only.
    pub fn bitand(self, rhs: Number) -> Result<Number, EvalError> {
        let (a, b) = int_operands("&", self, rhs)?;
        Ok(Number::Int(a & b))
    }

    /// Bitwise or, `|`. Integers only.
    pub fn bitor(self, rhs: Number) -> Result<Number, EvalError> {
        let (a, b) = int_operands("|", self, rhs)?;
        Ok(Number::Int(a | b))
    }

    /// Bitwise exclusive or, `^`. Integers only.
    pub fn bitxor(self, rhs: Number) -> Result<Number, EvalError> {
        let (a, b) = int_operands("^", self, rhs)?;
        Ok(Number::Int(a ^ b))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Number {
        Number::Int(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Number {
        Number::Float(f)
    }
}

/// Converts an already-integral float to `i64`, rejecting infinities, NaN, and out-of-range values.
pub(crate) fn float_to_int(f: f64) -> Result<i64, EvalError> {
    if f.is_nan() {
        Err(EvalError::Domain("cannot convert NaN to integer".to_string()))
    } else if f.is_infinite() {
        Err(EvalError::Domain("cannot convert infinity to integer".to_string()))
    } else if f < -9_223_372_036_854_775_808.0 || f >= 9_223_372_036_854_775_808.0 {
        Err(overflow())
    } else {
        Ok(f as i64)
    }
}

fn int_operands(op: &str, a: Number, b: Number) -> Result<(i64, i64), EvalError> {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => Ok((a, b)),
        (a, b) => Err(EvalError::Type(format!(
            "unsupported operand type(s) for {}: '{}' and '{}'",
            op,
            a.type_name(),
            b.type_name()
        ))),
    }
}

/// Floored division and modulo for floats, as a pair `(a // b, a % b)`. `b` must be nonzero.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut m = a % b;
    // fmod rounds toward zero; move it toward negative infinity
    let mut div = (a - m) / b;
    if m != 0.0 {
        if (b < 0.0) != (m < 0.0) {
            m += b;
            div -= 1.0;
        }
    } else {
        m = 0.0f64.copysign(b);
    }
    let floordiv = if div != 0.0 {
        let mut floordiv = div.floor();
        if div - floordiv > 0.5 {
            floordiv += 1.0;
        }
        floordiv
    } else {
        0.0f64.copysign(a / b)
    };
    (floordiv, m)
}
