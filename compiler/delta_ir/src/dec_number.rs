//! Integer-or-floating numbers.
//!
//! Constants, workspace variables and numeric literals all carry a
//! [`DecNumber`]. Arithmetic between two numbers stays integral only when
//! both operands are integers; a single floating operand promotes the
//! result to floating.

use std::fmt;

use crate::TokenCategory;

/// A number that is either an `i64` or an `f64`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DecNumber {
    Integer(i64),
    Floating(f64),
}

/// Binary operators understood by [`DecNumber::compute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl ArithmeticOp {
    /// Map an operator symbol (`+ - * / ^`) to its operation.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(ArithmeticOp::Add),
            '-' => Some(ArithmeticOp::Sub),
            '*' => Some(ArithmeticOp::Mul),
            '/' => Some(ArithmeticOp::Div),
            '^' => Some(ArithmeticOp::Pow),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            ArithmeticOp::Add => '+',
            ArithmeticOp::Sub => '-',
            ArithmeticOp::Mul => '*',
            ArithmeticOp::Div => '/',
            ArithmeticOp::Pow => '^',
        }
    }
}

/// Failure building or combining numbers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{0}`")]
    Overflow(String),
    #[error("`{lexeme}` is not a valid {expected}")]
    Malformed {
        lexeme: String,
        expected: &'static str,
    },
}

impl DecNumber {
    #[inline]
    pub const fn is_floating(self) -> bool {
        matches!(self, DecNumber::Floating(_))
    }

    /// The value as a float, converting integers.
    #[allow(
        clippy::cast_precision_loss,
        reason = "integers beyond 2^53 lose precision like any float promotion"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            DecNumber::Integer(value) => value as f64,
            DecNumber::Floating(value) => value,
        }
    }

    /// The additive inverse. Integer negation wraps at `i64::MIN`.
    #[must_use]
    pub fn negated(self) -> Self {
        match self {
            DecNumber::Integer(value) => DecNumber::Integer(value.wrapping_neg()),
            DecNumber::Floating(value) => DecNumber::Floating(-value),
        }
    }

    /// Apply `op` to `self` and `rhs`.
    ///
    /// The front end only builds values from literals; this is the
    /// arithmetic an evaluator of parsed expressions runs.
    ///
    /// Floating division by zero follows IEEE 754; integer division by zero
    /// is [`NumberError::DivisionByZero`]. An integer power with a negative
    /// exponent is computed in floating point and truncated back.
    pub fn compute(self, op: ArithmeticOp, rhs: DecNumber) -> Result<DecNumber, NumberError> {
        let (DecNumber::Integer(a), DecNumber::Integer(b)) = (self, rhs) else {
            let (a, b) = (self.as_f64(), rhs.as_f64());
            let value = match op {
                ArithmeticOp::Add => a + b,
                ArithmeticOp::Sub => a - b,
                ArithmeticOp::Mul => a * b,
                ArithmeticOp::Div => a / b,
                ArithmeticOp::Pow => a.powf(b),
            };
            return Ok(DecNumber::Floating(value));
        };

        let overflow = || NumberError::Overflow(format!("{a} {} {b}", op.symbol()));
        let value = match op {
            ArithmeticOp::Add => a.checked_add(b).ok_or_else(overflow)?,
            ArithmeticOp::Sub => a.checked_sub(b).ok_or_else(overflow)?,
            ArithmeticOp::Mul => a.checked_mul(b).ok_or_else(overflow)?,
            ArithmeticOp::Div => {
                if b == 0 {
                    return Err(NumberError::DivisionByZero);
                }
                a.checked_div(b).ok_or_else(overflow)?
            }
            ArithmeticOp::Pow => match u32::try_from(b) {
                Ok(exp) => a.checked_pow(exp).ok_or_else(overflow)?,
                Err(_) if b < 0 => truncate(self.as_f64().powf(rhs.as_f64())),
                Err(_) => return Err(overflow()),
            },
        };
        Ok(DecNumber::Integer(value))
    }

    /// Build the value of a numeric literal lexeme.
    ///
    /// `category` selects the interpretation: [`TokenCategory::LiteralInt`]
    /// accepts decimal and `0b` binary digits, [`TokenCategory::LiteralFloat`]
    /// accepts fractions and exponents. Underscores are digit separators and
    /// are ignored.
    pub fn from_literal(category: TokenCategory, lexeme: &str) -> Result<DecNumber, NumberError> {
        let digits: String = lexeme.chars().filter(|&c| c != '_').collect();
        let malformed = |expected| NumberError::Malformed {
            lexeme: lexeme.to_owned(),
            expected,
        };

        match category {
            TokenCategory::LiteralInt => {
                let binary = digits
                    .strip_prefix("0b")
                    .or_else(|| digits.strip_prefix("0B"));
                let (radix, body) = match binary {
                    Some(body) => (2, body),
                    None => (10, digits.as_str()),
                };
                if body.is_empty() || !body.bytes().all(|b| (b as char).is_digit(radix)) {
                    return Err(malformed("integer"));
                }
                i64::from_str_radix(body, radix)
                    .map(DecNumber::Integer)
                    .map_err(|_| NumberError::Overflow(lexeme.to_owned()))
            }
            TokenCategory::LiteralFloat => digits
                .parse::<f64>()
                .map(DecNumber::Floating)
                .map_err(|_| malformed("floating number")),
            _ => Err(malformed("numeric literal")),
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "integer powers with negative exponents truncate toward zero"
)]
fn truncate(value: f64) -> i64 {
    value as i64
}

impl From<i64> for DecNumber {
    fn from(value: i64) -> Self {
        DecNumber::Integer(value)
    }
}

impl From<f64> for DecNumber {
    fn from(value: f64) -> Self {
        DecNumber::Floating(value)
    }
}

impl fmt::Display for DecNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecNumber::Integer(value) => write!(f, "{value}"),
            DecNumber::Floating(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
