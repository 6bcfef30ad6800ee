//! Integer, floating and binary literals, and the lone `.`.
//!
//! ```text
//! 0   -> AfterZero -- b/B --> Binary
//! 1-9 -> Decimal   -- .   --> Float::AfterDot
//!                  -- e/E --> Float::ExponentStart
//! .   -> Dot       -- 0-9 --> Float::Fraction
//! ```
//!
//! `_` is accepted anywhere after the first digit as a separator. A letter
//! glued to a number is an error rather than the start of an identifier.

use delta_ir::TokenCategory;

use super::{Action, ActionFlags, State};
use crate::LexErrorKind;

const INTEGER_SUFFIX: &str = "the only letters that may follow an integer number are 'E' -OR- 'e' \
     for floats (i.e. 10E+15) -AND- 'B' -OR- 'b' for binaries (i.e. 0b011)";
const DECIMAL_SUFFIX: &str = "the only letter supported a decimal integer number is 'E' -OR- 'e' \
     for floats (i.e. 10E+15); if you would like a binary number, it must start by '0b' \
     (i.e. 0b011)";
const AFTER_DOT: &str = "the only letter that may follow a float's decimal dot is 'E' -OR- 'e', \
     providing that there is at least a digit beforehand (i.e. 10.3E+15)";
const FRACTION_LETTER: &str = "the only letter that may be in a float's decimal part is 'E' -OR- \
     'e' for its exponent (i.e. 10.3E+15)";
const EXPONENT_START: &str = "the only characters that may follow a float's 'E' -OR- 'e' are '+' \
     -OR- '-' -OR- 'a digit' (i.e. 10.3E+15, 10.3E10)";
const EXPONENT_SIGN: &str = "the only characters that may follow a float's exponent and sign \
     declaration are digits (i.e. 10.3E+15, 10.3E10)";
const EXPONENT_LETTER: &str = "a float's decimal number may only have 'digits' -OR- '_'";
const BINARY_EMPTY: &str = "a binary number needs at least one '0' -OR- '1' (i.e. 0b1)";
const BINARY_DIGIT: &str = "a binary number may only have '0' -AND- '1' -AND- '_'";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberState {
    /// After a leading `.`.
    Dot,
    /// After a leading `0`.
    AfterZero,
    /// Inside a base 10 integer.
    Decimal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatState {
    /// After `<digits>.`.
    AfterDot,
    /// Inside the digits after the dot.
    Fraction,
    /// After `e` or `E`.
    ExponentStart,
    /// After `e+` or `e-`.
    ExponentSign,
    /// Inside the exponent digits.
    Exponent,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryState {
    /// After `0b`.
    Start,
    /// At least one binary digit seen.
    Digits,
}

fn float(state: FloatState) -> Action {
    Action::goto(State::Float(state))
}

fn int(state: NumberState) -> Action {
    Action::goto(State::Number(state))
}

fn finish(category: TokenCategory, input: Option<u8>) -> Action {
    let action = match input {
        Some(_) => Action::accept_before(category),
        None => Action::accept(category),
    };
    action.with(ActionFlags::SAVE_LEXEME)
}

fn reject(kind: LexErrorKind, input: Option<u8>) -> Action {
    match input {
        Some(_) => Action::fail_before(kind),
        None => Action::fail(kind),
    }
}

#[inline]
fn is_digit_or_separator(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'_'
}

pub(super) fn step(state: NumberState, input: Option<u8>) -> Action {
    match (state, input) {
        (NumberState::Dot, Some(b'0'..=b'9')) => float(FloatState::Fraction),
        (NumberState::Dot, Some(_)) => Action::accept_before(TokenCategory::Dot),
        (NumberState::Dot, None) => Action::accept(TokenCategory::Dot),

        (NumberState::AfterZero, Some(b'b' | b'B')) => {
            Action::goto(State::Binary(BinaryState::Start))
        }
        (NumberState::AfterZero | NumberState::Decimal, Some(b)) if is_digit_or_separator(b) => {
            int(NumberState::Decimal)
        }
        (NumberState::AfterZero | NumberState::Decimal, Some(b'.')) => float(FloatState::AfterDot),
        (NumberState::AfterZero | NumberState::Decimal, Some(b'e' | b'E')) => {
            float(FloatState::ExponentStart)
        }
        (NumberState::AfterZero, Some(b)) if b.is_ascii_alphabetic() => {
            Action::fail_before(LexErrorKind::MalformedInteger(INTEGER_SUFFIX))
        }
        (NumberState::Decimal, Some(b)) if b.is_ascii_alphabetic() => {
            Action::fail_before(LexErrorKind::MalformedDecimal(DECIMAL_SUFFIX))
        }
        (NumberState::AfterZero | NumberState::Decimal, _) => {
            finish(TokenCategory::LiteralInt, input)
        }
    }
}

pub(super) fn float_step(state: FloatState, input: Option<u8>) -> Action {
    let letter = input.is_some_and(|b| b.is_ascii_alphabetic());
    match (state, input) {
        (FloatState::AfterDot, Some(b'0'..=b'9')) => float(FloatState::Fraction),
        (FloatState::AfterDot, _) if letter => {
            reject(LexErrorKind::MalformedFloat(AFTER_DOT), input)
        }

        (FloatState::Fraction, Some(b)) if is_digit_or_separator(b) => float(FloatState::Fraction),
        (FloatState::Fraction, Some(b'e' | b'E')) => float(FloatState::ExponentStart),
        (FloatState::Fraction, _) if letter => {
            reject(LexErrorKind::MalformedFloat(FRACTION_LETTER), input)
        }

        (FloatState::ExponentStart, Some(b'0'..=b'9')) => float(FloatState::Exponent),
        (FloatState::ExponentStart, Some(b'+' | b'-')) => float(FloatState::ExponentSign),
        (FloatState::ExponentStart, _) => {
            reject(LexErrorKind::MalformedFloat(EXPONENT_START), input)
        }

        (FloatState::ExponentSign, Some(b'0'..=b'9')) => float(FloatState::Exponent),
        (FloatState::ExponentSign, _) => {
            reject(LexErrorKind::MalformedFloat(EXPONENT_SIGN), input)
        }

        (FloatState::Exponent, Some(b)) if is_digit_or_separator(b) => float(FloatState::Exponent),
        (FloatState::Exponent, _) if letter => {
            reject(LexErrorKind::MalformedFloat(EXPONENT_LETTER), input)
        }

        (FloatState::AfterDot | FloatState::Fraction | FloatState::Exponent, _) => {
            finish(TokenCategory::LiteralFloat, input)
        }
    }
}

pub(super) fn binary_step(state: BinaryState, input: Option<u8>) -> Action {
    match (state, input) {
        (BinaryState::Start, Some(b'_')) => Action::goto(State::Binary(BinaryState::Start)),
        (BinaryState::Start | BinaryState::Digits, Some(b'0' | b'1')) => {
            Action::goto(State::Binary(BinaryState::Digits))
        }
        (BinaryState::Start, _) => reject(LexErrorKind::MalformedBinary(BINARY_EMPTY), input),

        (BinaryState::Digits, Some(b'_')) => Action::goto(State::Binary(BinaryState::Digits)),
        (BinaryState::Digits, Some(b)) if b.is_ascii_alphanumeric() => {
            Action::fail_before(LexErrorKind::MalformedBinary(BINARY_DIGIT))
        }
        (BinaryState::Digits, _) => finish(TokenCategory::LiteralInt, input),
    }
}
