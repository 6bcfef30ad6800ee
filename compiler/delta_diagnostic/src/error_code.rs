//! Error codes for every Delta diagnostic.
//!
//! Format: E#### where the first digit is the phase:
//! - E1xxx: internal errors (broken invariants, failed syscalls)
//! - E2xxx: lexical errors
//! - E3xxx: syntactic errors
//! - E4xxx: semantic errors
//! - E5xxx: user errors (files, libraries, help topics)

use std::fmt;

use delta_ir::NumberError;

/// Phase that raised a diagnostic, from the first digit of its code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Internal,
    Lexical,
    Syntactic,
    Semantic,
    User,
}

/// Error codes for all Delta diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Internal (E1xxx)
    /// Invalid argument to an internal API
    E1101,
    /// Missing argument to an internal API. Reserved for the evaluator.
    E1102,
    /// A system call failed, such as mapping an input file
    E1201,
    /// Logic invariant violated
    E1300,

    // Lexical (E2xxx)
    /// Character not supported
    E2001,
    /// Malformed floating number
    E2311,
    /// Malformed integer starting with `0`
    E2321,
    /// Malformed binary integer
    E2322,
    /// Malformed base 10 integer
    E2323,
    /// Empty string literal
    E2331,
    /// Unclosed string
    E2332,
    /// Unsupported operator starting with `+`
    E2401,
    /// Unclosed comment
    E2501,

    // Syntactic (E3xxx)
    /// Write to a constant. Raised by the parser, which is not part of the
    /// lexical front end.
    E3001,

    // Semantic (E4xxx)
    /// Division by zero
    E4001,
    /// Wrong number of arguments
    E4002,
    /// Wrong argument type
    E4003,

    // User (E5xxx)
    /// Input file inaccessible
    E5101,
    /// Function not found in the selected library. Needs library loading,
    /// which this build lacks (see E5106).
    E5102,
    /// No dynamic library selected
    E5103,
    /// Function name already taken
    E5104,
    /// Unknown help topic
    E5105,
    /// Dynamic library loading unavailable
    E5106,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1101,
        ErrorCode::E1102,
        ErrorCode::E1201,
        ErrorCode::E1300,
        ErrorCode::E2001,
        ErrorCode::E2311,
        ErrorCode::E2321,
        ErrorCode::E2322,
        ErrorCode::E2323,
        ErrorCode::E2331,
        ErrorCode::E2332,
        ErrorCode::E2401,
        ErrorCode::E2501,
        ErrorCode::E3001,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E4003,
        ErrorCode::E5101,
        ErrorCode::E5102,
        ErrorCode::E5103,
        ErrorCode::E5104,
        ErrorCode::E5105,
        ErrorCode::E5106,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1101 => "E1101",
            ErrorCode::E1102 => "E1102",
            ErrorCode::E1201 => "E1201",
            ErrorCode::E1300 => "E1300",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2311 => "E2311",
            ErrorCode::E2321 => "E2321",
            ErrorCode::E2322 => "E2322",
            ErrorCode::E2323 => "E2323",
            ErrorCode::E2331 => "E2331",
            ErrorCode::E2332 => "E2332",
            ErrorCode::E2401 => "E2401",
            ErrorCode::E2501 => "E2501",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E4003 => "E4003",
            ErrorCode::E5101 => "E5101",
            ErrorCode::E5102 => "E5102",
            ErrorCode::E5103 => "E5103",
            ErrorCode::E5104 => "E5104",
            ErrorCode::E5105 => "E5105",
            ErrorCode::E5106 => "E5106",
        }
    }

    /// Message template. Each `[..]` is filled by one substitution argument.
    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::E1101 => "invalid argument, [..]",
            ErrorCode::E1102 => "NULL argument, [..]",
            ErrorCode::E1201 => "failed syscall, [..]",
            ErrorCode::E1300 => "logical error, [..]",
            ErrorCode::E2001 => "character not supported, [..]",
            ErrorCode::E2311 => "malformed floating number, [..]",
            ErrorCode::E2321 => "malformed integer number, [..]",
            ErrorCode::E2322 => "malformed binary integer number, [..]",
            ErrorCode::E2323 => "malformed base 10 integer number, [..]",
            ErrorCode::E2331 => "a string cannot be empty",
            ErrorCode::E2332 => "unclosed string, reached EOF",
            ErrorCode::E2401 => "as of now, the only two supported operators starting by + are [..]",
            ErrorCode::E2501 => "unclosed comment, reached EOF",
            ErrorCode::E3001 => "mathematical constants are inmutable",
            ErrorCode::E4001 => "catched a division by 0",
            ErrorCode::E4002 => "incorrect amount of arguments, expected [..] args",
            ErrorCode::E4003 => "incorrect argument type, expected a [..]",
            ErrorCode::E5101 => {
                "the input file is inaccessible; check if the path is right, \
                 and if its permissions allow reading it"
            }
            ErrorCode::E5102 => {
                "no function by the given name could be found; check if the name is right, \
                 and if it should be in the currently selected library"
            }
            ErrorCode::E5103 => {
                "no dynamic library has been selected; check if the last specified library \
                 has been successfully opened"
            }
            ErrorCode::E5104 => {
                "a mathematical function that goes by the same name is already loaded"
            }
            ErrorCode::E5105 => "no help topic goes by the name [..]",
            ErrorCode::E5106 => "dynamic libraries cannot be loaded by this build, [..]",
        }
    }

    /// Numeric value of the code (`E2321` is `2321`).
    pub fn number(&self) -> u16 {
        self.as_str()[1..].parse().unwrap_or(0)
    }

    pub fn phase(&self) -> Phase {
        match self.number() / 1000 {
            1 => Phase::Internal,
            2 => Phase::Lexical,
            3 => Phase::Syntactic,
            4 => Phase::Semantic,
            _ => Phase::User,
        }
    }

    /// Internal codes report broken invariants rather than bad input.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.phase() == Phase::Internal
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&NumberError> for ErrorCode {
    fn from(err: &NumberError) -> Self {
        match err {
            NumberError::DivisionByZero => ErrorCode::E4001,
            NumberError::Overflow(_) | NumberError::Malformed { .. } => ErrorCode::E2321,
        }
    }
}

/// Parse a code like `"E2321"` (case-insensitive).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
