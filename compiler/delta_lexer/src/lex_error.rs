//! Lexer error types.
//!
//! Automata fail with a [`LexErrorKind`]; the analyzer turns it into a
//! [`Diagnostic`] at the position of the offending byte and returns it as a
//! [`LexError`].

use delta_diagnostic::{Diagnostic, ErrorCode};
use delta_ir::Position;

/// What went wrong while recognizing a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No token starts with this byte.
    UnsupportedCharacter(u8),
    /// Bad continuation of a floating number.
    MalformedFloat(&'static str),
    /// Bad continuation of an integer starting with `0`.
    MalformedInteger(&'static str),
    /// Bad continuation of a base 10 integer.
    MalformedDecimal(&'static str),
    /// Bad continuation of a `0b` integer.
    MalformedBinary(&'static str),
    /// `""`.
    EmptyString,
    /// End of input before the closing `"`.
    UnterminatedString,
    /// `+` followed by something other than `+` or `=`.
    UnsupportedOperator,
    /// End of input inside a block comment.
    UnterminatedComment,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnsupportedCharacter(_) => ErrorCode::E2001,
            LexErrorKind::MalformedFloat(_) => ErrorCode::E2311,
            LexErrorKind::MalformedInteger(_) => ErrorCode::E2321,
            LexErrorKind::MalformedBinary(_) => ErrorCode::E2322,
            LexErrorKind::MalformedDecimal(_) => ErrorCode::E2323,
            LexErrorKind::EmptyString => ErrorCode::E2331,
            LexErrorKind::UnterminatedString => ErrorCode::E2332,
            LexErrorKind::UnsupportedOperator => ErrorCode::E2401,
            LexErrorKind::UnterminatedComment => ErrorCode::E2501,
        }
    }

    /// Diagnostic at `position` of the source called `source`.
    pub fn into_diagnostic(self, source: &str, position: Position) -> Diagnostic {
        let diag = Diagnostic::at(self.code(), source, position);
        match self {
            LexErrorKind::UnsupportedCharacter(byte) => {
                diag.with_arg(format!("'{}'", byte.escape_ascii()))
            }
            LexErrorKind::MalformedFloat(reason)
            | LexErrorKind::MalformedInteger(reason)
            | LexErrorKind::MalformedDecimal(reason)
            | LexErrorKind::MalformedBinary(reason) => diag.with_arg(reason),
            LexErrorKind::UnsupportedOperator => diag.with_arg("'++' -OR- '+='"),
            LexErrorKind::EmptyString
            | LexErrorKind::UnterminatedString
            | LexErrorKind::UnterminatedComment => diag,
        }
    }
}

/// Failure returned by [`LexicalAnalyzer::next_token`](crate::LexicalAnalyzer::next_token).
///
/// The diagnostic has already been emitted when this is returned.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    /// Bad input. The current token is abandoned; lexing can resume.
    #[error("{0}")]
    Lexical(Diagnostic),
    /// Broken invariant inside the lexer. Lexing must stop.
    #[error("{0}")]
    Internal(Diagnostic),
}

impl LexError {
    pub(crate) fn internal(function: &'static str, message: impl Into<String>) -> Self {
        LexError::Internal(
            Diagnostic::internal(ErrorCode::E1300, "analyzer.rs", function).with_arg(message),
        )
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            LexError::Lexical(diag) | LexError::Internal(diag) => diag,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, LexError::Internal(_))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
