//! Finite-state recognizers for multi-byte tokens.
//!
//! Each automaton is a pure function from its local state and one input
//! symbol to an [`Action`]. `None` is the end-of-input symbol: accepting
//! states finish their token on it, the others report why they could not.
//!
//! The local states of all automata are variants of one [`State`] enum, so
//! an automaton hands over to another (`0.` switching from the integer
//! recognizer to the float one) just by returning the other's state.
//!
//! | First byte | Automaton |
//! |------------|-----------|
//! | `/` | comment or division |
//! | `"` | string |
//! | `=` | equality or assignment |
//! | `+` | increment or plus-assign |
//! | whitespace | whitespace |
//! | letter, `_` | identifier or keyword |
//! | digit, `.` | number or dot |

mod comment;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

use bitflags::bitflags;
use delta_ir::TokenCategory;

use crate::LexErrorKind;

pub use comment::CommentState;
pub use number::{BinaryState, FloatState, NumberState};
pub use string::StringState;

bitflags! {
    /// Instructions for the driver loop attached to an [`Action`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ActionFlags: u8 {
        /// Feed the automaton another symbol.
        const CONTINUE = 1 << 0;
        /// The symbol just read belongs to the next token.
        const PUSH_BACK = 1 << 1;
        /// Capture the bytes of the token.
        const SAVE_LEXEME = 1 << 2;
        /// Resolve the final category through the symbol table.
        const PROMOTE = 1 << 3;
    }
}

/// Outcome of one step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Recognized(TokenCategory),
    Failed(LexErrorKind),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub verdict: Verdict,
    /// State for the next step; meaningful only with [`ActionFlags::CONTINUE`].
    pub next: State,
    pub flags: ActionFlags,
}

impl Action {
    /// Keep going in `state`.
    #[inline]
    pub(crate) fn goto(state: State) -> Self {
        Action {
            verdict: Verdict::Pending,
            next: state,
            flags: ActionFlags::CONTINUE,
        }
    }

    /// Token complete, including the symbol just read.
    #[inline]
    pub(crate) fn accept(category: TokenCategory) -> Self {
        Action {
            verdict: Verdict::Recognized(category),
            next: State::Done,
            flags: ActionFlags::empty(),
        }
    }

    /// Token complete; the symbol just read starts the next one.
    #[inline]
    pub(crate) fn accept_before(category: TokenCategory) -> Self {
        Action::accept(category).with(ActionFlags::PUSH_BACK)
    }

    /// Token abandoned, including the symbol just read.
    #[inline]
    pub(crate) fn fail(kind: LexErrorKind) -> Self {
        Action {
            verdict: Verdict::Failed(kind),
            next: State::Done,
            flags: ActionFlags::empty(),
        }
    }

    /// Token abandoned; the symbol just read is left for the next token.
    #[inline]
    pub(crate) fn fail_before(kind: LexErrorKind) -> Self {
        Action::fail(kind).with(ActionFlags::PUSH_BACK)
    }

    #[inline]
    #[must_use]
    pub(crate) fn with(mut self, flags: ActionFlags) -> Self {
        self.flags |= flags;
        self
    }
}

/// Which automaton a [`State`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AutomatonId {
    CommentOrDiv,
    String,
    EqualsOrAssign,
    IncrementOrPlusAssign,
    Whitespace,
    IdentifierOrKeyword,
    NumberOrDot,
    FloatingNumber,
    BinaryNumber,
}

/// Local state of the running automaton.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Comment(CommentState),
    String(StringState),
    Equals,
    Plus,
    Whitespace,
    Identifier,
    Number(NumberState),
    Float(FloatState),
    Binary(BinaryState),
    /// No automaton is running.
    Done,
}

impl State {
    pub fn automaton(self) -> Option<AutomatonId> {
        Some(match self {
            State::Comment(_) => AutomatonId::CommentOrDiv,
            State::String(_) => AutomatonId::String,
            State::Equals => AutomatonId::EqualsOrAssign,
            State::Plus => AutomatonId::IncrementOrPlusAssign,
            State::Whitespace => AutomatonId::Whitespace,
            State::Identifier => AutomatonId::IdentifierOrKeyword,
            State::Number(_) => AutomatonId::NumberOrDot,
            State::Float(_) => AutomatonId::FloatingNumber,
            State::Binary(_) => AutomatonId::BinaryNumber,
            State::Done => return None,
        })
    }
}

/// How the first byte of a token is handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The byte is a whole token.
    Single(TokenCategory),
    /// Run an automaton from this state on the following bytes.
    Run(State),
    /// No token starts with this byte.
    Unsupported,
}

/// Pick the handling for the first byte of a token.
pub fn select(first: u8) -> Selection {
    if let Some(category) = single_char_category(first) {
        return Selection::Single(category);
    }
    match first {
        b'/' => Selection::Run(State::Comment(CommentState::Start)),
        b'"' => Selection::Run(State::String(StringState::Start)),
        b'=' => Selection::Run(State::Equals),
        b'+' => Selection::Run(State::Plus),
        b'0' => Selection::Run(State::Number(NumberState::AfterZero)),
        b'1'..=b'9' => Selection::Run(State::Number(NumberState::Decimal)),
        b'.' => Selection::Run(State::Number(NumberState::Dot)),
        b if is_space(b) => Selection::Run(State::Whitespace),
        b if is_ident_start(b) => Selection::Run(State::Identifier),
        _ => Selection::Unsupported,
    }
}

/// Bytes that are always a token on their own.
pub fn single_char_category(byte: u8) -> Option<TokenCategory> {
    Some(match byte {
        b'-' => TokenCategory::Minus,
        b'*' => TokenCategory::Times,
        b'<' => TokenCategory::LessThan,
        b'>' => TokenCategory::GreaterThan,
        b'[' => TokenCategory::LBracket,
        b']' => TokenCategory::RBracket,
        b',' => TokenCategory::Comma,
        b';' => TokenCategory::Semicolon,
        b'(' => TokenCategory::LParen,
        b')' => TokenCategory::RParen,
        b'{' => TokenCategory::LCurly,
        b'}' => TokenCategory::RCurly,
        _ => return None,
    })
}

/// Run one step of the automaton owning `state`.
pub fn step(state: State, input: Option<u8>) -> Action {
    match state {
        State::Comment(s) => comment::step(s, input),
        State::String(s) => string::step(s, input),
        State::Equals => operator::equals(input),
        State::Plus => operator::plus(input),
        State::Whitespace => whitespace::step(input),
        State::Identifier => identifier::step(input),
        State::Number(s) => number::step(s, input),
        State::Float(s) => number::float_step(s, input),
        State::Binary(s) => number::binary_step(s, input),
        State::Done => Action::fail(LexErrorKind::UnsupportedCharacter(input.unwrap_or(0))),
    }
}

#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[inline]
pub(crate) fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
pub(crate) fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
