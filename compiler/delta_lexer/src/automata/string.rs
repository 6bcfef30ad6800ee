//! Double-quoted strings with backslash escapes.
//!
//! Escapes are kept verbatim in the lexeme; only `\"` matters here, as it
//! does not close the string.

use delta_ir::TokenCategory;

use super::{Action, ActionFlags, State};
use crate::LexErrorKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StringState {
    /// After the opening `"`.
    Start,
    Body,
    /// After a `\`.
    Escape,
}

fn goto(state: StringState) -> Action {
    Action::goto(State::String(state))
}

pub(super) fn step(state: StringState, input: Option<u8>) -> Action {
    let Some(byte) = input else {
        return Action::fail(LexErrorKind::UnterminatedString);
    };

    match (state, byte) {
        (StringState::Start, b'"') => Action::fail(LexErrorKind::EmptyString),
        (StringState::Start | StringState::Body, b'\\') => goto(StringState::Escape),
        (StringState::Body, b'"') => {
            Action::accept(TokenCategory::LiteralString).with(ActionFlags::SAVE_LEXEME)
        }
        _ => goto(StringState::Body),
    }
}
