//! Runs of whitespace, reported as one trivia token.

use delta_ir::TokenCategory;

use super::{is_space, Action, State};

pub(super) fn step(input: Option<u8>) -> Action {
    match input {
        Some(byte) if is_space(byte) => Action::goto(State::Whitespace),
        Some(_) => Action::accept_before(TokenCategory::Whitespace),
        None => Action::accept(TokenCategory::Whitespace),
    }
}
