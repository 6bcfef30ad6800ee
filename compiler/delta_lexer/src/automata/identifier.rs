//! Identifiers and everything spelled like one.
//!
//! The automaton only finds the extent of the word. Whether it is a keyword,
//! a constant, a function, a command or a user identifier is decided by the
//! symbol table, which the analyzer consults because of
//! [`ActionFlags::PROMOTE`].

use delta_ir::TokenCategory;

use super::{is_ident_continue, Action, ActionFlags, State};

pub(super) fn step(input: Option<u8>) -> Action {
    let finish = ActionFlags::SAVE_LEXEME | ActionFlags::PROMOTE;
    match input {
        Some(byte) if is_ident_continue(byte) => Action::goto(State::Identifier),
        Some(_) => Action::accept_before(TokenCategory::Identifier).with(finish),
        None => Action::accept(TokenCategory::Identifier).with(finish),
    }
}
