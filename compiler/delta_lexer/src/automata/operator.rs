//! Two-byte operators starting with `=` or `+`.

use delta_ir::TokenCategory;

use crate::LexErrorKind;

use super::Action;

/// After `=`: `==` or `=`.
pub(super) fn equals(input: Option<u8>) -> Action {
    match input {
        Some(b'=') => Action::accept(TokenCategory::Equals),
        Some(_) => Action::accept_before(TokenCategory::Assign),
        None => Action::accept(TokenCategory::Assign),
    }
}

/// After `+`: `++` or `+=`. A lone `+` is not an operator.
pub(super) fn plus(input: Option<u8>) -> Action {
    match input {
        Some(b'+') => Action::accept(TokenCategory::Increment),
        Some(b'=') => Action::accept(TokenCategory::PlusAssign),
        Some(_) => Action::fail_before(LexErrorKind::UnsupportedOperator),
        None => Action::fail(LexErrorKind::UnsupportedOperator),
    }
}
