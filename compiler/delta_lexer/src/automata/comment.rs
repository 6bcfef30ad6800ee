//! `/`, `//` line comments, `/* */` block comments and nestable `/+ +/`
//! comments.

use delta_ir::TokenCategory;

use super::{Action, State};
use crate::LexErrorKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommentState {
    /// After the leading `/`.
    Start,
    Line,
    Block,
    /// A `*` inside a block comment.
    BlockStar,
    /// Inside `depth` levels of `/+`.
    Nested { depth: u32 },
    /// A `+` inside a nested comment.
    NestedPlus { depth: u32 },
    /// A `/` inside a nested comment.
    NestedSlash { depth: u32 },
}

fn goto(state: CommentState) -> Action {
    Action::goto(State::Comment(state))
}

pub(super) fn step(state: CommentState, input: Option<u8>) -> Action {
    use CommentState::{Block, BlockStar, Line, Nested, NestedPlus, NestedSlash, Start};

    let Some(byte) = input else {
        return match state {
            Start => Action::accept(TokenCategory::Div),
            Line => Action::accept(TokenCategory::Comment),
            _ => Action::fail(LexErrorKind::UnterminatedComment),
        };
    };

    match (state, byte) {
        (Start, b'/') => goto(Line),
        (Start, b'*') => goto(Block),
        (Start, b'+') => goto(Nested { depth: 1 }),
        (Start, _) => Action::accept_before(TokenCategory::Div),

        (Line, b'\n') => Action::accept(TokenCategory::Comment),
        (Line, _) => goto(Line),

        (Block | BlockStar, b'*') => goto(BlockStar),
        (BlockStar, b'/') => Action::accept(TokenCategory::Comment),
        (Block | BlockStar, _) => goto(Block),

        (Nested { depth } | NestedPlus { depth } | NestedSlash { depth }, b'+') => {
            if matches!(state, NestedSlash { .. }) {
                goto(Nested {
                    depth: depth.saturating_add(1),
                })
            } else {
                goto(NestedPlus { depth })
            }
        }
        (NestedPlus { depth: 1 }, b'/') => Action::accept(TokenCategory::Comment),
        (NestedPlus { depth }, b'/') => goto(Nested { depth: depth - 1 }),
        (Nested { depth } | NestedSlash { depth }, b'/') => goto(NestedSlash { depth }),
        (Nested { depth } | NestedPlus { depth } | NestedSlash { depth }, _) => {
            goto(Nested { depth })
        }
    }
}
