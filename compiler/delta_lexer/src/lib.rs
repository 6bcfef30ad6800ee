//! Delta lexical analyzer.
//!
//! [`LexicalAnalyzer::next_token`] reads the first unconsumed byte and
//! either maps it straight to a category or hands it to one of the small
//! finite-state machines in [`automata`]. The analyzer feeds the machine one
//! byte at a time, applies the flags of each [`Action`](automata::Action)
//! (pushback, lexeme capture, symbol promotion) and keeps line/column
//! tracking in step. Whitespace and comments are recognized like any other
//! token and then skipped.

mod analyzer;
pub mod automata;
mod lex_error;

pub use analyzer::LexicalAnalyzer;
pub use lex_error::{LexError, LexErrorKind};
