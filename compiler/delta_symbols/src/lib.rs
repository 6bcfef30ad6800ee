//! Delta symbol table.
//!
//! One namespace holds every name the lexer can meet: keywords, the
//! preloaded math functions and constants, the interactive commands, and
//! the user identifiers interned on first sighting. Because names are
//! unique across all of them, a single lookup tells an identifier from a
//! reserved word.

mod builtins;
mod command;
mod table;

pub use builtins::{MathFn, COMMANDS, CONSTANTS, FUNCTIONS, KEYWORDS};
pub use command::{CommandHost, CommandImpl, CommandStatus};
pub use table::{EntryAttribute, SymbolEntry, SymbolTable, SymbolTableError};
