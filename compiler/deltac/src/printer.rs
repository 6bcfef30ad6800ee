//! One-line rendering of tokens.
//!
//! ```text
//! LC_LITERAL_INT 0b101 = 5 @ ln 1 : col 1
//! LC_IDENTIFIER_CONSTANT pi [constant = 3.141592653589793] @ ln 1 : col 9
//! LC_SEPARATOR_SEMICOL @ ln 1 : col 11
//! ```

use std::fmt::Write as _;
use std::io;

use delta_ir::{Attribute, DecNumber, Token, TokenCategory};
use delta_symbols::{EntryAttribute, SymbolEntry, SymbolTable};

#[derive(Copy, Clone, Debug, Default)]
pub struct TokenPrinter;

impl TokenPrinter {
    pub fn new() -> Self {
        TokenPrinter
    }

    /// `<CATEGORY> [payload] @ <position>`.
    pub fn render(&self, token: &Token, symbols: &SymbolTable) -> String {
        let mut line = token.category().as_str().to_string();
        match token.attribute() {
            Some(Attribute::Lexeme(lexeme)) => {
                // Writing into a String cannot fail.
                let _ = write!(line, " {lexeme}");
                if let Some(value) = literal_value(token.category(), lexeme) {
                    let _ = write!(line, " = {value}");
                }
            }
            Some(Attribute::SymbolRef(id)) => match symbols.get(*id) {
                Some(entry) => {
                    let _ = write!(line, " {} [{}]", entry.lexeme, entry_kind(entry));
                }
                None => line.push_str(" [deleted]"),
            },
            None => {}
        }
        let _ = write!(line, " @ {}", token.position());
        line
    }

    pub fn print(
        &self,
        out: &mut dyn io::Write,
        token: &Token,
        symbols: &SymbolTable,
    ) -> io::Result<()> {
        writeln!(out, "{}", self.render(token, symbols))
    }
}

fn literal_value(category: TokenCategory, lexeme: &str) -> Option<String> {
    match category {
        TokenCategory::LiteralInt | TokenCategory::LiteralFloat => {
            Some(match DecNumber::from_literal(category, lexeme) {
                Ok(value) => value.to_string(),
                Err(err) => format!("<{err}>"),
            })
        }
        _ => None,
    }
}

/// Short description of what a symbol-table entry holds.
pub fn entry_kind(entry: &SymbolEntry) -> String {
    match (entry.category, entry.attribute) {
        (TokenCategory::Keyword, _) => "keyword".to_string(),
        (TokenCategory::Constant, EntryAttribute::Number(value)) => format!("constant = {value}"),
        (TokenCategory::Constant, _) => "constant".to_string(),
        (_, EntryAttribute::Function(_)) => "function".to_string(),
        (_, EntryAttribute::Command(command)) => match command.arity() {
            0 => "command".to_string(),
            arity => format!("command, {arity} arg"),
        },
        (_, EntryAttribute::Number(value)) => format!("variable = {value}"),
        (_, EntryAttribute::Unset) => "variable".to_string(),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
