//! Line/column positions in a source.

use std::fmt;

/// A 1-based line and column in a source.
///
/// Columns count bytes, not characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first byte of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position after consuming `byte` at `self`.
    ///
    /// A newline moves to column 1 of the next line; every other byte moves
    /// one column right.
    #[inline]
    #[must_use]
    pub const fn advance(self, byte: u8) -> Self {
        if byte == b'\n' {
            Position {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ln {} : col {}", self.line, self.column)
    }
}
