//! Tokens produced by the Delta lexer.
//!
//! A [`TokenCategory`] belongs to exactly one [`CategoryGroup`] (its band).
//! The band decides which [`Attribute`] a [`Token`] carries:
//!
//! | Band | Attribute |
//! |------|-----------|
//! | keyword, identifier | [`Attribute::SymbolRef`] |
//! | literal | [`Attribute::Lexeme`] |
//! | operator, separator, whitespace | none |
//!
//! The constructors on [`Token`] are the only way to build one, so a token
//! whose payload disagrees with its band cannot exist.

use std::fmt;

use crate::Position;

/// Handle to an entry of the symbol table.
///
/// Handles are never reused while the table is alive, so two tokens that
/// name the same identifier compare equal through their handles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl EntryId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        EntryId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Band a [`TokenCategory`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Separator,
    Whitespace,
}

impl CategoryGroup {
    /// Whether tokens of this band reference a symbol-table entry.
    #[inline]
    pub const fn carries_symbol(self) -> bool {
        matches!(self, CategoryGroup::Keyword | CategoryGroup::Identifier)
    }

    /// Whether tokens of this band own their lexeme.
    #[inline]
    pub const fn carries_lexeme(self) -> bool {
        matches!(self, CategoryGroup::Literal)
    }
}

/// Sub-band of the operator band.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Arithmetic,
    Relational,
    Assignment,
    Access,
}

/// Every category a token or symbol-table entry can have.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    // Keyword band
    Keyword,

    // Identifier band
    /// User identifier, created on first sighting (a workspace variable).
    Identifier,
    /// Preloaded math function such as `sqrt`.
    Function,
    /// Preloaded math constant such as `pi`.
    Constant,
    /// Interactive command such as `quit`.
    Command,

    // Literal band
    LiteralInt,
    LiteralFloat,
    LiteralString,

    // Arithmetic operators
    Plus,
    Minus,
    Times,
    Div,
    Increment,
    Decrement,

    // Relational operators
    LessThan,
    GreaterThan,
    Equals,
    NotEquals,

    // Assignment operators
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivAssign,

    // Access operators
    Dot,
    LBracket,
    RBracket,

    // Separators
    Comma,
    Semicolon,
    LParen,
    RParen,
    LCurly,
    RCurly,

    // Whitespace band
    Whitespace,
    Comment,
    Eol,
}

impl TokenCategory {
    /// The band this category belongs to.
    pub const fn category_group(self) -> CategoryGroup {
        use TokenCategory::{
            Assign, Comma, Command, Comment, Constant, Decrement, Div, DivAssign, Dot, Eol,
            Equals, Function, GreaterThan, Identifier, Increment, Keyword, LBracket, LCurly,
            LParen, LessThan, LiteralFloat, LiteralInt, LiteralString, Minus, MinusAssign,
            NotEquals, Plus, PlusAssign, RBracket, RCurly, RParen, Semicolon, Times,
            TimesAssign, Whitespace,
        };

        match self {
            Keyword => CategoryGroup::Keyword,
            Identifier | Function | Constant | Command => CategoryGroup::Identifier,
            LiteralInt | LiteralFloat | LiteralString => CategoryGroup::Literal,
            Plus | Minus | Times | Div | Increment | Decrement | LessThan | GreaterThan
            | Equals | NotEquals | Assign | PlusAssign | MinusAssign | TimesAssign
            | DivAssign | Dot | LBracket | RBracket => CategoryGroup::Operator,
            Comma | Semicolon | LParen | RParen | LCurly | RCurly => CategoryGroup::Separator,
            Whitespace | Comment | Eol => CategoryGroup::Whitespace,
        }
    }

    /// The operator sub-band, or `None` outside the operator band.
    pub const fn operator_class(self) -> Option<OperatorClass> {
        use TokenCategory::{
            Assign, Decrement, Div, DivAssign, Dot, Equals, GreaterThan, Increment, LBracket,
            LessThan, Minus, MinusAssign, NotEquals, Plus, PlusAssign, RBracket, Times,
            TimesAssign,
        };

        match self {
            Plus | Minus | Times | Div | Increment | Decrement => Some(OperatorClass::Arithmetic),
            LessThan | GreaterThan | Equals | NotEquals => Some(OperatorClass::Relational),
            Assign | PlusAssign | MinusAssign | TimesAssign | DivAssign => {
                Some(OperatorClass::Assignment)
            }
            Dot | LBracket | RBracket => Some(OperatorClass::Access),
            _ => None,
        }
    }

    /// Whether the lexer skips tokens of this category.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self.category_group(), CategoryGroup::Whitespace)
    }

    /// Display name, e.g. `LC_OP_ARITHMETIC_PLUS`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "LC_KEYWORD",
            TokenCategory::Identifier => "LC_IDENTIFIER",
            TokenCategory::Function => "LC_IDENTIFIER_FUNCTION",
            TokenCategory::Constant => "LC_IDENTIFIER_CONSTANT",
            TokenCategory::Command => "LC_IDENTIFIER_COMMAND",
            TokenCategory::LiteralInt => "LC_LITERAL_INT",
            TokenCategory::LiteralFloat => "LC_LITERAL_FP",
            TokenCategory::LiteralString => "LC_LITERAL_STR",
            TokenCategory::Plus => "LC_OP_ARITHMETIC_PLUS",
            TokenCategory::Minus => "LC_OP_ARITHMETIC_MINUS",
            TokenCategory::Times => "LC_OP_ARITHMETIC_TIMES",
            TokenCategory::Div => "LC_OP_ARITHMETIC_DIV",
            TokenCategory::Increment => "LC_OP_ARITHMETIC_INCREMENT",
            TokenCategory::Decrement => "LC_OP_ARITHMETIC_DECREMENT",
            TokenCategory::LessThan => "LC_OP_RELATIONAL_LESS_THAN",
            TokenCategory::GreaterThan => "LC_OP_RELATIONAL_GREATER_THAN",
            TokenCategory::Equals => "LC_OP_RELATIONAL_EQUALS",
            TokenCategory::NotEquals => "LC_OP_RELATIONAL_NOT_EQUALS",
            TokenCategory::Assign => "LC_OP_ASSIGNMENT_ASSIGN",
            TokenCategory::PlusAssign => "LC_OP_ASSIGNMENT_PLUS_ASSIGN",
            TokenCategory::MinusAssign => "LC_OP_ASSIGNMENT_MINUS_ASSIGN",
            TokenCategory::TimesAssign => "LC_OP_ASSIGNMENT_TIMES_ASSIGN",
            TokenCategory::DivAssign => "LC_OP_ASSIGNMENT_DIV_ASSIGN",
            TokenCategory::Dot => "LC_OP_ACCESS_DOT",
            TokenCategory::LBracket => "LC_OP_ACCESS_L_BRACKET",
            TokenCategory::RBracket => "LC_OP_ACCESS_R_BRACKET",
            TokenCategory::Comma => "LC_SEPARATOR_COMMA",
            TokenCategory::Semicolon => "LC_SEPARATOR_SEMICOL",
            TokenCategory::LParen => "LC_SEPARATOR_L_PARENTHESIS",
            TokenCategory::RParen => "LC_SEPARATOR_R_PARENTHESIS",
            TokenCategory::LCurly => "LC_SEPARATOR_L_CURLY",
            TokenCategory::RCurly => "LC_SEPARATOR_R_CURLY",
            TokenCategory::Whitespace => "LC_WHITESPACE",
            TokenCategory::Comment => "LC_WHITESPACE_COMMENT",
            TokenCategory::Eol => "LC_WHITESPACE_EOL",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a token, tagged by ownership.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Source text of a literal, owned by the token.
    Lexeme(String),
    /// Entry of the symbol table; the table owns the entry.
    SymbolRef(EntryId),
}

/// A recognized token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    category: TokenCategory,
    attribute: Option<Attribute>,
    position: Position,
}

impl Token {
    /// A literal token owning its lexeme.
    ///
    /// Returns `None` when `category` is not in the literal band.
    pub fn literal(category: TokenCategory, lexeme: String, position: Position) -> Option<Self> {
        category.category_group().carries_lexeme().then(|| Token {
            category,
            attribute: Some(Attribute::Lexeme(lexeme)),
            position,
        })
    }

    /// A keyword or identifier token referencing a symbol-table entry.
    ///
    /// Returns `None` when `category` is not in the keyword or identifier band.
    pub fn symbol(category: TokenCategory, entry: EntryId, position: Position) -> Option<Self> {
        category.category_group().carries_symbol().then_some(Token {
            category,
            attribute: Some(Attribute::SymbolRef(entry)),
            position,
        })
    }

    /// A token without payload (operators, separators, whitespace).
    ///
    /// Returns `None` when `category` requires a payload.
    pub fn bare(category: TokenCategory, position: Position) -> Option<Self> {
        let group = category.category_group();
        (!group.carries_lexeme() && !group.carries_symbol()).then_some(Token {
            category,
            attribute: None,
            position,
        })
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    #[inline]
    pub fn attribute(&self) -> Option<&Attribute> {
        self.attribute.as_ref()
    }

    /// Position of the first byte of the token.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The owned lexeme of a literal token.
    pub fn lexeme(&self) -> Option<&str> {
        match &self.attribute {
            Some(Attribute::Lexeme(text)) => Some(text),
            _ => None,
        }
    }

    /// The referenced entry of a keyword or identifier token.
    pub fn entry(&self) -> Option<EntryId> {
        match self.attribute {
            Some(Attribute::SymbolRef(id)) => Some(id),
            _ => None,
        }
    }

    /// Consume the token, yielding its owned lexeme if it had one.
    pub fn into_lexeme(self) -> Option<String> {
        match self.attribute {
            Some(Attribute::Lexeme(text)) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(Attribute::Lexeme(text)) => {
                write!(f, "{}({text:?}) @ {}", self.category, self.position)
            }
            Some(Attribute::SymbolRef(id)) => {
                write!(f, "{}(#{}) @ {}", self.category, id.index(), self.position)
            }
            None => write!(f, "{} @ {}", self.category, self.position),
        }
    }
}

crate::static_assert_size!(TokenCategory, 1);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
