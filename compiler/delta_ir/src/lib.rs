//! Delta IR - shared front-end types
//!
//! This crate holds the data that crosses crate boundaries in the Delta
//! front end:
//! - [`TokenCategory`] and its bands ([`CategoryGroup`], [`OperatorClass`])
//! - [`Token`] and its ownership-tagged [`Attribute`]
//! - [`EntryId`], the handle a token uses to reference a symbol-table entry
//! - [`Position`] for line/column tracking
//! - [`DecNumber`], the integer-or-floating value of constants and literals

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the hot lexer types from growing by accident.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod dec_number;
mod position;
mod token;

pub use dec_number::{ArithmeticOp, DecNumber, NumberError};
pub use position::Position;
pub use token::{Attribute, CategoryGroup, EntryId, OperatorClass, Token, TokenCategory};
