//! Names seeded into every new symbol table.

use delta_ir::{DecNumber, TokenCategory};

use crate::command::{self, CommandImpl};
use crate::{EntryAttribute, SymbolEntry};

/// A preloaded math function.
pub type MathFn = fn(f64) -> f64;

/// Reserved words. `import` is missing on purpose: it names a command.
pub const KEYWORDS: &[&str] = &[
    "double", "int", "while", "foreach", "return", "void", "cast", "string",
];

pub const CONSTANTS: &[(&str, f64)] = &[("e", std::f64::consts::E), ("pi", std::f64::consts::PI)];

pub const FUNCTIONS: &[(&str, MathFn)] = &[
    ("fabs", f64::abs as MathFn),
    ("exp", f64::exp as MathFn),
    ("exp2", f64::exp2 as MathFn),
    ("log", f64::ln as MathFn),
    ("log2", f64::log2 as MathFn),
    ("log10", f64::log10 as MathFn),
    ("cbrt", f64::cbrt as MathFn),
    ("sqrt", f64::sqrt as MathFn),
    ("acos", f64::acos as MathFn),
    ("asin", f64::asin as MathFn),
    ("atan", f64::atan as MathFn),
    ("cos", f64::cos as MathFn),
    ("sin", f64::sin as MathFn),
    ("tan", f64::tan as MathFn),
    ("acosh", f64::acosh as MathFn),
    ("asinh", f64::asinh as MathFn),
    ("atanh", f64::atanh as MathFn),
    ("cosh", f64::cosh as MathFn),
    ("sinh", f64::sinh as MathFn),
    ("tanh", f64::tanh as MathFn),
];

pub const COMMANDS: &[(&str, CommandImpl)] = &[
    ("help", CommandImpl::Nullary(command::help)),
    ("quit", CommandImpl::Nullary(command::quit)),
    ("ws", CommandImpl::Nullary(command::show_workspace)),
    ("wsc", CommandImpl::Nullary(command::clear_workspace)),
    ("dhelp", CommandImpl::Unary(command::topic_help)),
    ("import", CommandImpl::Unary(command::import)),
    ("from", CommandImpl::Unary(command::from)),
    ("load", CommandImpl::Unary(command::load)),
];

/// Every built-in entry, in seeding order.
pub(crate) fn entries() -> impl Iterator<Item = SymbolEntry> {
    let keywords = KEYWORDS
        .iter()
        .map(|&name| SymbolEntry::new(name, TokenCategory::Keyword, EntryAttribute::Unset));
    let constants = CONSTANTS.iter().map(|&(name, value)| {
        SymbolEntry::new(
            name,
            TokenCategory::Constant,
            EntryAttribute::Number(DecNumber::Floating(value)),
        )
    });
    let functions = FUNCTIONS.iter().map(|&(name, function)| {
        SymbolEntry::new(name, TokenCategory::Function, EntryAttribute::Function(function))
    });
    let commands = COMMANDS.iter().map(|&(name, implementation)| {
        SymbolEntry::new(name, TokenCategory::Command, EntryAttribute::Command(implementation))
    });

    keywords.chain(constants).chain(functions).chain(commands)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
