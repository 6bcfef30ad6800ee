//! Diagnostics: a code, where it happened, and the words for its gaps.

use std::fmt;

use delta_ir::Position;
use smallvec::SmallVec;

use crate::ErrorCode;

/// Placeholder in message templates.
const GAP: &str = "[..]";

/// Where a diagnostic was raised.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// A line and column in a named source.
    Source { name: String, position: Position },
    /// The internal file and function that detected a broken invariant.
    Internal {
        file: &'static str,
        function: &'static str,
    },
    /// No useful location (e.g. a command-line failure).
    Unknown,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Source { name, position } => write!(f, "input file {name} : {position}"),
            Location::Internal { file, function } => {
                write!(f, "internal file : {file} : {function}()")
            }
            Location::Unknown => f.write_str("unknown location"),
        }
    }
}

/// A reportable error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub location: Location,
    /// Substitutions for the template gaps, in order.
    pub args: SmallVec<[String; 2]>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, location: Location) -> Self {
        Diagnostic {
            code,
            location,
            args: SmallVec::new(),
        }
    }

    /// A diagnostic at `position` of the source called `name`.
    pub fn at(code: ErrorCode, name: impl Into<String>, position: Position) -> Self {
        Diagnostic::new(
            code,
            Location::Source {
                name: name.into(),
                position,
            },
        )
    }

    /// A diagnostic raised by internal code.
    pub fn internal(code: ErrorCode, file: &'static str, function: &'static str) -> Self {
        Diagnostic::new(code, Location::Internal { file, function })
    }

    /// Append one substitution argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// The template with every gap filled.
    ///
    /// Gaps beyond the supplied arguments stay as a literal `[..]`; extra
    /// arguments are ignored.
    pub fn message(&self) -> String {
        let template = self.code.template();
        let mut out = String::with_capacity(template.len() + 32);
        let mut args = self.args.iter();
        let mut rest = template;

        while let Some(gap) = memchr::memmem::find(rest.as_bytes(), GAP.as_bytes()) {
            out.push_str(&rest[..gap]);
            out.push_str(args.next().map_or(GAP, String::as_str));
            rest = &rest[gap + GAP.len()..];
        }
        out.push_str(rest);
        out
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        self.code.is_internal()
    }
}

/// Plain rendering: `error[E2321]: <message>` and a ` --> <location>` line.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message())?;
        if self.location != Location::Unknown {
            write!(f, "\n --> {}", self.location)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
