//! Diagnostics for the Delta front end.
//!
//! Every reportable failure carries:
//! - an [`ErrorCode`] (`E2321`), whose first digit names the phase
//! - a fixed message template with `[..]` gaps
//! - substitution arguments that fill the gaps in order
//! - a [`Location`]: a source line/column, or the internal file and
//!   function that detected a broken invariant
//!
//! Emitting is separate from detecting. Callers build a [`Diagnostic`], hand
//! it to a [`DiagnosticEmitter`](emitter::DiagnosticEmitter), and decide for
//! themselves whether to continue.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Location};
pub use error_code::{ErrorCode, Phase};
pub use queue::DiagnosticQueue;
