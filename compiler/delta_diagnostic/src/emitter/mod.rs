//! Diagnostic emitters.
//!
//! An emitter decides how a [`Diagnostic`] reaches the user. Detection code
//! never prints; it hands diagnostics to whichever emitter its owner chose.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary line once a run is over.
    fn emit_summary(&mut self, error_count: usize);
}

impl<E: DiagnosticEmitter + ?Sized> DiagnosticEmitter for &mut E {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        (**self).emit_summary(error_count);
    }
}

impl<E: DiagnosticEmitter + ?Sized> DiagnosticEmitter for Box<E> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        (**self).emit_summary(error_count);
    }
}
