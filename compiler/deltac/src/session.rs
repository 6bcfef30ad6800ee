//! Token consumer and command host.
//!
//! A [`Session`] owns the analyzer and pulls tokens from it until every
//! source is exhausted or `quit` runs. Tokens naming a command run it;
//! everything else is printed with [`TokenPrinter`].
//!
//! Lexical errors are counted and reported, and the session keeps going.
//! An internal error stops the run.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use delta_diagnostic::emitter::DiagnosticEmitter;
use delta_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, Location};
use delta_ir::{Position, Token, TokenCategory};
use delta_lexer::{LexError, LexicalAnalyzer};
use delta_lexer_core::{ReaderError, SourceReader};
use delta_symbols::{CommandHost, CommandImpl, CommandStatus, EntryAttribute, SymbolTable};
use tracing::debug;

use crate::config::SessionConfig;
use crate::help;
use crate::printer::{entry_kind, TokenPrinter};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The lexer broke one of its own invariants.
    #[error("{0}")]
    Internal(Diagnostic),
    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every source was read to the end.
    Exhausted,
    /// `quit` ran.
    Quit,
}

pub struct Session<E: DiagnosticEmitter, W: Write> {
    lexer: LexicalAnalyzer<DiagnosticQueue>,
    /// One token of lookahead for command arguments.
    pending: Option<Token>,
    config: SessionConfig,
    reporter: E,
    out: W,
    printer: TokenPrinter,
    error_count: usize,
    /// First write failure inside a command, surfaced by `run`.
    write_error: Option<io::Error>,
}

impl<E: DiagnosticEmitter, W: Write> Session<E, W> {
    /// A session with a freshly seeded symbol table and no sources.
    pub fn new(config: SessionConfig, reporter: E, out: W) -> Self {
        Self::with_symbols(config, SymbolTable::new(), reporter, out)
    }

    pub fn with_symbols(
        config: SessionConfig,
        symbols: SymbolTable,
        reporter: E,
        out: W,
    ) -> Self {
        Session {
            lexer: LexicalAnalyzer::new(symbols, DiagnosticQueue::new()),
            pending: None,
            config,
            reporter,
            out,
            printer: TokenPrinter::new(),
            error_count: 0,
            write_error: None,
        }
    }

    /// Queue the file at `path`. Reports E5101 when it cannot be opened.
    pub fn push_file(&mut self, path: &Path) -> CommandStatus {
        match SourceReader::open(path, self.config.reader) {
            Ok(reader) => {
                self.lexer.push_source(reader);
                CommandStatus::Continue
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "cannot open source");
                self.report(&open_failure(path, &err));
                CommandStatus::Failed
            }
        }
    }

    /// Queue in-memory text, such as one line typed at the prompt.
    pub fn push_text(&mut self, name: &str, text: &str) -> CommandStatus {
        match SourceReader::from_bytes(name, text, self.config.reader) {
            Ok(reader) => {
                self.lexer.push_source(reader);
                CommandStatus::Continue
            }
            Err(err) => {
                self.report(
                    &Diagnostic::internal(ErrorCode::E1101, "session.rs", "push_text")
                        .with_arg(err.to_string()),
                );
                CommandStatus::Failed
            }
        }
    }

    /// Consume tokens until the sources run out or `quit` runs.
    pub fn run(&mut self) -> Result<RunOutcome, SessionError> {
        loop {
            let Some(token) = self.next()? else {
                self.out.flush()?;
                return Ok(RunOutcome::Exhausted);
            };

            let status = if token.category() == TokenCategory::Command {
                self.dispatch(&token)?
            } else {
                self.printer
                    .print(&mut self.out, &token, self.lexer.symbols())?;
                CommandStatus::Continue
            };

            if let Some(err) = self.write_error.take() {
                return Err(SessionError::Io(err));
            }
            if status == CommandStatus::Quit {
                debug!("quit requested");
                self.out.flush()?;
                return Ok(RunOutcome::Quit);
            }
        }
    }

    /// Diagnostics reported so far, lexical and command errors alike.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn symbols(&self) -> &SymbolTable {
        self.lexer.symbols()
    }

    pub fn reporter(&self) -> &E {
        &self.reporter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Flush the reporter after printing the error summary.
    pub fn finish(mut self) -> (E, W) {
        self.reporter.emit_summary(self.error_count);
        self.reporter.flush();
        (self.reporter, self.out)
    }

    /// The next token, or `None` once the sources are exhausted.
    ///
    /// Lexical errors are reported and skipped.
    fn next(&mut self) -> Result<Option<Token>, SessionError> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }
        loop {
            let result = self.lexer.next_token();
            for diag in self.lexer.emitter_mut().take() {
                self.report(&diag);
            }
            match result {
                Ok(token) => return Ok(token),
                Err(LexError::Lexical(_)) => {}
                Err(LexError::Internal(diag)) => return Err(SessionError::Internal(diag)),
            }
        }
    }

    fn report(&mut self, diag: &Diagnostic) {
        self.error_count += 1;
        self.reporter.emit(diag);
    }

    /// Run the command `token` names, reading its argument if it takes one.
    fn dispatch(&mut self, token: &Token) -> Result<CommandStatus, SessionError> {
        let command = token
            .entry()
            .and_then(|id| self.lexer.symbols().get(id))
            .and_then(|entry| match entry.attribute {
                EntryAttribute::Command(command) => Some((entry.lexeme.clone(), command)),
                _ => None,
            });
        let Some((name, command)) = command else {
            return Err(SessionError::Internal(
                Diagnostic::internal(ErrorCode::E1300, "session.rs", "dispatch")
                    .with_arg("command token without a command entry"),
            ));
        };
        debug!(command = %name, "running command");

        match command {
            CommandImpl::Nullary(nullary) => {
                if !self.skip_empty_parens(token.position())? {
                    return Ok(CommandStatus::Failed);
                }
                Ok(nullary(self))
            }
            CommandImpl::Unary(unary) => match self.argument(token.position())? {
                Some(arg) => Ok(unary(self, &arg)),
                None => Ok(CommandStatus::Failed),
            },
        }
    }

    /// Accept `()` after a command without arguments.
    fn skip_empty_parens(&mut self, at: Position) -> Result<bool, SessionError> {
        match self.next()? {
            Some(open) if open.category() == TokenCategory::LParen => match self.next()? {
                Some(close) if close.category() == TokenCategory::RParen => Ok(true),
                other => {
                    self.pending = other;
                    self.report_arity(at, "0");
                    Ok(false)
                }
            },
            other => {
                self.pending = other;
                Ok(true)
            }
        }
    }

    /// The argument of a one-argument command, written `cmd "arg"` or
    /// `cmd("arg")`. A name is accepted in place of a string.
    fn argument(&mut self, at: Position) -> Result<Option<String>, SessionError> {
        let mut token = self.next()?;
        let parenthesized = token
            .as_ref()
            .is_some_and(|t| t.category() == TokenCategory::LParen);
        if parenthesized {
            token = self.next()?;
        }

        let Some(token) = token else {
            self.report_arity(at, "1");
            return Ok(None);
        };
        let arg = match self.argument_text(&token) {
            Some(arg) => arg,
            None if token.category() == TokenCategory::RParen => {
                self.report_arity(at, "1");
                return Ok(None);
            }
            None => {
                let diag = self.at_token(ErrorCode::E4003, token.position()).with_arg("string");
                self.report(&diag);
                return Ok(None);
            }
        };

        if parenthesized {
            match self.next()? {
                Some(close) if close.category() == TokenCategory::RParen => {}
                other => {
                    self.pending = other;
                    self.report_arity(at, "1");
                    return Ok(None);
                }
            }
        }
        Ok(Some(arg))
    }

    fn argument_text(&self, token: &Token) -> Option<String> {
        if token.category() == TokenCategory::LiteralString {
            let lexeme = token.lexeme()?;
            let inner = lexeme.strip_prefix('"')?.strip_suffix('"')?;
            return Some(inner.to_string());
        }
        let entry = self.lexer.symbols().get(token.entry()?)?;
        Some(entry.lexeme.clone())
    }

    fn report_arity(&mut self, at: Position, expected: &str) {
        let diag = self.at_token(ErrorCode::E4002, at).with_arg(expected);
        self.report(&diag);
    }

    fn at_token(&self, code: ErrorCode, position: Position) -> Diagnostic {
        match self.lexer.current_source() {
            Some(name) => Diagnostic::at(code, name, position),
            None => Diagnostic::new(code, Location::Unknown),
        }
    }

    /// Write `text` to the output, remembering the first failure.
    fn write_text(&mut self, text: &str) -> CommandStatus {
        match self.out.write_all(text.as_bytes()) {
            Ok(()) => CommandStatus::Continue,
            Err(err) => {
                self.write_error.get_or_insert(err);
                CommandStatus::Failed
            }
        }
    }
}

/// Diagnostic for a source that could not be opened.
fn open_failure(path: &Path, err: &ReaderError) -> Diagnostic {
    match err {
        ReaderError::FileInaccessible { .. } => {
            Diagnostic::at(ErrorCode::E5101, path.display().to_string(), Position::START)
        }
        ReaderError::MapFailed { .. } | ReaderError::TooLarge { .. } => {
            Diagnostic::internal(ErrorCode::E1201, "session.rs", "push_file")
                .with_arg(err.to_string())
        }
        ReaderError::InvalidBufferSize(_) => {
            Diagnostic::internal(ErrorCode::E1101, "session.rs", "push_file")
                .with_arg(err.to_string())
        }
        ReaderError::PushbackLimit => {
            Diagnostic::internal(ErrorCode::E1300, "session.rs", "push_file")
                .with_arg(err.to_string())
        }
    }
}

impl<E: DiagnosticEmitter, W: Write> CommandHost for Session<E, W> {
    fn show_help(&mut self, topic: Option<&str>) -> CommandStatus {
        match topic {
            None => self.write_text(help::GENERAL),
            Some(name) => match help::topic(name) {
                Some(text) => self.write_text(text),
                None => {
                    let diag = Diagnostic::new(ErrorCode::E5105, Location::Unknown).with_arg(name);
                    self.report(&diag);
                    CommandStatus::Failed
                }
            },
        }
    }

    fn show_workspace(&mut self) -> CommandStatus {
        let symbols = self.lexer.symbols();
        let mut listing = String::new();
        for (title, category) in [
            ("constants", TokenCategory::Constant),
            ("functions", TokenCategory::Function),
            ("variables", TokenCategory::Identifier),
        ] {
            let _ = writeln!(listing, "{title}:");
            for (_, entry) in symbols.iter_by_category(category) {
                let _ = writeln!(listing, "  {} [{}]", entry.lexeme, entry_kind(entry));
            }
        }
        self.write_text(&listing)
    }

    fn clear_workspace(&mut self) -> CommandStatus {
        // The lookahead token was interned before the command ran.
        let kept = self
            .pending
            .as_ref()
            .filter(|token| token.category() == TokenCategory::Identifier)
            .and_then(|token| {
                let entry = self.lexer.symbols().get(token.entry()?)?;
                Some((entry.lexeme.clone(), token.position()))
            });

        let symbols = self.lexer.symbols_mut();
        let removed = symbols.delete_by_category(TokenCategory::Identifier);
        debug!(removed, "cleared workspace");

        if let Some((lexeme, position)) = kept {
            let reinterned = symbols
                .intern_identifier(&lexeme)
                .ok()
                .and_then(|id| Token::symbol(TokenCategory::Identifier, id, position));
            match reinterned {
                Some(token) => self.pending = Some(token),
                None => {
                    self.pending = None;
                    let diag =
                        Diagnostic::internal(ErrorCode::E1300, "session.rs", "clear_workspace")
                            .with_arg(format!("cannot keep '{lexeme}' across wsc"));
                    self.report(&diag);
                    return CommandStatus::Failed;
                }
            }
        }
        CommandStatus::Continue
    }

    fn load_source(&mut self, path: &str) -> CommandStatus {
        self.push_file(Path::new(path))
    }

    fn load_library(&mut self, path: &str) -> CommandStatus {
        let diag = match std::fs::File::open(path) {
            Ok(_) => Diagnostic::new(ErrorCode::E5106, Location::Unknown)
                .with_arg(format!("'{path}' was not opened")),
            Err(err) => {
                debug!(path, %err, "cannot open library");
                Diagnostic::at(ErrorCode::E5101, path, Position::START)
            }
        };
        self.report(&diag);
        CommandStatus::Failed
    }

    fn import_function(&mut self, name: &str) -> CommandStatus {
        let symbols = self.lexer.symbols();
        let loaded = symbols
            .lookup(name)
            .and_then(|id| symbols.get(id))
            .is_some_and(|entry| entry.category == TokenCategory::Function);
        let code = if loaded {
            ErrorCode::E5104
        } else {
            ErrorCode::E5103
        };
        self.report(&Diagnostic::new(code, Location::Unknown));
        CommandStatus::Failed
    }
}

impl<E: DiagnosticEmitter, W: Write> std::fmt::Debug for Session<E, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("sources", &self.lexer.source_depth())
            .field("symbols", &self.lexer.symbols().len())
            .field("error_count", &self.error_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
