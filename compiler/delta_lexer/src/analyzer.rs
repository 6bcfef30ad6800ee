//! Token stream over a stack of sources.
//!
//! [`LexicalAnalyzer::next_token`] reads the first byte of a token, resolves
//! single-byte tokens on the spot and otherwise drives the automaton picked
//! by [`select`] until it stops. Whitespace and comments are skipped.
//!
//! Sources form a stack: a source pushed while another is being read (the
//! `load` command) is read to the end first, then the previous one resumes
//! where it stopped.

use delta_diagnostic::emitter::DiagnosticEmitter;
use delta_ir::{Position, Token, TokenCategory};
use delta_lexer_core::{ReaderError, SourceReader};
use delta_symbols::SymbolTable;
use tracing::{debug, trace};

use crate::automata::{self, select, ActionFlags, Selection, State, Verdict};
use crate::{LexError, LexErrorKind};

/// A source being read and the position of its next byte.
#[derive(Debug)]
struct Frame {
    reader: SourceReader,
    position: Position,
}

/// What the drive loop ended with, before it becomes a [`Token`].
struct Recognized {
    category: TokenCategory,
    lexeme: Option<Vec<u8>>,
    promote: bool,
}

/// Lexical analyzer owning its sources, the symbol table and a diagnostic sink.
pub struct LexicalAnalyzer<E: DiagnosticEmitter> {
    sources: Vec<Frame>,
    symbols: SymbolTable,
    emitter: E,
}

impl<E: DiagnosticEmitter> LexicalAnalyzer<E> {
    pub fn new(symbols: SymbolTable, emitter: E) -> Self {
        LexicalAnalyzer {
            sources: Vec::new(),
            symbols,
            emitter,
        }
    }

    /// Read `reader` next, before whatever is left of the current source.
    pub fn push_source(&mut self, reader: SourceReader) {
        debug!(source = reader.name(), depth = self.sources.len() + 1, "pushed source");
        self.sources.push(Frame {
            reader,
            position: Position::START,
        });
    }

    /// Number of sources not yet exhausted.
    pub fn source_depth(&self) -> usize {
        self.sources.len()
    }

    /// Name of the source the next token comes from.
    pub fn current_source(&self) -> Option<&str> {
        self.sources.last().map(|frame| frame.reader.name())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emitter
    }

    /// Give back the table and the emitter; remaining sources are closed.
    pub fn into_parts(self) -> (SymbolTable, E) {
        for frame in self.sources {
            frame.reader.close();
        }
        (self.symbols, self.emitter)
    }

    /// The next token that is not whitespace or a comment.
    ///
    /// Returns `Ok(None)` once every source is exhausted. A lexical error
    /// abandons the current token only: the bytes it consumed are gone and
    /// the next call resumes after them. Errors are emitted before they are
    /// returned.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            let Some(frame) = self.sources.last_mut() else {
                return Ok(None);
            };
            if frame.reader.is_eof() {
                if let Some(done) = self.sources.pop() {
                    debug!(source = done.reader.name(), "source exhausted");
                    done.reader.close();
                }
                continue;
            }

            match Self::recognize(frame, &mut self.symbols) {
                Ok(token) if token.category().is_trivia() => {}
                Ok(token) => return Ok(Some(token)),
                Err(err) => {
                    self.emitter.emit(err.diagnostic());
                    return Err(err);
                }
            }
        }
    }

    /// Recognize one token, trivia included, from a source that is not at
    /// end of input.
    fn recognize(frame: &mut Frame, symbols: &mut SymbolTable) -> Result<Token, LexError> {
        frame.reader.mark_token_start();
        let start = frame.position;
        let first = frame.reader.next_char();
        frame.position = start.advance(first);

        let recognized = match select(first) {
            Selection::Single(category) => Recognized {
                category,
                lexeme: None,
                promote: false,
            },
            Selection::Run(state) => Self::drive(frame, state)?,
            Selection::Unsupported => {
                let kind = LexErrorKind::UnsupportedCharacter(first);
                return Err(LexError::Lexical(
                    kind.into_diagnostic(frame.reader.name(), start),
                ));
            }
        };

        Self::build(recognized, start, symbols)
    }

    /// Feed `state`'s automaton until it stops asking for input.
    fn drive(frame: &mut Frame, mut state: State) -> Result<Recognized, LexError> {
        let mut lexeme = None;
        loop {
            let at = frame.position;
            let input = if frame.reader.is_eof() {
                None
            } else {
                Some(frame.reader.next_char())
            };

            let action = automata::step(state, input);
            trace!(
                ?state,
                ?input,
                verdict = ?action.verdict,
                flags = ?action.flags,
                "automaton step"
            );

            if let Some(byte) = input {
                if action.flags.contains(ActionFlags::PUSH_BACK) {
                    frame.reader.push_back().map_err(|err| match err {
                        ReaderError::PushbackLimit => {
                            LexError::internal("drive", "pushback went past the loaded bytes")
                        }
                        other => LexError::internal("drive", other.to_string()),
                    })?;
                } else {
                    frame.position = at.advance(byte);
                }
            }

            if action.flags.contains(ActionFlags::SAVE_LEXEME) {
                lexeme = Some(frame.reader.extract_lexeme());
            }

            if action.flags.contains(ActionFlags::CONTINUE) {
                if input.is_none() {
                    return Err(LexError::internal(
                        "drive",
                        "automaton kept going at end of input",
                    ));
                }
                state = action.next;
                continue;
            }

            return match action.verdict {
                Verdict::Recognized(category) => Ok(Recognized {
                    category,
                    lexeme,
                    promote: action.flags.contains(ActionFlags::PROMOTE),
                }),
                Verdict::Failed(kind) => Err(LexError::Lexical(
                    kind.into_diagnostic(frame.reader.name(), at),
                )),
                Verdict::Pending => Err(LexError::internal(
                    "drive",
                    format!("automaton stopped without a verdict in {state:?}"),
                )),
            };
        }
    }

    /// Attach the payload the category's band requires.
    fn build(
        recognized: Recognized,
        start: Position,
        symbols: &mut SymbolTable,
    ) -> Result<Token, LexError> {
        let Recognized {
            category,
            lexeme,
            promote,
        } = recognized;

        let token = match lexeme {
            Some(bytes) if promote => {
                let text = String::from_utf8_lossy(&bytes);
                let id = symbols
                    .intern_identifier(&text)
                    .map_err(|err| LexError::internal("build", err.to_string()))?;
                let category = symbols.get(id).map_or(category, |entry| entry.category);
                Token::symbol(category, id, start)
            }
            Some(bytes) => {
                let text = String::from_utf8(bytes)
                    .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
                Token::literal(category, text, start)
            }
            None => Token::bare(category, start),
        };

        token.ok_or_else(|| {
            LexError::internal(
                "build",
                format!("{category} does not match the payload of its token"),
            )
        })
    }
}

impl<E: DiagnosticEmitter + std::fmt::Debug> std::fmt::Debug for LexicalAnalyzer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalAnalyzer")
            .field("sources", &self.sources)
            .field("symbols", &self.symbols.len())
            .field("emitter", &self.emitter)
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
