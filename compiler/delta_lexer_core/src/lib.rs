//! Character source for the Delta lexer.
//!
//! [`SourceReader`] streams the bytes of a memory-mapped file (or an
//! in-memory line) through two fixed-size buffers, each closed by a
//! [`SENTINEL`] byte. The lexer reads one byte at a time, pushes bytes back
//! when an automaton overshoots, and copies out the bytes of the token it
//! just finished.
//!
//! This crate has no `delta_*` dependencies.

mod source_reader;

pub use source_reader::{
    ReaderConfig, ReaderError, SourceReader, DEFAULT_BUFFER_SIZE, MIN_BUFFER_SIZE, SENTINEL,
};
