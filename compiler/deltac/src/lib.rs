//! Delta front end.
//!
//! ```text
//! file / line ──► SourceReader ──► LexicalAnalyzer ──► Session
//!                                        │                │
//!                                   SymbolTable      commands, printer
//! ```
//!
//! The session pulls tokens from the analyzer, runs the ones that name a
//! command and prints the rest. There is no parser yet, so printing tokens
//! is the whole output of a run.

pub mod config;
pub mod help;
pub mod printer;
pub mod session;

use std::sync::Once;

pub use config::{parse_args, CliAction, SessionConfig};
pub use printer::TokenPrinter;
pub use session::{RunOutcome, Session, SessionError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Enable with `RUST_LOG=delta_lexer=trace`
/// or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
