//! Shared test utilities for phase tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use delta_diagnostic::{DiagnosticQueue, ErrorCode};
use delta_lexer_core::ReaderConfig;
use deltac::{RunOutcome, Session, SessionConfig};

/// Output of a session run over files.
pub struct Outcome {
    pub outcome: RunOutcome,
    pub lines: Vec<String>,
    pub codes: Vec<ErrorCode>,
}

/// Write `contents` to `name` inside `dir`.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Lex the file at `path` with the given reader buffer size.
pub fn lex_file(path: &Path, buffer_size: usize) -> Outcome {
    let config = SessionConfig {
        reader: ReaderConfig::with_buffer_size(buffer_size),
        ..SessionConfig::default()
    };
    let mut session = Session::new(config, DiagnosticQueue::new(), Vec::new());
    session.push_file(path);
    let outcome = session.run().unwrap();
    let (queue, out) = session.finish();
    Outcome {
        outcome,
        lines: String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect(),
        codes: queue.codes(),
    }
}

/// Category names of the printed token lines, dropping command output.
pub fn categories(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter(|line| line.starts_with("LC_"))
        .filter_map(|line| line.split(' ').next())
        .collect()
}
