//! Delta CLI
//!
//! `delta FILE` prints the tokens of a file; `delta` alone starts an
//! interactive session where every line is lexed as it is entered.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use delta_diagnostic::emitter::TerminalEmitter;
use delta_symbols::CommandStatus;
use deltac::config::{BUFFER_SIZE_ENV, USAGE};
use deltac::{init_tracing, parse_args, CliAction, RunOutcome, Session, SessionConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

type StderrSession = Session<TerminalEmitter<io::Stderr>, io::Stdout>;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_buffer_size = std::env::var(BUFFER_SIZE_ENV).ok();

    match parse_args(&args, env_buffer_size.as_deref()) {
        Ok(CliAction::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(CliAction::Version) => {
            println!("delta {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(CliAction::Run { config, file }) => {
            let reporter = TerminalEmitter::stderr(config.color, io::stderr().is_terminal());
            let mut session = Session::new(config.clone(), reporter, io::stdout());
            // Typos at the prompt do not fail an interactive session.
            let ok = match file {
                Some(path) => run_file(&mut session, &path) && session.error_count() == 0,
                None => repl(&mut session, &config),
            };
            session.finish();
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

/// Lex a whole file. Returns `false` if the run had to stop.
fn run_file(session: &mut StderrSession, path: &Path) -> bool {
    if session.push_file(path) == CommandStatus::Failed {
        return false;
    }
    match session.run() {
        Ok(_) => true,
        Err(err) => {
            eprintln!("{err}");
            false
        }
    }
}

/// Read lines until `quit`, end of input or an internal error.
fn repl(session: &mut StderrSession, config: &SessionConfig) -> bool {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("error: cannot start the line editor: {err}");
            return false;
        }
    };

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                session.push_text("stdin", &format!("{line}\n"));
                match session.run() {
                    Ok(RunOutcome::Exhausted) => {}
                    Ok(RunOutcome::Quit) => return true,
                    Err(err) => {
                        eprintln!("{err}");
                        return false;
                    }
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return true,
            Err(err) => {
                eprintln!("error: {err}");
                return false;
            }
        }
    }
}
