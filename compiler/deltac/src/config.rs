//! Session configuration and command-line parsing.

use std::path::PathBuf;

use delta_diagnostic::emitter::ColorMode;
use delta_lexer_core::{ReaderConfig, ReaderError};

/// Environment variable supplying the default buffer size.
pub const BUFFER_SIZE_ENV: &str = "DELTA_BUFFER_SIZE";

pub const USAGE: &str = "\
Usage: delta [OPTIONS] [FILE]

Prints the tokens of FILE, or starts an interactive session without it.

Options:
  --buffer-size=<n>       Reader buffer size in bytes (default: 4096, min: 2)
  --color=<mode>          Diagnostics color: auto, always, never
  -h, --help              Print this help
  -V, --version           Print the version

Environment:
  DELTA_BUFFER_SIZE       Default for --buffer-size
  RUST_LOG                Enable logging, e.g. RUST_LOG=delta_lexer=trace";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub reader: ReaderConfig,
    pub color: ColorMode,
    /// Prompt of the interactive shell.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            reader: ReaderConfig::default(),
            color: ColorMode::Auto,
            prompt: ">> ".to_string(),
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Lex `file`, or read lines interactively when there is none.
    Run {
        config: SessionConfig,
        file: Option<PathBuf>,
    },
    Help,
    Version,
}

/// Parse the arguments after the program name.
///
/// `env_buffer_size` is the value of [`BUFFER_SIZE_ENV`], if set; the
/// command line overrides it.
pub fn parse_args(args: &[String], env_buffer_size: Option<&str>) -> Result<CliAction, String> {
    let mut config = SessionConfig::default();
    if let Some(value) = env_buffer_size {
        config.reader = parse_buffer_size(value)
            .map_err(|err| format!("invalid {BUFFER_SIZE_ENV}: {err}"))?;
    }

    let mut file = None;
    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(CliAction::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(CliAction::Version);
        } else if let Some(value) = arg.strip_prefix("--buffer-size=") {
            config.reader = parse_buffer_size(value)?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            config.color = value.parse()?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else if file.is_none() {
            file = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument `{arg}`; only one file can be lexed"));
        }
    }

    Ok(CliAction::Run { config, file })
}

fn parse_buffer_size(value: &str) -> Result<ReaderConfig, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("buffer size `{value}` is not a number"))?;
    let config = ReaderConfig::with_buffer_size(size);
    config.validate().map_err(|err: ReaderError| err.to_string())?;
    Ok(config)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
