use pretty_assertions::assert_eq;

use delta_ir::Position;

use super::*;
use crate::{ErrorCode, Location};

fn render(diag: &Diagnostic, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn plain_output_matches_display_plus_blank_line() {
    let diag = Diagnostic::at(ErrorCode::E2322, "calc.dl", Position::new(2, 5))
        .with_arg("a binary number may only have '0', '1' and '_'");
    assert_eq!(render(&diag, ColorMode::Never), format!("{diag}\n\n"));
}

#[test]
fn colored_output_wraps_header() {
    let diag = Diagnostic::new(ErrorCode::E2331, Location::Unknown);
    let out = render(&diag, ColorMode::Always);
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
    assert!(out.contains("a string cannot be empty"));
}

#[test]
fn auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn parses_color_modes() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn summary_pluralizes() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0);
    emitter.emit_summary(1);
    emitter.emit_summary(3);
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "error: lexing reported 1 error\nerror: lexing reported 3 errors\n"
    );
}
