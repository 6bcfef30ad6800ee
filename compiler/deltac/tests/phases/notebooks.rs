//! Files loaded with `load` are read in place, then the loading file resumes.

use delta_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use crate::common::{lex_file, write_file};

fn identifiers(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter(|line| line.starts_with("LC_IDENTIFIER "))
        .filter_map(|line| line.split(' ').nth(1))
        .collect()
}

#[test]
fn nested_loads_resume_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_file(dir.path(), "inner.dl", "in_inner\n");
    let middle = write_file(
        dir.path(),
        "middle.dl",
        &format!("middle_before\nload(\"{}\")\nmiddle_after\n", inner.display()),
    );
    let outer = write_file(
        dir.path(),
        "outer.dl",
        &format!("outer_before load(\"{}\") outer_after", middle.display()),
    );

    let run = lex_file(&outer, 8);
    assert!(run.codes.is_empty(), "{:?}", run.codes);
    assert_eq!(
        identifiers(&run.lines),
        vec![
            "outer_before",
            "middle_before",
            "in_inner",
            "middle_after",
            "outer_after"
        ]
    );
}

#[test]
fn positions_restart_in_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_file(dir.path(), "inner.dl", "\n\n   deep");
    let outer = write_file(
        dir.path(),
        "outer.dl",
        &format!("load(\"{}\") after", inner.display()),
    );

    let run = lex_file(&outer, 4096);
    assert!(run
        .lines
        .contains(&"LC_IDENTIFIER deep [variable] @ ln 3 : col 4".to_string()));
    let after = run.lines.iter().find(|line| line.contains(" after ")).unwrap();
    // Back in the outer file, on its only line.
    assert!(after.contains("@ ln 1 : col "), "{after}");
}

#[test]
fn missing_notebook_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let outer = write_file(dir.path(), "outer.dl", "load(\"missing.dl\") x");
    let run = lex_file(&outer, 4096);
    assert_eq!(run.codes, vec![ErrorCode::E5101]);
    assert_eq!(identifiers(&run.lines), vec!["x"]);
}

#[test]
fn workspace_cleared_from_a_notebook() {
    let dir = tempfile::tempdir().unwrap();
    let inner = write_file(dir.path(), "clear.dl", "wsc");
    let outer = write_file(
        dir.path(),
        "outer.dl",
        &format!("a b load(\"{}\") ws", inner.display()),
    );
    let run = lex_file(&outer, 4096);
    let variables = run
        .lines
        .iter()
        .skip_while(|line| line.as_str() != "variables:")
        .count();
    // Only the header: both variables were cleared.
    assert_eq!(variables, 1);
}
